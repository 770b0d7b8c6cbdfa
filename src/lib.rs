//! # effect-compat
//!
//! Version-aware status effect queries for game server plugins.
//!
//! A plugin compiled against a modern platform API often has to run on
//! historical server revisions whose effect-query surface is shaped
//! differently: the oldest supported revision only exposes a full
//! enumeration of an entity's active effects, while newer revisions offer
//! direct retrieval by effect type. Some effect types don't exist at all on
//! older revisions. This crate centralizes that dispatch so calling code can
//! ask "does this entity have Speed, and at what amplifier?" without caring
//! which revision it is running on.
//!
//! ## Design Principles
//!
//! 1. **Read-only**: the crate never applies, removes, or mutates effects.
//!    Entities are borrowed capability handles; the platform's answer at
//!    query time is authoritative.
//!
//! 2. **Closed revision set**: supported revisions are an exhaustive enum.
//!    A lookup on an unrecognized revision is a loud configuration error,
//!    never a silent "no effect" - the two must stay distinguishable.
//!
//! 3. **Capability-gated**: every query consults the capability registry
//!    first. Effect kinds unavailable on the running revision short-circuit
//!    to absence without touching the platform.
//!
//! ## Modules
//!
//! - `revision`: supported server revisions and version-string detection
//! - `effects`: effect identifiers, instances, capability registry, and the
//!   version-dispatch lookup
//! - `entity`: the entity collaborator seam and an owned snapshot backend
//!
//! ## Example
//!
//! ```
//! use effect_compat::{
//!     amplifier_of, CapabilityRegistry, EffectInstance, EffectKind,
//!     EffectLookup, EntitySnapshot, NativeEffectId, ServerRevision,
//! };
//!
//! let revision = ServerRevision::V1_12;
//! let registry = CapabilityRegistry::builtin(revision);
//! let lookup = EffectLookup::new(revision, &registry);
//!
//! let entity = EntitySnapshot::new()
//!     .with_effect(EffectInstance::new(NativeEffectId::new("SPEED"), 1));
//!
//! let speed = lookup.find_effect(&entity, EffectKind::Speed).unwrap();
//! assert_eq!(amplifier_of(speed.as_ref()), Some(1));
//!
//! // Glowing doesn't exist on 1.8 - the platform is never queried.
//! let registry_18 = CapabilityRegistry::builtin(ServerRevision::V1_8);
//! let lookup_18 = EffectLookup::new(ServerRevision::V1_8, &registry_18);
//! assert!(lookup_18.find_effect(&entity, EffectKind::Glowing).unwrap().is_none());
//! ```

pub mod effects;
pub mod entity;
pub mod revision;

// Re-export commonly used types
pub use crate::effects::{
    amplifier_of, CapabilityRegistry, EffectCapability, EffectInstance, EffectKind, EffectLookup,
    LookupError, NativeEffectId,
};
pub use crate::entity::{EffectCarrier, EntitySnapshot};
pub use crate::revision::ServerRevision;
