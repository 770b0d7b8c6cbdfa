//! Status effect identifiers, instances, and the version-dispatch lookup.
//!
//! The module splits the effect vocabulary in two:
//! - `EffectKind`: the abstract, revision-independent name a plugin uses
//!   internally ("Speed", "Nausea", ...)
//! - `NativeEffectId`: the platform's own effect-type name, opaque beyond
//!   equality ("SPEED", "CONFUSION", ...)
//!
//! A `CapabilityRegistry` bridges the two per running revision: each kind is
//! either available with a native mapping, or unavailable. `EffectLookup`
//! consults the registry and dispatches the actual entity query on the
//! detected `ServerRevision`.

mod id;
mod instance;
mod query;
mod registry;

pub use id::{EffectKind, NativeEffectId};
pub use instance::{amplifier_of, EffectInstance};
pub use query::{EffectLookup, LookupError};
pub use registry::{CapabilityRegistry, EffectCapability};
