//! Version-aware effect lookup.
//!
//! The dispatch at the heart of the crate: availability gate, then the
//! query strategy the running revision actually supports. Stateless per
//! call - the only state read is the process-wide revision and the static
//! capability registry, both externally owned and immutable during a call.

use thiserror::Error;
use tracing::{error, trace};

use crate::entity::EffectCarrier;
use crate::revision::ServerRevision;

use super::id::EffectKind;
use super::instance::EffectInstance;
use super::registry::CapabilityRegistry;

/// A lookup that could not be answered.
///
/// Neither variant overlaps with a legitimate "no effect" result - that is
/// the point. An unsupported revision in particular must never collapse
/// into absence: downstream decisions that key on effect presence would be
/// corrupted by the ambiguity.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The detected revision is outside the supported set. Fatal to the
    /// calling operation; no query strategy is guessed.
    #[error("unsupported server revision: {0}")]
    UnsupportedRevision(ServerRevision),

    /// The entity handle no longer refers to a live entity.
    #[error("entity handle is no longer valid")]
    InvalidEntity,
}

/// Version-aware effect queries against live entities.
///
/// Holds the detected revision and a reference to the capability registry;
/// both are read-only and owned by the host. Construct one at startup and
/// share it freely - every method is a synchronous, non-blocking read.
///
/// ```
/// use effect_compat::{
///     CapabilityRegistry, EffectInstance, EffectKind, EffectLookup,
///     EntitySnapshot, NativeEffectId, ServerRevision,
/// };
///
/// let registry = CapabilityRegistry::builtin(ServerRevision::V1_14);
/// let lookup = EffectLookup::new(ServerRevision::V1_14, &registry);
///
/// let entity = EntitySnapshot::new()
///     .with_effect(EffectInstance::new(NativeEffectId::new("BAD_OMEN"), 0));
///
/// assert!(lookup.has_effect(&entity, EffectKind::BadOmen).unwrap());
/// assert!(!lookup.has_effect(&entity, EffectKind::Poison).unwrap());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct EffectLookup<'a> {
    revision: ServerRevision,
    registry: &'a CapabilityRegistry,
}

impl<'a> EffectLookup<'a> {
    /// Create a lookup for the detected revision.
    #[must_use]
    pub fn new(revision: ServerRevision, registry: &'a CapabilityRegistry) -> Self {
        Self { revision, registry }
    }

    /// The revision this lookup dispatches on.
    #[must_use]
    pub fn revision(&self) -> ServerRevision {
        self.revision
    }

    /// Retrieve the active effect of the given kind on an entity.
    ///
    /// Kinds unavailable on the running revision return `Ok(None)` without
    /// touching the entity - the designed escape hatch for effects that
    /// don't exist on older revisions. Otherwise the query dispatches on
    /// the revision: 1.8 scans the full enumeration for the first instance
    /// matching the native mapping, 1.12 through 1.16 issue one direct
    /// retrieval and trust its answer.
    ///
    /// # Errors
    ///
    /// `LookupError::InvalidEntity` if the handle is stale;
    /// `LookupError::UnsupportedRevision` if the revision is `Unknown`.
    pub fn find_effect<E>(
        &self,
        entity: &E,
        kind: EffectKind,
    ) -> Result<Option<EffectInstance>, LookupError>
    where
        E: EffectCarrier + ?Sized,
    {
        if !entity.is_valid() {
            return Err(LookupError::InvalidEntity);
        }

        let Some(native) = self.registry.native_mapping(kind) else {
            trace!(%kind, revision = %self.revision, "effect unavailable, skipping platform query");
            return Ok(None);
        };

        match self.revision {
            ServerRevision::V1_8 => Ok(entity
                .active_effects()
                .into_iter()
                .find(|effect| effect.native_id == *native)),
            ServerRevision::V1_12
            | ServerRevision::V1_13
            | ServerRevision::V1_14
            | ServerRevision::V1_15
            | ServerRevision::V1_16 => Ok(entity.effect_by_native_id(native)),
            ServerRevision::Unknown => {
                error!(%kind, "effect lookup on unsupported server revision");
                Err(LookupError::UnsupportedRevision(self.revision))
            }
        }
    }

    /// Check whether an entity carries an active effect of the given kind.
    ///
    /// Uses the carrier's existence primitive instead of materializing a
    /// full instance. Applies the same availability short-circuit as
    /// [`find_effect`](Self::find_effect): unavailable kinds are `false`
    /// without a platform query.
    ///
    /// # Errors
    ///
    /// Same conditions as [`find_effect`](Self::find_effect).
    pub fn has_effect<E>(&self, entity: &E, kind: EffectKind) -> Result<bool, LookupError>
    where
        E: EffectCarrier + ?Sized,
    {
        if !entity.is_valid() {
            return Err(LookupError::InvalidEntity);
        }

        let Some(native) = self.registry.native_mapping(kind) else {
            trace!(%kind, revision = %self.revision, "effect unavailable, skipping platform query");
            return Ok(false);
        };

        if !self.revision.is_supported() {
            error!(%kind, "effect existence check on unsupported server revision");
            return Err(LookupError::UnsupportedRevision(self.revision));
        }

        Ok(entity.has_native_effect(native))
    }
}
