//! Entity collaborator seam.
//!
//! The lookup core never owns an entity - it reads one through
//! `EffectCarrier`, a capability handle the host implements over whatever
//! its platform hands out. The trait exposes both query shapes the
//! supported revisions offer (full enumeration and direct retrieval) plus a
//! dedicated existence primitive; which of them a given call actually uses
//! is the lookup's decision, not the carrier's.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::effects::{EffectInstance, NativeEffectId};

/// Read-only view of a live entity's active effects.
///
/// Implementations wrap the host platform's entity object. All methods are
/// synchronous reads; the effect set may be mutated externally between
/// calls, and the answer at query time is authoritative - no staleness
/// detection is attempted.
///
/// ## Implementation Notes
///
/// - `active_effects`: the enumeration has no ordering guarantee. At most
///   one instance per native id is an invariant of the platform's entity
///   model, relied on but not enforced here.
/// - `effect_by_native_id`: direct retrieval as offered by modern
///   revisions. Legacy-only backends may implement it as a scan.
/// - `has_native_effect`: existence check without materializing an
///   instance; platforms expose this as a primitive on every revision.
/// - `is_valid`: override for handles that can go stale (despawned
///   entities, unloaded worlds). Lookups fail fast on invalid handles
///   instead of issuing an ambiguous platform query.
pub trait EffectCarrier {
    /// Whether this handle still refers to a live entity.
    fn is_valid(&self) -> bool {
        true
    }

    /// Enumerate every effect currently active on the entity.
    fn active_effects(&self) -> Vec<EffectInstance>;

    /// Retrieve the active effect with the given native id, if any.
    fn effect_by_native_id(&self, native_id: &NativeEffectId) -> Option<EffectInstance>;

    /// Check for an active effect with the given native id.
    fn has_native_effect(&self, native_id: &NativeEffectId) -> bool;
}

/// An owned snapshot of an entity's active effects.
///
/// For plugins that capture effect state once and query it repeatedly
/// (packet handlers, per-tick checks), and as the reference carrier in this
/// crate's tests and benches. A snapshot is always valid - it can't go
/// stale, it just gets replaced.
///
/// ```
/// use effect_compat::{EffectCarrier, EffectInstance, EntitySnapshot, NativeEffectId};
///
/// let snapshot = EntitySnapshot::new()
///     .with_effect(EffectInstance::new(NativeEffectId::new("SPEED"), 1))
///     .with_effect(EffectInstance::new(NativeEffectId::new("POISON"), 0));
///
/// assert_eq!(snapshot.len(), 2);
/// assert!(snapshot.has_native_effect(&NativeEffectId::new("POISON")));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySnapshot {
    effects: SmallVec<[EffectInstance; 4]>,
}

impl EntitySnapshot {
    /// Create an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an effect, builder-style.
    #[must_use]
    pub fn with_effect(mut self, effect: EffectInstance) -> Self {
        self.effects.push(effect);
        self
    }

    /// Add an effect in place.
    pub fn push(&mut self, effect: EffectInstance) {
        self.effects.push(effect);
    }

    /// Number of effects in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    /// Check if the snapshot holds no effects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Iterate over the snapshot's effects.
    pub fn iter(&self) -> impl Iterator<Item = &EffectInstance> {
        self.effects.iter()
    }
}

impl FromIterator<EffectInstance> for EntitySnapshot {
    fn from_iter<I: IntoIterator<Item = EffectInstance>>(iter: I) -> Self {
        Self {
            effects: iter.into_iter().collect(),
        }
    }
}

impl EffectCarrier for EntitySnapshot {
    fn active_effects(&self) -> Vec<EffectInstance> {
        self.effects.to_vec()
    }

    fn effect_by_native_id(&self, native_id: &NativeEffectId) -> Option<EffectInstance> {
        self.effects
            .iter()
            .find(|e| e.native_id == *native_id)
            .cloned()
    }

    fn has_native_effect(&self, native_id: &NativeEffectId) -> bool {
        self.effects.iter().any(|e| e.native_id == *native_id)
    }
}
