//! Active effect instances and the potency accessor.

use serde::{Deserialize, Serialize};

use super::id::NativeEffectId;

/// One currently-active effect on an entity.
///
/// A transient value: owned by the caller once retrieved, never mutated by
/// this crate, and not kept in sync with the entity afterwards. The
/// amplifier is the effect's potency level - zero-based, higher is
/// stronger. `duration_ticks` is carried through from the platform
/// unchanged; the lookup never interprets it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectInstance {
    /// The platform's effect type for this instance.
    pub native_id: NativeEffectId,
    /// Potency level, zero-based.
    pub amplifier: u32,
    /// Remaining duration in ticks, as reported by the platform.
    pub duration_ticks: u32,
}

impl EffectInstance {
    /// Create an instance with the given amplifier and no duration.
    #[must_use]
    pub fn new(native_id: NativeEffectId, amplifier: u32) -> Self {
        Self {
            native_id,
            amplifier,
            duration_ticks: 0,
        }
    }

    /// Set the remaining duration in ticks.
    #[must_use]
    pub fn with_duration(mut self, ticks: u32) -> Self {
        self.duration_ticks = ticks;
        self
    }
}

impl std::fmt::Display for EffectInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} x{}", self.native_id, self.amplifier + 1)
    }
}

/// Extract the amplifier from an optional effect instance.
///
/// Pure and total: absence maps to absence, a present instance maps to its
/// amplifier unchanged. Lets callers compose lookup and extraction without
/// scattering absence checks:
///
/// ```
/// use effect_compat::{amplifier_of, EffectInstance, NativeEffectId};
///
/// let speed = EffectInstance::new(NativeEffectId::new("SPEED"), 3);
/// assert_eq!(amplifier_of(Some(&speed)), Some(3));
/// assert_eq!(amplifier_of(None), None);
/// ```
#[must_use]
pub fn amplifier_of(effect: Option<&EffectInstance>) -> Option<u32> {
    effect.map(|e| e.amplifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let effect = EffectInstance::new(NativeEffectId::new("POISON"), 1);
        assert_eq!(effect.amplifier, 1);
        assert_eq!(effect.duration_ticks, 0);
    }

    #[test]
    fn test_with_duration() {
        let effect = EffectInstance::new(NativeEffectId::new("POISON"), 1).with_duration(200);
        assert_eq!(effect.duration_ticks, 200);
    }

    #[test]
    fn test_amplifier_of_present() {
        let effect = EffectInstance::new(NativeEffectId::new("SPEED"), 3);
        assert_eq!(amplifier_of(Some(&effect)), Some(3));
    }

    #[test]
    fn test_amplifier_of_absent() {
        assert_eq!(amplifier_of(None), None);
    }

    #[test]
    fn test_display_uses_level() {
        // Amplifier 0 is level I, amplifier 1 is level II.
        let effect = EffectInstance::new(NativeEffectId::new("SPEED"), 1);
        assert_eq!(format!("{}", effect), "SPEED x2");
    }

    #[test]
    fn test_serialization() {
        let effect = EffectInstance::new(NativeEffectId::new("WITHER"), 2).with_duration(100);
        let json = serde_json::to_string(&effect).unwrap();
        let deserialized: EffectInstance = serde_json::from_str(&json).unwrap();
        assert_eq!(effect, deserialized);
    }
}
