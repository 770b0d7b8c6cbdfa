//! Capability registry for effect availability and native mappings.
//!
//! The registry answers two questions per `EffectKind`: does it exist at
//! all on the running revision, and if so, under which native name. It is
//! built once at startup - from `builtin` for stock platforms, or by hand
//! for hosts with remapped effect tables - and read-only afterwards.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::revision::ServerRevision;

use super::id::{EffectKind, NativeEffectId};

/// Static capability record for one effect kind.
///
/// The native mapping is present iff the kind is available: an unavailable
/// kind has no meaningful platform representation to map to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectCapability {
    kind: EffectKind,
    mapping: Option<NativeEffectId>,
}

impl EffectCapability {
    /// Record an available kind with its native mapping.
    #[must_use]
    pub fn available(kind: EffectKind, mapping: NativeEffectId) -> Self {
        Self {
            kind,
            mapping: Some(mapping),
        }
    }

    /// Record a kind that does not exist on the running revision.
    #[must_use]
    pub fn unavailable(kind: EffectKind) -> Self {
        Self { kind, mapping: None }
    }

    /// The kind this record describes.
    #[must_use]
    pub fn kind(&self) -> EffectKind {
        self.kind
    }

    /// Whether the kind exists on the running revision.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.mapping.is_some()
    }

    /// The native mapping, if available.
    #[must_use]
    pub fn native_mapping(&self) -> Option<&NativeEffectId> {
        self.mapping.as_ref()
    }
}

/// Default effect table: native name plus the first supported revision that
/// carries the kind. Kinds introduced in the 1.9-1.11 platform releases
/// first become visible at `V1_12`, since those releases themselves are
/// outside the supported set.
const BUILTIN: &[(EffectKind, &str, ServerRevision)] = &[
    (EffectKind::Speed, "SPEED", ServerRevision::V1_8),
    (EffectKind::Slowness, "SLOW", ServerRevision::V1_8),
    (EffectKind::Haste, "FAST_DIGGING", ServerRevision::V1_8),
    (EffectKind::MiningFatigue, "SLOW_DIGGING", ServerRevision::V1_8),
    (EffectKind::Strength, "INCREASE_DAMAGE", ServerRevision::V1_8),
    (EffectKind::InstantHealth, "HEAL", ServerRevision::V1_8),
    (EffectKind::InstantDamage, "HARM", ServerRevision::V1_8),
    (EffectKind::JumpBoost, "JUMP", ServerRevision::V1_8),
    (EffectKind::Nausea, "CONFUSION", ServerRevision::V1_8),
    (EffectKind::Regeneration, "REGENERATION", ServerRevision::V1_8),
    (EffectKind::Resistance, "DAMAGE_RESISTANCE", ServerRevision::V1_8),
    (EffectKind::FireResistance, "FIRE_RESISTANCE", ServerRevision::V1_8),
    (EffectKind::WaterBreathing, "WATER_BREATHING", ServerRevision::V1_8),
    (EffectKind::Invisibility, "INVISIBILITY", ServerRevision::V1_8),
    (EffectKind::Blindness, "BLINDNESS", ServerRevision::V1_8),
    (EffectKind::NightVision, "NIGHT_VISION", ServerRevision::V1_8),
    (EffectKind::Hunger, "HUNGER", ServerRevision::V1_8),
    (EffectKind::Weakness, "WEAKNESS", ServerRevision::V1_8),
    (EffectKind::Poison, "POISON", ServerRevision::V1_8),
    (EffectKind::Wither, "WITHER", ServerRevision::V1_8),
    (EffectKind::HealthBoost, "HEALTH_BOOST", ServerRevision::V1_8),
    (EffectKind::Absorption, "ABSORPTION", ServerRevision::V1_8),
    (EffectKind::Saturation, "SATURATION", ServerRevision::V1_8),
    (EffectKind::Glowing, "GLOWING", ServerRevision::V1_12),
    (EffectKind::Levitation, "LEVITATION", ServerRevision::V1_12),
    (EffectKind::Luck, "LUCK", ServerRevision::V1_12),
    (EffectKind::Unluck, "UNLUCK", ServerRevision::V1_12),
    (EffectKind::SlowFalling, "SLOW_FALLING", ServerRevision::V1_13),
    (EffectKind::ConduitPower, "CONDUIT_POWER", ServerRevision::V1_13),
    (EffectKind::DolphinsGrace, "DOLPHINS_GRACE", ServerRevision::V1_13),
    (EffectKind::BadOmen, "BAD_OMEN", ServerRevision::V1_14),
    (EffectKind::HeroOfTheVillage, "HERO_OF_THE_VILLAGE", ServerRevision::V1_14),
];

/// Registry of effect capabilities for the running revision.
///
/// Kinds that were never registered count as unavailable, so a partial
/// registry is safe - it just answers "absent" for everything it doesn't
/// know about.
///
/// ```
/// use effect_compat::{CapabilityRegistry, EffectKind, ServerRevision};
///
/// let registry = CapabilityRegistry::builtin(ServerRevision::V1_12);
/// assert!(registry.is_available(EffectKind::Glowing));
/// assert!(!registry.is_available(EffectKind::SlowFalling)); // 1.13+
/// ```
#[derive(Clone, Debug, Default)]
pub struct CapabilityRegistry {
    entries: FxHashMap<EffectKind, EffectCapability>,
}

impl CapabilityRegistry {
    /// Create an empty registry. Every kind is unavailable.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the default table for a revision.
    ///
    /// Registers every `EffectKind`, available iff the revision is
    /// supported and carries the kind. `Unknown` yields an
    /// all-unavailable table.
    #[must_use]
    pub fn builtin(revision: ServerRevision) -> Self {
        let mut registry = Self::new();
        for &(kind, native, since) in BUILTIN {
            let capability = if revision.is_supported() && revision >= since {
                EffectCapability::available(kind, NativeEffectId::new(native))
            } else {
                EffectCapability::unavailable(kind)
            };
            registry.register(capability);
        }
        debug!(
            %revision,
            available = registry.iter().filter(|c| c.is_available()).count(),
            "built default capability table"
        );
        registry
    }

    /// Register a capability record.
    ///
    /// Panics if the kind is already registered.
    pub fn register(&mut self, capability: EffectCapability) {
        let kind = capability.kind();
        if self.entries.contains_key(&kind) {
            panic!("Effect kind {} already registered", kind);
        }
        self.entries.insert(kind, capability);
    }

    /// Get the capability record for a kind.
    #[must_use]
    pub fn get(&self, kind: EffectKind) -> Option<&EffectCapability> {
        self.entries.get(&kind)
    }

    /// Whether a kind is available on the running revision.
    ///
    /// Unregistered kinds are unavailable.
    #[must_use]
    pub fn is_available(&self, kind: EffectKind) -> bool {
        self.get(kind).is_some_and(EffectCapability::is_available)
    }

    /// The native mapping for a kind, if it is available.
    #[must_use]
    pub fn native_mapping(&self, kind: EffectKind) -> Option<&NativeEffectId> {
        self.get(kind).and_then(EffectCapability::native_mapping)
    }

    /// Check if a kind has a record, available or not.
    #[must_use]
    pub fn contains(&self, kind: EffectKind) -> bool {
        self.entries.contains_key(&kind)
    }

    /// Number of registered records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all capability records.
    pub fn iter(&self) -> impl Iterator<Item = &EffectCapability> {
        self.entries.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_get() {
        let mut registry = CapabilityRegistry::new();
        registry.register(EffectCapability::available(
            EffectKind::Speed,
            NativeEffectId::new("SPEED"),
        ));

        assert!(registry.is_available(EffectKind::Speed));
        assert_eq!(
            registry.native_mapping(EffectKind::Speed),
            Some(&NativeEffectId::new("SPEED"))
        );
    }

    #[test]
    fn test_unregistered_kind_is_unavailable() {
        let registry = CapabilityRegistry::new();
        assert!(!registry.is_available(EffectKind::Speed));
        assert!(registry.native_mapping(EffectKind::Speed).is_none());
        assert!(!registry.contains(EffectKind::Speed));
    }

    #[test]
    fn test_unavailable_has_no_mapping() {
        let mut registry = CapabilityRegistry::new();
        registry.register(EffectCapability::unavailable(EffectKind::Glowing));

        assert!(registry.contains(EffectKind::Glowing));
        assert!(!registry.is_available(EffectKind::Glowing));
        assert!(registry.native_mapping(EffectKind::Glowing).is_none());
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_kind_panics() {
        let mut registry = CapabilityRegistry::new();
        registry.register(EffectCapability::unavailable(EffectKind::Luck));
        registry.register(EffectCapability::unavailable(EffectKind::Luck)); // Should panic
    }

    #[test]
    fn test_builtin_covers_every_kind() {
        for revision in ServerRevision::SUPPORTED {
            let registry = CapabilityRegistry::builtin(revision);
            for kind in EffectKind::ALL {
                assert!(registry.contains(kind), "{} missing on {}", kind, revision);
            }
        }
    }

    #[test]
    fn test_builtin_legacy_lacks_modern_effects() {
        let registry = CapabilityRegistry::builtin(ServerRevision::V1_8);

        assert!(registry.is_available(EffectKind::Speed));
        assert!(registry.is_available(EffectKind::Saturation));
        assert!(!registry.is_available(EffectKind::Glowing));
        assert!(!registry.is_available(EffectKind::SlowFalling));
        assert!(!registry.is_available(EffectKind::BadOmen));
    }

    #[test]
    fn test_builtin_availability_matrix() {
        let cases = [
            (ServerRevision::V1_12, EffectKind::Glowing, true),
            (ServerRevision::V1_12, EffectKind::SlowFalling, false),
            (ServerRevision::V1_13, EffectKind::SlowFalling, true),
            (ServerRevision::V1_13, EffectKind::BadOmen, false),
            (ServerRevision::V1_14, EffectKind::BadOmen, true),
            (ServerRevision::V1_16, EffectKind::HeroOfTheVillage, true),
        ];
        for (revision, kind, expected) in cases {
            let registry = CapabilityRegistry::builtin(revision);
            assert_eq!(
                registry.is_available(kind),
                expected,
                "{} on {}",
                kind,
                revision
            );
        }
    }

    #[test]
    fn test_builtin_unknown_is_all_unavailable() {
        let registry = CapabilityRegistry::builtin(ServerRevision::Unknown);
        assert_eq!(registry.len(), EffectKind::ALL.len());
        for kind in EffectKind::ALL {
            assert!(!registry.is_available(kind));
        }
    }

    #[test]
    fn test_builtin_remapped_names() {
        // Native names predate the modern display names.
        let registry = CapabilityRegistry::builtin(ServerRevision::V1_16);
        assert_eq!(
            registry.native_mapping(EffectKind::Nausea),
            Some(&NativeEffectId::new("CONFUSION"))
        );
        assert_eq!(
            registry.native_mapping(EffectKind::Haste),
            Some(&NativeEffectId::new("FAST_DIGGING"))
        );
        assert_eq!(
            registry.native_mapping(EffectKind::Slowness),
            Some(&NativeEffectId::new("SLOW"))
        );
    }

    #[test]
    fn test_capability_serialization() {
        let capability =
            EffectCapability::available(EffectKind::Poison, NativeEffectId::new("POISON"));
        let json = serde_json::to_string(&capability).unwrap();
        let deserialized: EffectCapability = serde_json::from_str(&json).unwrap();
        assert_eq!(capability, deserialized);
    }
}
