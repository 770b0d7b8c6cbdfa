//! Effect identifiers.
//!
//! `EffectKind` is the abstract vocabulary plugins use internally; it never
//! changes with the platform revision. `NativeEffectId` is whatever name the
//! running platform uses for an effect type - this crate compares them for
//! equality and passes them through, nothing more. The two are bridged by
//! the capability registry, because the mapping (and whether one exists at
//! all) depends on the running revision.

use serde::{Deserialize, Serialize};

/// Abstract status effect identifier, independent of platform revision.
///
/// The set is closed; `ALL` lists every kind for iteration. Availability on
/// a given revision is a property of the capability registry, not of the
/// kind itself - newer kinds simply have no native mapping on revisions
/// that predate them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectKind {
    Speed,
    Slowness,
    Haste,
    MiningFatigue,
    Strength,
    InstantHealth,
    InstantDamage,
    JumpBoost,
    Nausea,
    Regeneration,
    Resistance,
    FireResistance,
    WaterBreathing,
    Invisibility,
    Blindness,
    NightVision,
    Hunger,
    Weakness,
    Poison,
    Wither,
    HealthBoost,
    Absorption,
    Saturation,
    Glowing,
    Levitation,
    Luck,
    Unluck,
    SlowFalling,
    ConduitPower,
    DolphinsGrace,
    BadOmen,
    HeroOfTheVillage,
}

impl EffectKind {
    /// Every effect kind, in declaration order.
    pub const ALL: [EffectKind; 32] = [
        EffectKind::Speed,
        EffectKind::Slowness,
        EffectKind::Haste,
        EffectKind::MiningFatigue,
        EffectKind::Strength,
        EffectKind::InstantHealth,
        EffectKind::InstantDamage,
        EffectKind::JumpBoost,
        EffectKind::Nausea,
        EffectKind::Regeneration,
        EffectKind::Resistance,
        EffectKind::FireResistance,
        EffectKind::WaterBreathing,
        EffectKind::Invisibility,
        EffectKind::Blindness,
        EffectKind::NightVision,
        EffectKind::Hunger,
        EffectKind::Weakness,
        EffectKind::Poison,
        EffectKind::Wither,
        EffectKind::HealthBoost,
        EffectKind::Absorption,
        EffectKind::Saturation,
        EffectKind::Glowing,
        EffectKind::Levitation,
        EffectKind::Luck,
        EffectKind::Unluck,
        EffectKind::SlowFalling,
        EffectKind::ConduitPower,
        EffectKind::DolphinsGrace,
        EffectKind::BadOmen,
        EffectKind::HeroOfTheVillage,
    ];
}

impl std::fmt::Display for EffectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// The platform's own name for an effect type.
///
/// Opaque to this crate beyond equality: the contents are never parsed or
/// interpreted, only compared against what the entity reports and handed
/// back to the platform on direct retrievals.
///
/// ```
/// use effect_compat::NativeEffectId;
///
/// let id = NativeEffectId::new("FAST_DIGGING");
/// assert_eq!(id.as_str(), "FAST_DIGGING");
/// assert_eq!(id, NativeEffectId::new("FAST_DIGGING"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NativeEffectId(String);

impl NativeEffectId {
    /// Create a native id from the platform's name for the effect type.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the raw platform name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NativeEffectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
