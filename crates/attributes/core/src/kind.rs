//! Attribute kinds: immutable definitions with a base value and clamp range.

use crate::error::{AttributeError, AttributeResult};
use crate::id::AttributeId;

/// An immutable attribute definition.
///
/// Invariant: `min <= base <= max`, all finite. Enforced by [`AttributeKind::new`],
/// which deserialization also goes through.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawAttributeKind"))]
pub struct AttributeKind {
    id: AttributeId,
    base: f64,
    min: f64,
    max: f64,
    /// Whether the host syncs this attribute to clients.
    tracked: bool,
}

impl AttributeKind {
    /// Creates a tracked kind, validating its bounds.
    pub fn new(id: AttributeId, base: f64, min: f64, max: f64) -> AttributeResult<Self> {
        let finite = base.is_finite() && min.is_finite() && max.is_finite();
        if !finite || min > base || base > max {
            return Err(AttributeError::InvalidBounds { id, base, min, max });
        }
        Ok(Self {
            id,
            base,
            min,
            max,
            tracked: true,
        })
    }

    #[must_use]
    pub fn with_tracked(mut self, tracked: bool) -> Self {
        self.tracked = tracked;
        self
    }

    pub fn id(&self) -> &AttributeId {
        &self.id
    }

    pub fn base(&self) -> f64 {
        self.base
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn is_tracked(&self) -> bool {
        self.tracked
    }

    /// Clamps `value` into `[min, max]`. NaN collapses to the clamped base.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.base;
        }
        value.clamp(self.min, self.max)
    }
}

/// Unvalidated wire form of [`AttributeKind`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawAttributeKind {
    id: AttributeId,
    base: f64,
    min: f64,
    max: f64,
    #[serde(default = "tracked_by_default")]
    tracked: bool,
}

#[cfg(feature = "serde")]
fn tracked_by_default() -> bool {
    true
}

#[cfg(feature = "serde")]
impl TryFrom<RawAttributeKind> for AttributeKind {
    type Error = AttributeError;

    fn try_from(raw: RawAttributeKind) -> AttributeResult<Self> {
        Ok(Self::new(raw.id, raw.base, raw.min, raw.max)?.with_tracked(raw.tracked))
    }
}

/// The eleven attributes registered at start-up.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum BuiltinAttribute {
    /// Bonus on top of the 1.5× critical hit multiplier. Adding a flat 0.5
    /// makes critical hits deal 2× damage; a +0.5 `multiply_base` modifier
    /// adds half of the base 0.5 for a 1.75× multiplier.
    CriticalBonusDamage,
    /// Movement speed while submerged. The host recomputes the base every
    /// tick, capped at 1 for maneuverability.
    WaterSpeed,
    /// Fog distance while submerged.
    WaterVisibility,
    /// Extra breath capacity in ticks.
    MaxAir,
    /// Movement speed in lava. The host recomputes the base every tick.
    LavaSpeed,
    /// Fog distance in lava.
    LavaVisibility,
    /// Flat bonus to block breaking speed.
    DigSpeed,
    /// Each full point rerolls bonus-loot formulas once more, keeping the best.
    BonusLootCountRolls,
    /// Same shape as [`BuiltinAttribute::BonusLootCountRolls`], for rare drop tables.
    BonusRareLootRolls,
    /// Multiplier on dropped experience. 0 disables experience drops.
    DroppedExperience,
    /// Each point reduces incoming magic damage by one.
    MagicProtection,
}

impl BuiltinAttribute {
    /// `(base, min, max)` as registered by default.
    pub const fn defaults(self) -> (f64, f64, f64) {
        match self {
            Self::CriticalBonusDamage => (0.5, -1.0, 1024.0),
            Self::WaterSpeed => (0.5, 0.0, 1.0),
            Self::WaterVisibility => (96.0, 0.0, 1024.0),
            Self::MaxAir => (0.0, -40000.0, 40000.0),
            Self::LavaSpeed => (0.5, 0.0, 1.0),
            Self::LavaVisibility => (1.0, 0.0, 1024.0),
            Self::DigSpeed => (0.0, 0.0, 2048.0),
            Self::BonusLootCountRolls => (0.0, 0.0, 128.0),
            Self::BonusRareLootRolls => (0.0, 0.0, 128.0),
            Self::DroppedExperience => (1.0, 0.0, 1024.0),
            Self::MagicProtection => (0.0, 0.0, 1024.0),
        }
    }

    /// Identifier in the given namespace.
    pub fn id_in(self, namespace: &str) -> AttributeResult<AttributeId> {
        AttributeId::new(namespace, self.as_ref())
    }

    /// Identifier in [`DEFAULT_NAMESPACE`](crate::id::DEFAULT_NAMESPACE).
    ///
    /// Only matches catalogs built with the default namespace. For a catalog
    /// configured with another namespace use
    /// [`AttributeCatalog::builtin_id`](crate::AttributeCatalog::builtin_id).
    pub fn id(self) -> AttributeId {
        AttributeId::builtin(self.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn builtin_defaults_satisfy_bounds() {
        for attribute in BuiltinAttribute::iter() {
            let (base, min, max) = attribute.defaults();
            assert!(
                AttributeKind::new(attribute.id(), base, min, max).is_ok(),
                "{attribute} violates min <= base <= max"
            );
        }
    }

    #[test]
    fn builtin_names_are_snake_case() {
        assert_eq!(BuiltinAttribute::BonusLootCountRolls.as_ref(), "bonus_loot_count_rolls");
        assert_eq!(
            "critical_bonus_damage".parse::<BuiltinAttribute>().unwrap(),
            BuiltinAttribute::CriticalBonusDamage
        );
    }

    #[test]
    fn rejects_base_outside_range() {
        let err = AttributeKind::new(AttributeId::builtin("broken"), 2.0, 0.0, 1.0).unwrap_err();
        assert!(matches!(err, AttributeError::InvalidBounds { .. }));
    }

    #[test]
    fn rejects_non_finite_bounds() {
        let id = AttributeId::builtin("broken");
        assert!(AttributeKind::new(id.clone(), 0.0, f64::NEG_INFINITY, 1.0).is_err());
        assert!(AttributeKind::new(id, f64::NAN, 0.0, 1.0).is_err());
    }

    #[test]
    fn clamp_handles_nan_and_infinity() {
        let kind = AttributeKind::new(AttributeId::builtin("water_speed"), 0.5, 0.0, 1.0).unwrap();
        assert_eq!(kind.clamp(f64::NAN), 0.5);
        assert_eq!(kind.clamp(f64::INFINITY), 1.0);
        assert_eq!(kind.clamp(-3.0), 0.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialization_validates_bounds() {
        let inverted = r#"{"id":"additionalentityattributes:broken","base":0.5,"min":1.0,"max":0.0,"tracked":true}"#;
        assert!(serde_json::from_str::<AttributeKind>(inverted).is_err());

        let kind: AttributeKind =
            serde_json::from_str(r#"{"id":"water_speed","base":0.5,"min":0.0,"max":1.0}"#)
                .unwrap();
        assert!(kind.is_tracked());
        assert_eq!(kind.clamp(4.0), 1.0);
    }
}
