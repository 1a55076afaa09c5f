//! Host-facing consumers of effective attribute values.
//!
//! Each helper resolves one built-in attribute on an entity and applies it the
//! way the host uses it. Entities that lack an attribute fall back to the
//! kind's base, so they behave like vanilla.

use crate::catalog::AttributeCatalog;
use crate::container::EntityAttributes;
use crate::error::AttributeResult;
use crate::kind::BuiltinAttribute;

/// Fluid an entity is submerged in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Medium {
    Water,
    Lava,
}

impl Medium {
    pub const fn speed_attribute(self) -> BuiltinAttribute {
        match self {
            Self::Water => BuiltinAttribute::WaterSpeed,
            Self::Lava => BuiltinAttribute::LavaSpeed,
        }
    }

    pub const fn visibility_attribute(self) -> BuiltinAttribute {
        match self {
            Self::Water => BuiltinAttribute::WaterVisibility,
            Self::Lava => BuiltinAttribute::LavaVisibility,
        }
    }
}

/// Read-only view of an entity's attributes as gameplay effects.
#[derive(Clone, Copy, Debug)]
pub struct AttributeEffects<'a> {
    catalog: &'a AttributeCatalog,
    attributes: &'a EntityAttributes,
}

impl<'a> AttributeEffects<'a> {
    pub fn new(catalog: &'a AttributeCatalog, attributes: &'a EntityAttributes) -> Self {
        Self {
            catalog,
            attributes,
        }
    }

    /// Effective value of a built-in attribute, or its base when unassigned.
    pub fn value(&self, attribute: BuiltinAttribute) -> AttributeResult<f64> {
        let kind = self.catalog.builtin(attribute)?;
        Ok(self.attributes.resolve_or_base(&kind))
    }

    /// Critical hit damage multiplier; 1.5 with the default bonus of 0.5.
    pub fn critical_multiplier(&self) -> AttributeResult<f64> {
        Ok(1.0 + self.value(BuiltinAttribute::CriticalBonusDamage)?)
    }

    /// Damage of a critical hit dealing `damage` before the multiplier.
    pub fn critical_damage(&self, damage: f32) -> AttributeResult<f32> {
        Ok(damage * self.critical_multiplier()? as f32)
    }

    /// Experience dropped for a vanilla amount of `experience`, rounded down.
    pub fn dropped_experience(&self, experience: u32) -> AttributeResult<u32> {
        let multiplier = self.value(BuiltinAttribute::DroppedExperience)?;
        Ok((f64::from(experience) * multiplier) as u32)
    }

    /// Magic damage after protection. Never negative.
    pub fn magic_damage(&self, damage: f32) -> AttributeResult<f32> {
        let protection = self.value(BuiltinAttribute::MagicProtection)? as f32;
        Ok((damage - protection).max(0.0))
    }

    /// Breath capacity in ticks given the vanilla capacity.
    pub fn max_air(&self, base_air: i32) -> AttributeResult<i32> {
        let bonus = self.value(BuiltinAttribute::MaxAir)? as i32;
        Ok(base_air.saturating_add(bonus))
    }

    /// Block breaking speed given the vanilla speed.
    pub fn dig_speed(&self, speed: f32) -> AttributeResult<f32> {
        Ok(speed + self.value(BuiltinAttribute::DigSpeed)? as f32)
    }

    /// Movement speed factor while submerged in `medium`.
    pub fn movement_speed(&self, medium: Medium) -> AttributeResult<f64> {
        self.value(medium.speed_attribute())
    }

    /// Fog distance while submerged in `medium`.
    pub fn visibility(&self, medium: Medium) -> AttributeResult<f64> {
        self.value(medium.visibility_attribute())
    }
}
