//! Attribute modifiers.
//!
//! A modifier is a signed amount combined with the base value by one of three
//! operations. Resolution order is fixed regardless of insertion order:
//! `Add → MultiplyBase → MultiplyTotal → Clamp`.

use core::fmt;

use crate::error::{AttributeError, AttributeResult};

/// Identifier of a modifier, unique per attribute instance.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ModifierId(String);

impl ModifierId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModifierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ModifierId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ModifierId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// How a modifier's amount combines with the attribute value.
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
pub enum ModifierOperation {
    /// Flat addition to the running total.
    Add,
    /// Adds `base × amount`. Summed with the other `MultiplyBase` modifiers.
    MultiplyBase,
    /// Multiplies the running total by `1 + amount`, after every `Add` and
    /// `MultiplyBase`. Host commands call this `multiply`.
    #[strum(to_string = "multiply_total", serialize = "multiply")]
    #[cfg_attr(feature = "serde", serde(alias = "multiply"))]
    MultiplyTotal,
}

/// A single modifier applied to one attribute instance.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Modifier {
    pub id: ModifierId,
    pub amount: f64,
    pub operation: ModifierOperation,
}

impl Modifier {
    /// Creates a modifier. Amounts must be finite.
    pub fn new(
        id: impl Into<ModifierId>,
        amount: f64,
        operation: ModifierOperation,
    ) -> AttributeResult<Self> {
        let id = id.into();
        if !amount.is_finite() {
            return Err(AttributeError::InvalidModifier {
                modifier: id.to_string(),
                amount,
            });
        }
        Ok(Self {
            id,
            amount,
            operation,
        })
    }

    pub fn add(id: impl Into<ModifierId>, amount: f64) -> AttributeResult<Self> {
        Self::new(id, amount, ModifierOperation::Add)
    }

    pub fn multiply_base(id: impl Into<ModifierId>, amount: f64) -> AttributeResult<Self> {
        Self::new(id, amount, ModifierOperation::MultiplyBase)
    }

    pub fn multiply_total(id: impl Into<ModifierId>, amount: f64) -> AttributeResult<Self> {
        Self::new(id, amount, ModifierOperation::MultiplyTotal)
    }
}
