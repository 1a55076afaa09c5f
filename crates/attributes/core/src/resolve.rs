//! Effective value resolution.
//!
//! Every attribute resolves with the same stack:
//!
//! ```text
//! total = base
//! total += Σ add
//! total += base × Σ multiply_base
//! total *= Π (1 + multiply_total)
//! clamp(total, min, max)
//! ```
//!
//! `base` is the instance's override when present. `Add` and `MultiplyBase`
//! always land before any `MultiplyTotal`.

use crate::instance::AttributeInstance;
use crate::modifier::ModifierOperation;

/// Stateless resolver for [`AttributeInstance`] values.
#[derive(Clone, Copy, Debug, Default)]
pub struct EffectiveValueResolver;

impl EffectiveValueResolver {
    /// Resolves the clamped effective value. Always within the kind's range.
    ///
    /// # Example
    /// ```
    /// # use std::sync::Arc;
    /// # use attribute_core::{AttributeCatalog, AttributeInstance, BuiltinAttribute, EffectiveValueResolver, Modifier};
    /// let catalog = AttributeCatalog::with_builtins();
    /// let kind = catalog.builtin(BuiltinAttribute::CriticalBonusDamage).unwrap();
    /// let mut instance = AttributeInstance::new(kind);
    ///
    /// instance.add_modifier(Modifier::add("ring", 0.5).unwrap());
    /// assert_eq!(EffectiveValueResolver::resolve(&instance), 1.0);
    ///
    /// instance.add_modifier(Modifier::multiply_total("rage", 0.5).unwrap());
    /// assert_eq!(EffectiveValueResolver::resolve(&instance), 1.5);
    /// ```
    pub fn resolve(instance: &AttributeInstance) -> f64 {
        instance.kind().clamp(Self::resolve_unclamped(instance))
    }

    /// Applies every modifier without clamping.
    pub fn resolve_unclamped(instance: &AttributeInstance) -> f64 {
        let base = instance.base_value();

        // Step 1: base + flat additions
        let added: f64 = instance
            .modifiers_by(ModifierOperation::Add)
            .map(|m| m.amount)
            .sum();

        // Step 2: percentages of base, summed
        let base_percent: f64 = instance
            .modifiers_by(ModifierOperation::MultiplyBase)
            .map(|m| m.amount)
            .sum();

        let total = base + added + base * base_percent;

        // Step 3: multiply the running total
        instance
            .modifiers_by(ModifierOperation::MultiplyTotal)
            .fold(total, |acc, m| acc * (1.0 + m.amount))
    }
}
