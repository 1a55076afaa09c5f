//! Per-entity attribute state.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::kind::AttributeKind;
use crate::modifier::{Modifier, ModifierId, ModifierOperation};
use crate::resolve::EffectiveValueResolver;

/// Runtime state of one attribute on one entity.
///
/// Owned exclusively by the entity's [`EntityAttributes`](crate::EntityAttributes)
/// container. Modifiers are keyed by id, so adding an existing id replaces it.
#[derive(Clone, Debug, PartialEq)]
pub struct AttributeInstance {
    kind: Arc<AttributeKind>,
    base_override: Option<f64>,
    modifiers: BTreeMap<ModifierId, Modifier>,
}

impl AttributeInstance {
    pub fn new(kind: Arc<AttributeKind>) -> Self {
        Self {
            kind,
            base_override: None,
            modifiers: BTreeMap::new(),
        }
    }

    pub fn kind(&self) -> &AttributeKind {
        &self.kind
    }

    pub fn base_override(&self) -> Option<f64> {
        self.base_override
    }

    /// The base every modifier builds on: the override if set, else the kind's base.
    pub fn base_value(&self) -> f64 {
        self.base_override.unwrap_or(self.kind.base())
    }

    /// Replaces the kind's base. Hosts call this every tick for speed attributes.
    pub fn set_base_override(&mut self, base: f64) {
        self.base_override = Some(base);
    }

    pub fn clear_base_override(&mut self) {
        self.base_override = None;
    }

    /// Inserts or replaces a modifier, returning the one it replaced.
    pub fn add_modifier(&mut self, modifier: Modifier) -> Option<Modifier> {
        tracing::debug!(
            "{}: {} modifier {} = {}",
            self.kind.id(),
            modifier.operation,
            modifier.id,
            modifier.amount
        );
        self.modifiers.insert(modifier.id.clone(), modifier)
    }

    /// Removes a modifier. Missing ids are a no-op.
    pub fn remove_modifier(&mut self, id: &ModifierId) -> Option<Modifier> {
        self.modifiers.remove(id)
    }

    pub fn modifier(&self, id: &ModifierId) -> Option<&Modifier> {
        self.modifiers.get(id)
    }

    pub fn has_modifier(&self, id: &ModifierId) -> bool {
        self.modifiers.contains_key(id)
    }

    pub fn modifiers(&self) -> impl Iterator<Item = &Modifier> {
        self.modifiers.values()
    }

    pub fn modifiers_by(&self, operation: ModifierOperation) -> impl Iterator<Item = &Modifier> {
        self.modifiers
            .values()
            .filter(move |m| m.operation == operation)
    }

    pub fn clear_modifiers(&mut self) {
        self.modifiers.clear();
    }

    /// The effective, clamped value.
    pub fn value(&self) -> f64 {
        EffectiveValueResolver::resolve(self)
    }
}
