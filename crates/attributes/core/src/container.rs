//! Per-entity attribute container.
//!
//! An entity is assigned a set of attribute kinds when it is created. Instances
//! for those kinds are created lazily on first mutable access; until then the
//! attribute resolves to its kind's (clamped) base. Querying a kind that was
//! never assigned yields [`AttributeError::MissingAttributeInstance`].

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::{AttributeError, AttributeResult};
use crate::id::AttributeId;
use crate::instance::AttributeInstance;
use crate::kind::AttributeKind;
use crate::modifier::{Modifier, ModifierId};

/// Attribute state owned by a single entity.
#[derive(Clone, Debug, Default)]
pub struct EntityAttributes {
    assigned: BTreeMap<AttributeId, Arc<AttributeKind>>,
    instances: BTreeMap<AttributeId, AttributeInstance>,
}

impl EntityAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Container with every kind in `kinds` assigned.
    pub fn with_kinds<'a>(kinds: impl IntoIterator<Item = &'a Arc<AttributeKind>>) -> Self {
        let mut attributes = Self::new();
        for kind in kinds {
            attributes.assign(Arc::clone(kind));
        }
        attributes
    }

    /// Assigns a kind to this entity. Re-assigning keeps existing state.
    pub fn assign(&mut self, kind: Arc<AttributeKind>) {
        self.assigned.entry(kind.id().clone()).or_insert(kind);
    }

    pub fn is_assigned(&self, id: &AttributeId) -> bool {
        self.assigned.contains_key(id)
    }

    /// Assigned kinds in identifier order.
    pub fn assigned(&self) -> impl Iterator<Item = &Arc<AttributeKind>> {
        self.assigned.values()
    }

    /// The instance for `id`, if one has been created.
    pub fn instance(&self, id: &AttributeId) -> AttributeResult<Option<&AttributeInstance>> {
        if !self.is_assigned(id) {
            return Err(missing(id));
        }
        Ok(self.instances.get(id))
    }

    /// The instance for `id`, creating it on first access.
    pub fn instance_mut(&mut self, id: &AttributeId) -> AttributeResult<&mut AttributeInstance> {
        let kind = self.assigned.get(id).ok_or_else(|| missing(id))?;
        Ok(self
            .instances
            .entry(id.clone())
            .or_insert_with(|| AttributeInstance::new(Arc::clone(kind))))
    }

    /// Effective value of `id` on this entity.
    pub fn resolve(&self, id: &AttributeId) -> AttributeResult<f64> {
        match self.instances.get(id) {
            Some(instance) => Ok(instance.value()),
            None => {
                let kind = self.assigned.get(id).ok_or_else(|| missing(id))?;
                Ok(kind.clamp(kind.base()))
            }
        }
    }

    /// Effective value, or `kind.base` unclamped when the entity lacks the attribute.
    pub fn resolve_or_base(&self, kind: &AttributeKind) -> f64 {
        match self.resolve(kind.id()) {
            Ok(value) => value,
            Err(err) => {
                tracing::debug!("{err}, using base {}", kind.base());
                kind.base()
            }
        }
    }

    pub fn set_base_override(&mut self, id: &AttributeId, base: f64) -> AttributeResult<()> {
        self.instance_mut(id)?.set_base_override(base);
        Ok(())
    }

    /// Inserts or replaces a modifier on `id`.
    pub fn add_modifier(
        &mut self,
        id: &AttributeId,
        modifier: Modifier,
    ) -> AttributeResult<Option<Modifier>> {
        Ok(self.instance_mut(id)?.add_modifier(modifier))
    }

    /// Removes a modifier from `id`. Missing modifiers are a no-op.
    pub fn remove_modifier(
        &mut self,
        id: &AttributeId,
        modifier: &ModifierId,
    ) -> AttributeResult<Option<Modifier>> {
        if !self.is_assigned(id) {
            return Err(missing(id));
        }
        Ok(self
            .instances
            .get_mut(id)
            .and_then(|instance| instance.remove_modifier(modifier)))
    }

    /// Drops every modifier on every instance, keeping base overrides.
    pub fn clear_modifiers(&mut self) {
        for instance in self.instances.values_mut() {
            instance.clear_modifiers();
        }
    }
}

fn missing(id: &AttributeId) -> AttributeError {
    AttributeError::MissingAttributeInstance { id: id.clone() }
}
