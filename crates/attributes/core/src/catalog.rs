//! The attribute catalog: every kind known to the process.
//!
//! The catalog is built once at start-up and shared by reference. It replaces a
//! process-wide registry; nothing here is global.

use std::collections::BTreeMap;
use std::sync::Arc;

use strum::IntoEnumIterator;

use crate::config::AttributeConfig;
use crate::error::{AttributeError, AttributeResult};
use crate::id::{AttributeId, DEFAULT_NAMESPACE};
use crate::kind::{AttributeKind, BuiltinAttribute};

/// Registry of attribute kinds keyed by identifier.
#[derive(Clone, Debug)]
pub struct AttributeCatalog {
    namespace: String,
    kinds: BTreeMap<AttributeId, Arc<AttributeKind>>,
}

impl AttributeCatalog {
    /// Creates an empty catalog whose bare ids resolve into `namespace`.
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            kinds: BTreeMap::new(),
        }
    }

    /// Catalog in the default namespace with all eleven built-in kinds.
    pub fn with_builtins() -> Self {
        let mut catalog = Self::new(DEFAULT_NAMESPACE);
        catalog
            .register_builtins()
            .expect("built-in attribute defaults are valid and unique");
        catalog
    }

    /// Builds a catalog as described by `config`.
    pub fn from_config(config: &AttributeConfig) -> AttributeResult<Self> {
        let mut catalog = Self::new(config.namespace.clone());
        if config.register_builtins {
            catalog.register_builtins()?;
        }
        Ok(catalog)
    }

    /// Registers the built-in kinds in this catalog's namespace.
    pub fn register_builtins(&mut self) -> AttributeResult<()> {
        for attribute in BuiltinAttribute::iter() {
            let (base, min, max) = attribute.defaults();
            let id = attribute.id_in(&self.namespace)?;
            self.define_kind(AttributeKind::new(id, base, min, max)?)?;
        }
        Ok(())
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Defines a new kind. Bare ids land in the catalog namespace.
    pub fn define(
        &mut self,
        id: &str,
        base: f64,
        min: f64,
        max: f64,
    ) -> AttributeResult<Arc<AttributeKind>> {
        let id = AttributeId::parse_with_default(id, &self.namespace)?;
        self.define_kind(AttributeKind::new(id, base, min, max)?)
    }

    /// Adds an already validated kind. Ids may only be defined once.
    pub fn define_kind(&mut self, kind: AttributeKind) -> AttributeResult<Arc<AttributeKind>> {
        if self.kinds.contains_key(kind.id()) {
            return Err(AttributeError::DuplicateAttribute {
                id: kind.id().clone(),
            });
        }
        tracing::debug!(
            "defined attribute {} (base {}, range [{}, {}])",
            kind.id(),
            kind.base(),
            kind.min(),
            kind.max()
        );
        let kind = Arc::new(kind);
        self.kinds.insert(kind.id().clone(), Arc::clone(&kind));
        Ok(kind)
    }

    pub fn lookup(&self, id: &AttributeId) -> AttributeResult<Arc<AttributeKind>> {
        self.kinds
            .get(id)
            .cloned()
            .ok_or_else(|| AttributeError::UnknownAttribute { id: id.clone() })
    }

    /// Looks up `namespace:path` or a bare path in the catalog namespace.
    pub fn lookup_str(&self, raw: &str) -> AttributeResult<Arc<AttributeKind>> {
        self.lookup(&AttributeId::parse_with_default(raw, &self.namespace)?)
    }

    /// Looks up a built-in kind registered in this catalog's namespace.
    pub fn builtin(&self, attribute: BuiltinAttribute) -> AttributeResult<Arc<AttributeKind>> {
        self.lookup(&attribute.id_in(&self.namespace)?)
    }

    /// Identifier of a built-in kind in this catalog's namespace.
    pub fn builtin_id(&self, attribute: BuiltinAttribute) -> AttributeResult<AttributeId> {
        attribute.id_in(&self.namespace)
    }

    pub fn contains(&self, id: &AttributeId) -> bool {
        self.kinds.contains_key(id)
    }

    /// Kinds in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<AttributeKind>> {
        self.kinds.values()
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

impl Default for AttributeCatalog {
    fn default() -> Self {
        Self::with_builtins()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_are_registered() {
        let catalog = AttributeCatalog::with_builtins();
        assert_eq!(catalog.len(), 11);

        let kind = catalog.lookup_str("critical_bonus_damage").unwrap();
        assert_eq!(kind.base(), 0.5);
        assert_eq!(kind.min(), -1.0);
        assert_eq!(kind.max(), 1024.0);

        let kind = catalog
            .lookup_str("additionalentityattributes:bonus_loot_count_rolls")
            .unwrap();
        assert_eq!((kind.base(), kind.min(), kind.max()), (0.0, 0.0, 128.0));
    }

    #[test]
    fn lookup_of_undefined_kind_fails() {
        let catalog = AttributeCatalog::with_builtins();
        let err = catalog.lookup_str("swim_grace").unwrap_err();
        assert!(matches!(err, AttributeError::UnknownAttribute { .. }));
    }

    #[test]
    fn define_then_lookup() {
        let mut catalog = AttributeCatalog::new("testmod");
        let defined = catalog.define("jump_height", 1.0, 0.0, 8.0).unwrap();
        let found = catalog.lookup_str("testmod:jump_height").unwrap();
        assert!(Arc::ptr_eq(&defined, &found));
    }

    #[test]
    fn duplicate_definition_is_rejected() {
        let mut catalog = AttributeCatalog::with_builtins();
        let err = catalog.define("max_air", 0.0, -1.0, 1.0).unwrap_err();
        assert!(matches!(err, AttributeError::DuplicateAttribute { .. }));
    }

    #[test]
    fn config_namespace_applies_to_builtins() {
        let config = AttributeConfig::with_namespace("spectrum");
        let catalog = AttributeCatalog::from_config(&config).unwrap();
        assert!(catalog.lookup_str("spectrum:water_speed").is_ok());
        assert!(catalog.builtin(BuiltinAttribute::DigSpeed).is_ok());

        let id = catalog.builtin_id(BuiltinAttribute::DigSpeed).unwrap();
        assert_eq!(id.to_string(), "spectrum:dig_speed");
        assert!(catalog.contains(&id));
        assert!(!catalog.contains(&BuiltinAttribute::DigSpeed.id()));
        assert!(
            catalog
                .lookup_str("additionalentityattributes:water_speed")
                .is_err()
        );
    }
}
