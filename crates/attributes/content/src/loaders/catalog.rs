//! Extra attribute kinds loader.

use std::path::Path;

use attribute_core::{AttributeCatalog, AttributeId, AttributeKind};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// One `[[attributes]]` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeSpec {
    /// Bare path or `namespace:path`.
    pub name: String,
    pub base: f64,
    pub min: f64,
    pub max: f64,
    #[serde(default = "default_tracked")]
    pub tracked: bool,
}

fn default_tracked() -> bool {
    true
}

/// Attribute file structure for TOML files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttributeFile {
    #[serde(default)]
    pub attributes: Vec<AttributeSpec>,
}

/// Loader for additional attribute kinds from TOML files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load attribute specs from a TOML file.
    pub fn load(path: &Path) -> LoadResult<Vec<AttributeSpec>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<AttributeSpec>> {
        let file: AttributeFile = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse attributes TOML: {}", e))?;
        Ok(file.attributes)
    }

    /// Defines every spec in `catalog`. Stops at the first invalid or duplicate kind.
    pub fn define_all(catalog: &mut AttributeCatalog, specs: &[AttributeSpec]) -> LoadResult<()> {
        for spec in specs {
            let id = AttributeId::parse_with_default(&spec.name, catalog.namespace())?;
            let kind =
                AttributeKind::new(id, spec.base, spec.min, spec.max)?.with_tracked(spec.tracked);
            catalog.define_kind(kind)?;
        }
        tracing::info!("loaded {} attribute definitions", specs.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ATTRIBUTES: &str = r#"
        [[attributes]]
        name = "jump_height"
        base = 1.0
        min = 0.0
        max = 8.0

        [[attributes]]
        name = "othermod:soul_speed"
        base = 0.0
        min = -1.0
        max = 1.0
        tracked = false
    "#;

    #[test]
    fn parses_and_defines() {
        let specs = CatalogLoader::parse(ATTRIBUTES).unwrap();
        assert_eq!(specs.len(), 2);
        assert!(specs[0].tracked);

        let mut catalog = AttributeCatalog::with_builtins();
        CatalogLoader::define_all(&mut catalog, &specs).unwrap();
        assert_eq!(catalog.len(), 13);

        let soul = catalog.lookup_str("othermod:soul_speed").unwrap();
        assert!(!soul.is_tracked());
        assert_eq!(catalog.lookup_str("jump_height").unwrap().max(), 8.0);
    }

    #[test]
    fn inverted_bounds_fail() {
        let specs = CatalogLoader::parse(
            r#"
            [[attributes]]
            name = "broken"
            base = 5.0
            min = 0.0
            max = 1.0
            "#,
        )
        .unwrap();
        let mut catalog = AttributeCatalog::with_builtins();
        assert!(CatalogLoader::define_all(&mut catalog, &specs).is_err());
    }

    #[test]
    fn redefining_builtin_fails() {
        let specs = CatalogLoader::parse(
            r#"
            [[attributes]]
            name = "max_air"
            base = 0.0
            min = 0.0
            max = 1.0
            "#,
        )
        .unwrap();
        let mut catalog = AttributeCatalog::with_builtins();
        let err = CatalogLoader::define_all(&mut catalog, &specs).unwrap_err();
        assert!(err.to_string().contains("already defined"));
    }
}
