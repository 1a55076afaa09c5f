//! Attribute configuration loader.

use std::path::Path;

use attribute_core::AttributeConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for attribute configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`AttributeConfig::default`].
    pub fn load(path: &Path) -> LoadResult<AttributeConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<AttributeConfig> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = ConfigLoader::parse("").unwrap();
        assert_eq!(config, AttributeConfig::default());
    }

    #[test]
    fn overrides_namespace() {
        let config = ConfigLoader::parse(
            r#"
            namespace = "spectrum"
            register_builtins = false
            "#,
        )
        .unwrap();
        assert_eq!(config.namespace, "spectrum");
        assert!(!config.register_builtins);
    }
}
