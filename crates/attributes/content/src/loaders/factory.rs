//! Content factory for building the attribute catalog from data files.

use std::path::{Path, PathBuf};

use attribute_core::{AttributeCatalog, AttributeConfig};

use crate::loaders::{CatalogLoader, ConfigLoader, EntityProfile, LoadResult, ProfileLoader};

/// Content factory that loads attribute content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml        (optional)
/// ├── attributes.toml    (optional)
/// └── profiles/
///     ├── miner.ron
///     └── diver.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load configuration from `config.toml`, or defaults when absent.
    pub fn load_config(&self) -> LoadResult<AttributeConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            return Ok(AttributeConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Build the catalog from the config plus `attributes.toml` when present.
    pub fn load_catalog(&self) -> LoadResult<AttributeCatalog> {
        let config = self.load_config()?;
        let mut catalog = AttributeCatalog::from_config(&config)?;

        let path = self.data_dir.join("attributes.toml");
        if path.exists() {
            let specs = CatalogLoader::load(&path)?;
            CatalogLoader::define_all(&mut catalog, &specs)?;
        }
        Ok(catalog)
    }

    /// Load `profiles/<name>.ron`.
    pub fn load_profile(&self, name: &str) -> LoadResult<EntityProfile> {
        let path = self.data_dir.join("profiles").join(format!("{name}.ron"));
        ProfileLoader::load(&path)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn empty_directory_yields_builtin_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());
        let catalog = factory.load_catalog().unwrap();
        assert_eq!(catalog.len(), 11);
    }

    #[test]
    fn loads_config_attributes_and_profiles() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("config.toml"),
            "namespace = \"spectrum\"\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("attributes.toml"),
            "[[attributes]]\nname = \"jump_height\"\nbase = 1.0\nmin = 0.0\nmax = 8.0\n",
        )
        .unwrap();
        fs::create_dir(dir.path().join("profiles")).unwrap();
        fs::write(
            dir.path().join("profiles").join("diver.ron"),
            r#"(name: "diver", modifiers: [(attribute: "max_air", id: "tank", amount: 600.0, operation: add)])"#,
        )
        .unwrap();

        let factory = ContentFactory::new(dir.path());
        let catalog = factory.load_catalog().unwrap();
        assert_eq!(catalog.len(), 12);
        assert!(catalog.lookup_str("spectrum:jump_height").is_ok());

        let profile = factory.load_profile("diver").unwrap();
        let entity = profile.build(&catalog).unwrap();
        let air = catalog.lookup_str("max_air").unwrap();
        assert_eq!(entity.resolve(air.id()).unwrap(), 600.0);
    }

    #[test]
    fn missing_profile_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());
        assert!(factory.load_profile("nobody").is_err());
    }
}
