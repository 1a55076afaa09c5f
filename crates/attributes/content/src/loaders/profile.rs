//! Entity attribute profile loader.

use std::collections::BTreeMap;
use std::path::Path;

use attribute_core::{
    AttributeCatalog, AttributeId, EntityAttributes, Modifier, ModifierOperation, ToolStack,
};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// A modifier entry in a profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileModifier {
    pub attribute: String,
    pub id: String,
    pub amount: f64,
    pub operation: ModifierOperation,
}

/// Attribute setup of one entity plus the tool it holds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityProfile {
    pub name: String,
    /// Assigned attributes. `None` assigns every catalog kind.
    pub attributes: Option<Vec<String>>,
    pub base_overrides: BTreeMap<String, f64>,
    pub modifiers: Vec<ProfileModifier>,
    pub tool: ToolStack,
}

impl EntityProfile {
    /// Builds the entity's attribute container against `catalog`.
    pub fn build(&self, catalog: &AttributeCatalog) -> LoadResult<EntityAttributes> {
        let mut entity = match &self.attributes {
            None => EntityAttributes::with_kinds(catalog.iter()),
            Some(names) => {
                let mut entity = EntityAttributes::new();
                for name in names {
                    entity.assign(catalog.lookup_str(name)?);
                }
                entity
            }
        };

        for (name, base) in &self.base_overrides {
            let id = resolve_id(catalog, name)?;
            entity.set_base_override(&id, *base)?;
        }

        for spec in &self.modifiers {
            let id = resolve_id(catalog, &spec.attribute)?;
            let modifier = Modifier::new(spec.id.as_str(), spec.amount, spec.operation)?;
            entity.add_modifier(&id, modifier)?;
        }

        tracing::debug!(
            "built profile `{}` with {} modifiers",
            self.name,
            self.modifiers.len()
        );
        Ok(entity)
    }
}

fn resolve_id(catalog: &AttributeCatalog, name: &str) -> LoadResult<AttributeId> {
    Ok(catalog.lookup_str(name)?.id().clone())
}

/// Loader for entity profiles from RON files.
pub struct ProfileLoader;

impl ProfileLoader {
    /// Load a profile from a RON file.
    pub fn load(path: &Path) -> LoadResult<EntityProfile> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<EntityProfile> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse profile RON: {}", e))
    }
}
