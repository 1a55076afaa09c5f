//! List the attribute catalog.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use crate::config::SimConfig;

/// List every attribute kind in the catalog
#[derive(Parser, Debug)]
pub struct Catalog {
    /// Content directory (defaults to ATTRSIM_DATA_DIR)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
}

impl Catalog {
    pub fn execute(self, config: &SimConfig) -> Result<()> {
        let factory = super::factory(&self.data_dir, config);
        let catalog = factory
            .load_catalog()
            .with_context(|| format!("loading catalog from {}", factory.data_dir().display()))?;

        println!(
            "{} ({} kinds, namespace {})",
            style("Attribute catalog").bold(),
            catalog.len(),
            style(catalog.namespace()).cyan()
        );
        for kind in catalog.iter() {
            println!(
                "  {:<52} base {:>8}  range [{}, {}]{}",
                style(kind.id()).green(),
                kind.base(),
                kind.min(),
                kind.max(),
                if kind.is_tracked() { "" } else { "  (untracked)" }
            );
        }
        Ok(())
    }
}
