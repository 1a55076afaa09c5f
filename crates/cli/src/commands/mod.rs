//! Command implementations for attrsim
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod catalog;
mod loot;
mod resolve;

pub use catalog::Catalog;
pub use loot::Loot;
pub use resolve::Resolve;

use std::path::PathBuf;

use attribute_content::ContentFactory;

use crate::config::SimConfig;

/// Content factory for `--data-dir`, falling back to the configured directory.
fn factory(data_dir: &Option<PathBuf>, config: &SimConfig) -> ContentFactory {
    ContentFactory::new(data_dir.clone().unwrap_or_else(|| config.data_dir.clone()))
}
