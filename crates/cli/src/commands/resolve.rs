//! Resolve an entity profile.

use std::path::PathBuf;

use anyhow::{Context, Result};
use attribute_core::{AttributeEffects, Medium};
use clap::Parser;
use console::style;

use crate::config::SimConfig;

/// Resolve the attributes of an entity profile
#[derive(Parser, Debug)]
pub struct Resolve {
    /// Profile name under `profiles/`
    pub profile: String,

    /// Content directory (defaults to ATTRSIM_DATA_DIR)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
}

impl Resolve {
    pub fn execute(self, config: &SimConfig) -> Result<()> {
        let factory = super::factory(&self.data_dir, config);
        let catalog = factory.load_catalog()?;
        let profile = factory
            .load_profile(&self.profile)
            .with_context(|| format!("loading profile `{}`", self.profile))?;
        let entity = profile.build(&catalog)?;

        println!("{} {}", style("Profile").bold(), style(&profile.name).cyan());
        for kind in entity.assigned() {
            let value = entity.resolve(kind.id())?;
            let marker = if value == kind.base() {
                style("=").dim()
            } else {
                style("*").yellow()
            };
            println!("  {marker} {:<52} {value}", kind.id().to_string());
        }

        let effects = AttributeEffects::new(&catalog, &entity);
        println!("{}", style("Effects").bold());
        println!(
            "  critical multiplier  {:.3}x",
            effects.critical_multiplier()?
        );
        println!("  experience (10 xp)   {}", effects.dropped_experience(10)?);
        println!("  magic damage (6.0)   {:.2}", effects.magic_damage(6.0)?);
        println!("  max air (300 ticks)  {}", effects.max_air(300)?);
        for medium in [Medium::Water, Medium::Lava] {
            println!(
                "  {medium:<5} speed {:.3}  visibility {:.1}",
                effects.movement_speed(medium)?,
                effects.visibility(medium)?
            );
        }
        Ok(())
    }
}
