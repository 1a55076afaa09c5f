//! Attribute simulator.
//!
//! Inspects the attribute catalog, resolves entity profiles and simulates
//! best-of-N bonus loot over a seeded random source.
//! Run with: `cargo run -p attribute-cli -- <command>`

mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use commands::{Catalog, Loot, Resolve};
use config::SimConfig;

/// Additional entity attributes simulator
#[derive(Parser)]
#[command(name = "attrsim")]
#[command(about = "Inspect attributes and simulate bonus loot rerolls", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// List every attribute kind in the catalog
    Catalog(Catalog),

    /// Resolve the attributes of an entity profile
    Resolve(Resolve),

    /// Simulate bonus loot drops for an entity profile
    Loot(Loot),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for ATTRSIM_DATA_DIR and ATTRSIM_SEED)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = SimConfig::from_env();
    let cli = Cli::parse();

    match cli.command {
        Command::Catalog(cmd) => cmd.execute(&config),
        Command::Resolve(cmd) => cmd.execute(&config),
        Command::Loot(cmd) => cmd.execute(&config),
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_loot_arguments() {
        let cli = Cli::try_parse_from([
            "attrsim", "loot", "miner", "--formula", "binomial", "--trials", "50", "--seed", "7",
        ])
        .unwrap();
        let Command::Loot(loot) = cli.command else {
            panic!("expected loot command");
        };
        assert_eq!(loot.trials, 50);
        assert_eq!(loot.seed, Some(7));
        assert!(matches!(
            loot.loot_formula(),
            attribute_core::LootFormula::BinomialWithBonusCount { extra: 3, .. }
        ));
    }
}
