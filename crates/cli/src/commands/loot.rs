//! Bonus loot simulation.
//!
//! Rolls the chosen formula `trials` times for the profile's entity and tool,
//! once as the host would (single roll) and once through the reroll hook, and
//! prints both distributions side by side.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use attribute_core::{
    BonusLootFormula, BonusLootHook, BuiltinAttribute, LootContext, LootFormula, PcgRandom,
    ToolEnchantments, compute_seed,
};
use clap::{Parser, ValueEnum};
use console::style;

use crate::config::SimConfig;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FormulaKind {
    OreDrops,
    Uniform,
    Binomial,
}

/// Simulate bonus loot drops for an entity profile
#[derive(Parser, Debug)]
pub struct Loot {
    /// Profile name under `profiles/`
    pub profile: String,

    /// Bonus formula to roll
    #[arg(long, value_enum, default_value_t = FormulaKind::OreDrops)]
    pub formula: FormulaKind,

    /// Bonus multiplier for the uniform formula
    #[arg(long, default_value_t = 1)]
    pub multiplier: u32,

    /// Extra trials for the binomial formula
    #[arg(long, default_value_t = 3)]
    pub extra: u32,

    /// Success probability for the binomial formula
    #[arg(long, default_value_t = 0.5714286)]
    pub probability: f32,

    /// Enchantment that drives the formula
    #[arg(long, default_value = "minecraft:fortune")]
    pub enchantment: String,

    /// Use the rare loot roll attribute instead of the bonus count one
    #[arg(long)]
    pub rare: bool,

    /// Dropped stack size before the formula
    #[arg(long, default_value_t = 1)]
    pub count: i32,

    /// Number of simulated drops
    #[arg(long, default_value_t = 10_000)]
    pub trials: u64,

    /// World seed (defaults to ATTRSIM_SEED)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Content directory (defaults to ATTRSIM_DATA_DIR)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
}

impl Loot {
    pub(crate) fn loot_formula(&self) -> LootFormula {
        match self.formula {
            FormulaKind::OreDrops => LootFormula::OreDrops,
            FormulaKind::Uniform => LootFormula::UniformBonusCount {
                bonus_multiplier: self.multiplier,
            },
            FormulaKind::Binomial => LootFormula::BinomialWithBonusCount {
                extra: self.extra,
                probability: self.probability,
            },
        }
    }

    pub fn execute(self, config: &SimConfig) -> Result<()> {
        if self.trials == 0 {
            anyhow::bail!("--trials must be at least 1");
        }

        let factory = super::factory(&self.data_dir, config);
        let catalog = factory.load_catalog()?;
        let profile = factory
            .load_profile(&self.profile)
            .with_context(|| format!("loading profile `{}`", self.profile))?;
        let entity = profile.build(&catalog)?;

        let roll_attribute = if self.rare {
            BuiltinAttribute::BonusRareLootRolls
        } else {
            BuiltinAttribute::BonusLootCountRolls
        };
        let roll_kind = catalog.builtin(roll_attribute)?;
        let formula = self.loot_formula();
        let hook = BonusLootHook::new(self.enchantment.as_str(), formula, roll_kind.id().clone());
        let context = LootContext::new(self.count)
            .with_tool(&profile.tool)
            .with_entity(&entity);

        let (level, rolls) = hook.roll_inputs(&context).unwrap_or((0, 0));
        let seed = self.seed.unwrap_or(config.seed);
        tracing::info!(
            "simulating {} drops: {formula:?}, level {level}, {rolls} rerolls, seed {seed}",
            self.trials
        );

        // The host rolls once with the tool's level, even when the hook does not apply
        let tool_level = profile.tool.enchantment_level(&self.enchantment);
        let mut vanilla = BTreeMap::<i32, u64>::new();
        let mut rerolled = BTreeMap::<i32, u64>::new();
        for trial in 0..self.trials {
            let mut rng = PcgRandom::new(compute_seed(seed, trial, 0, 0));
            let initial = formula.evaluate(&mut rng, self.count, tool_level);
            *vanilla.entry(initial).or_default() += 1;
            *rerolled
                .entry(hook.apply(initial, &context, &mut rng))
                .or_default() += 1;
        }

        println!(
            "{} {} with {} ({} level {level}, {rolls} rerolls)",
            style("Loot").bold(),
            style(&profile.name).cyan(),
            style(format!("{formula:?}")).green(),
            self.enchantment
        );
        println!("  {:>6}  {:>8}  {:>8}", "count", "vanilla", "rerolled");
        let counts: Vec<i32> = vanilla.keys().chain(rerolled.keys()).copied().collect();
        let min = counts.iter().copied().min().unwrap_or(0);
        let max = counts.iter().copied().max().unwrap_or(0);
        for count in min..=max {
            println!(
                "  {count:>6}  {:>8}  {:>8}",
                vanilla.get(&count).copied().unwrap_or(0),
                rerolled.get(&count).copied().unwrap_or(0)
            );
        }
        println!(
            "  {:>6}  {:>8.3}  {:>8.3}",
            "mean",
            mean(&vanilla, self.trials),
            mean(&rerolled, self.trials)
        );
        Ok(())
    }
}

fn mean(histogram: &BTreeMap<i32, u64>, trials: u64) -> f64 {
    let total: f64 = histogram
        .iter()
        .map(|(count, hits)| f64::from(*count) * *hits as f64)
        .sum();
    total / trials as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_weights_counts_by_hits() {
        let histogram = BTreeMap::from([(1, 3), (4, 1)]);
        assert_eq!(mean(&histogram, 4), 1.75);
    }
}
