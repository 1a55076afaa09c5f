//! Bonus-loot formulas.
//!
//! A formula turns the dropped stack size and an enchantment level into a new
//! stack size, drawing from the loot event's random source. The reroll engine
//! evaluates formulas through [`BonusLootFormula`]; any
//! `Fn(&mut dyn RandomSource, i32, u32) -> i32` closure qualifies.

use crate::rng::RandomSource;

/// A loot-quantity formula.
pub trait BonusLootFormula {
    fn evaluate(&self, random: &mut dyn RandomSource, count: i32, enchantment_level: u32) -> i32;
}

impl<F> BonusLootFormula for F
where
    F: Fn(&mut dyn RandomSource, i32, u32) -> i32,
{
    fn evaluate(&self, random: &mut dyn RandomSource, count: i32, enchantment_level: u32) -> i32 {
        (self)(random, count, enchantment_level)
    }
}

/// The host's built-in bonus formulas.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "formula", rename_all = "snake_case"))]
pub enum LootFormula {
    /// Fortune on ores: multiplies the count by `1 + max(rand(level + 2) - 1, 0)`.
    OreDrops,
    /// Adds `rand(multiplier × level + 1)`.
    UniformBonusCount { bonus_multiplier: u32 },
    /// `level + extra` trials, each adding one with the given probability.
    BinomialWithBonusCount { extra: u32, probability: f32 },
}

impl BonusLootFormula for LootFormula {
    fn evaluate(&self, random: &mut dyn RandomSource, count: i32, enchantment_level: u32) -> i32 {
        match *self {
            Self::OreDrops => {
                if enchantment_level == 0 {
                    return count;
                }
                let draw = i64::from(random.next_int(enchantment_level.saturating_add(2)));
                let bonus = (draw - 1).max(0);
                saturate(i64::from(count).saturating_mul(bonus + 1))
            }
            Self::UniformBonusCount { bonus_multiplier } => {
                let bound = bonus_multiplier
                    .saturating_mul(enchantment_level)
                    .saturating_add(1);
                saturate(i64::from(count) + i64::from(random.next_int(bound)))
            }
            Self::BinomialWithBonusCount { extra, probability } => {
                let trials = enchantment_level.saturating_add(extra);
                let hits = (0..trials)
                    .filter(|_| random.next_float() < probability)
                    .fold(0i64, |hits, _| hits + 1);
                saturate(i64::from(count) + hits)
            }
        }
    }
}

/// Narrows a widened stack size back to `i32`, saturating at the bounds.
fn saturate(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::PcgRandom;

    /// Replays a fixed sequence of raw values.
    struct Scripted(Vec<u32>);

    impl RandomSource for Scripted {
        fn next_u32(&mut self) -> u32 {
            self.0.remove(0)
        }
    }

    #[test]
    fn ore_drops_without_enchantment_keeps_count() {
        let mut rng = PcgRandom::new(1);
        assert_eq!(LootFormula::OreDrops.evaluate(&mut rng, 3, 0), 3);
    }

    #[test]
    fn ore_drops_multiplies_count() {
        // level 3 → rand(5); top of the u32 range maps to 4, giving ×4
        let mut rng = Scripted(vec![u32::MAX]);
        assert_eq!(LootFormula::OreDrops.evaluate(&mut rng, 2, 3), 8);

        // zero maps to 0 → -1 → clamped to 0, giving ×1
        let mut rng = Scripted(vec![0]);
        assert_eq!(LootFormula::OreDrops.evaluate(&mut rng, 2, 3), 2);
    }

    #[test]
    fn ore_drops_saturates_at_extreme_levels() {
        // rand(u32::MAX) of 2^31 + 1 maps to 2^31, past i32::MAX
        let mut rng = Scripted(vec![(1 << 31) + 1]);
        assert_eq!(LootFormula::OreDrops.evaluate(&mut rng, 1, u32::MAX), i32::MAX);

        let mut rng = Scripted(vec![u32::MAX]);
        assert_eq!(LootFormula::OreDrops.evaluate(&mut rng, -2, u32::MAX), i32::MIN);
    }

    #[test]
    fn uniform_bonus_never_shrinks_the_stack() {
        let formula = LootFormula::UniformBonusCount { bonus_multiplier: 1 };
        let mut rng = Scripted(vec![u32::MAX]);
        assert_eq!(formula.evaluate(&mut rng, 5, u32::MAX - 1), i32::MAX);

        let mut rng = Scripted(vec![0]);
        assert_eq!(formula.evaluate(&mut rng, 5, u32::MAX - 1), 5);
    }

    #[test]
    fn uniform_bonus_stays_within_bound() {
        let formula = LootFormula::UniformBonusCount { bonus_multiplier: 2 };
        let mut rng = PcgRandom::new(5);
        for _ in 0..500 {
            let value = formula.evaluate(&mut rng, 1, 3);
            assert!((1..=7).contains(&value));
        }
    }

    #[test]
    fn binomial_counts_successes() {
        let certain = LootFormula::BinomialWithBonusCount {
            extra: 3,
            probability: 1.0,
        };
        let never = LootFormula::BinomialWithBonusCount {
            extra: 3,
            probability: 0.0,
        };
        let mut rng = PcgRandom::new(11);
        assert_eq!(certain.evaluate(&mut rng, 1, 2), 6);
        assert_eq!(never.evaluate(&mut rng, 1, 2), 1);
    }

    #[test]
    fn closures_are_formulas() {
        let constant = |_: &mut dyn RandomSource, _: i32, _: u32| 7;
        let mut rng = PcgRandom::new(0);
        assert_eq!(constant.evaluate(&mut rng, 1, 1), 7);
    }
}
