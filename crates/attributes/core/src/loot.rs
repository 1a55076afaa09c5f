//! Bonus-loot hook.
//!
//! The host's loot pipeline computes one bonus-formula result per item drop and
//! hands it to [`BonusLootHook::apply`], which returns the value to use instead.
//! Rerolls only happen when all of the following hold:
//!
//! 1. a tool is part of the loot context,
//! 2. the looting entity carries attributes,
//! 3. the tool has the hook's enchantment at level > 0,
//! 4. the entity has the roll attribute assigned.
//!
//! Otherwise the original roll passes through untouched.

use std::collections::BTreeMap;

use crate::container::EntityAttributes;
use crate::error::AttributeError;
use crate::formula::BonusLootFormula;
use crate::id::AttributeId;
use crate::reroll::BestOfNRerollEngine;
use crate::rng::RandomSource;

/// Enchantment levels of a tool.
pub trait ToolEnchantments {
    /// Level of `enchantment`, zero when absent.
    fn enchantment_level(&self, enchantment: &str) -> u32;
}

/// A plain enchantment table, keyed by enchantment id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ToolStack {
    pub enchantments: BTreeMap<String, u32>,
}

impl ToolStack {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_enchantment(mut self, enchantment: impl Into<String>, level: u32) -> Self {
        self.enchantments.insert(enchantment.into(), level);
        self
    }
}

impl ToolEnchantments for ToolStack {
    fn enchantment_level(&self, enchantment: &str) -> u32 {
        self.enchantments.get(enchantment).copied().unwrap_or(0)
    }
}

/// Inputs of one bonus-loot evaluation supplied by the host.
#[derive(Clone, Copy)]
pub struct LootContext<'a> {
    pub tool: Option<&'a dyn ToolEnchantments>,
    pub entity: Option<&'a EntityAttributes>,
    /// Size of the dropped stack fed into the formula.
    pub stack_count: i32,
}

impl<'a> LootContext<'a> {
    pub fn new(stack_count: i32) -> Self {
        Self {
            tool: None,
            entity: None,
            stack_count,
        }
    }

    #[must_use]
    pub fn with_tool(mut self, tool: &'a dyn ToolEnchantments) -> Self {
        self.tool = Some(tool);
        self
    }

    #[must_use]
    pub fn with_entity(mut self, entity: &'a EntityAttributes) -> Self {
        self.entity = Some(entity);
        self
    }
}

/// One bonus-loot function: an enchantment, its formula and the roll attribute.
#[derive(Clone, Debug)]
pub struct BonusLootHook<F> {
    enchantment: String,
    formula: F,
    roll_attribute: AttributeId,
}

impl<F: BonusLootFormula> BonusLootHook<F> {
    /// Hook driven by `roll_attribute`, normally `bonus_loot_count_rolls`.
    pub fn new(enchantment: impl Into<String>, formula: F, roll_attribute: AttributeId) -> Self {
        Self {
            enchantment: enchantment.into(),
            formula,
            roll_attribute,
        }
    }

    pub fn enchantment(&self) -> &str {
        &self.enchantment
    }

    pub fn formula(&self) -> &F {
        &self.formula
    }

    /// Enchantment level and roll count, or `None` when the hook does not apply.
    pub fn roll_inputs(&self, context: &LootContext<'_>) -> Option<(u32, u32)> {
        let tool = context.tool?;
        let entity = context.entity?;

        let level = tool.enchantment_level(&self.enchantment);
        if level == 0 {
            return None;
        }

        match entity.resolve(&self.roll_attribute) {
            Ok(value) => Some((level, BestOfNRerollEngine::roll_count(value))),
            Err(AttributeError::MissingAttributeInstance { .. }) => None,
            Err(err) => {
                tracing::warn!("bonus loot hook skipped: {err}");
                None
            }
        }
    }

    /// Replaces the host's `initial_roll` with the best-of-N result.
    pub fn apply(
        &self,
        initial_roll: i32,
        context: &LootContext<'_>,
        random: &mut dyn RandomSource,
    ) -> i32 {
        match self.roll_inputs(context) {
            Some((level, rolls)) => BestOfNRerollEngine::reroll_max(
                initial_roll,
                rolls,
                &self.formula,
                random,
                context.stack_count,
                level,
            ),
            None => initial_roll,
        }
    }

    /// Runs the host's original roll followed by [`Self::apply`].
    pub fn roll(&self, context: &LootContext<'_>, random: &mut dyn RandomSource) -> i32 {
        let level = context
            .tool
            .map_or(0, |tool| tool.enchantment_level(&self.enchantment));
        let initial = self.formula.evaluate(random, context.stack_count, level);
        self.apply(initial, context, random)
    }
}
