//! Additional entity attributes and best-of-N bonus loot.
//!
//! `attribute-core` defines the attribute model shared by every host
//! integration: a [`AttributeCatalog`] of clamped [`AttributeKind`]s, per-entity
//! [`AttributeInstance`]s carrying modifiers, the [`EffectiveValueResolver`]
//! that folds them into one value, and the [`BestOfNRerollEngine`] that lets
//! the `bonus_loot_count_rolls` attribute reroll loot formulas.
//!
//! Everything here is synchronous and free of I/O. Hosts own one
//! [`EntityAttributes`] per entity and call into it from their update path.
pub mod catalog;
pub mod config;
pub mod container;
pub mod effects;
pub mod error;
pub mod formula;
pub mod id;
pub mod instance;
pub mod kind;
pub mod loot;
pub mod modifier;
pub mod reroll;
pub mod resolve;
pub mod rng;

pub use catalog::AttributeCatalog;
pub use config::AttributeConfig;
pub use container::EntityAttributes;
pub use effects::{AttributeEffects, Medium};
pub use error::{AttributeError, AttributeResult, CoreError, ErrorSeverity};
pub use formula::{BonusLootFormula, LootFormula};
pub use id::{AttributeId, DEFAULT_NAMESPACE};
pub use instance::AttributeInstance;
pub use kind::{AttributeKind, BuiltinAttribute};
pub use loot::{BonusLootHook, LootContext, ToolEnchantments, ToolStack};
pub use modifier::{Modifier, ModifierId, ModifierOperation};
pub use reroll::BestOfNRerollEngine;
pub use resolve::EffectiveValueResolver;
pub use rng::{PcgRandom, RandomSource, compute_seed};
