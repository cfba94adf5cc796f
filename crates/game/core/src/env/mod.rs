//! Read-only collaborators of the engine.
//!
//! Oracles expose balance configuration, randomness, monster templates and
//! the loot table. [`GameEnv`] bundles them so the engine can reach everything
//! it needs without coupling to concrete implementations: production code
//! plugs in [`PcgRng`] and content loaded from disk, tests plug in fixed
//! doubles.
mod bestiary;
mod error;
mod loot;
mod rng;

pub use bestiary::{Bestiary, BestiaryOracle, MonsterTemplate};
pub use error::OracleError;
pub use loot::{LootOracle, LootTable};
pub use rng::{PcgRng, RngOracle, RollStream, compute_seed};

use crate::config::GameConfig;

/// Aggregates the read-only oracles required by [`crate::GameEngine`].
#[derive(Clone, Copy)]
pub struct GameEnv<'a> {
    config: &'a GameConfig,
    rng: &'a dyn RngOracle,
    bestiary: &'a dyn BestiaryOracle,
    loot: &'a dyn LootOracle,
}

impl<'a> GameEnv<'a> {
    pub fn new(
        config: &'a GameConfig,
        rng: &'a dyn RngOracle,
        bestiary: &'a dyn BestiaryOracle,
        loot: &'a dyn LootOracle,
    ) -> Self {
        Self {
            config,
            rng,
            bestiary,
            loot,
        }
    }

    pub fn config(&self) -> &'a GameConfig {
        self.config
    }

    pub fn rng(&self) -> &'a dyn RngOracle {
        self.rng
    }

    pub fn bestiary(&self) -> &'a dyn BestiaryOracle {
        self.bestiary
    }

    pub fn loot(&self) -> &'a dyn LootOracle {
        self.loot
    }
}

impl core::fmt::Debug for GameEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GameEnv")
            .field("config", self.config)
            .field("monster_templates", &self.bestiary.templates().len())
            .field("loot_items", &self.loot.items().len())
            .finish_non_exhaustive()
    }
}
