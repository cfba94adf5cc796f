//! Deterministic game rules for the Bridgeworld dungeon crawler.
//!
//! `bridgeworld-core` defines the canonical rules (character model, dungeon
//! generation, combat exchange, progression) and exposes pure APIs that the
//! content loaders and the client reuse. All state mutation flows through
//! [`engine::GameEngine`], which borrows a session-owned [`GameState`] and the
//! read-only oracles bundled in [`GameEnv`].
pub mod combat;
pub mod config;
pub mod dungeon;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;
pub mod stats;

pub use combat::{CombatResult, DamageRange};
pub use config::{ConfigError, GameConfig};
pub use dungeon::DungeonGenerator;
pub use engine::{ArgumentError, EngineError, GameEngine, NotFound};
pub use env::{
    Bestiary, BestiaryOracle, GameEnv, LootOracle, LootTable, MonsterTemplate, OracleError, PcgRng,
    RngOracle, compute_seed,
};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    Area, Character, CharacterClass, CharacterId, ClassProfile, Difficulty, Dungeon, DungeonId,
    GameState, Item, ItemKind, Monster, MonsterId, ResourceMeter,
};
pub use stats::CoreStats;
