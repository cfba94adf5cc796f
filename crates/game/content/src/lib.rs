//! Data-driven content definitions and loaders.
//!
//! This crate provides loaders for the RON/TOML data files that tune a
//! session:
//! - Balance configuration (`config.toml`)
//! - Monster templates (`bestiary.ron`)
//! - Loot table (`loot.ron`)
//!
//! Content is consumed through the core oracles and never appears in game
//! state. Every file is optional; missing files fall back to the built-in
//! roster shipped with `bridgeworld-core`.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    BestiaryLoader, ConfigLoader, ContentBundle, ContentFactory, LoadResult, LootLoader,
};
