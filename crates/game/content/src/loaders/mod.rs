//! Content loaders for reading game data from files.
//!
//! Each loader turns one RON/TOML file into the core type that backs an
//! oracle, validating the values the engine relies on.

pub mod bestiary;
pub mod config;
pub mod factory;
pub mod loot;

pub use bestiary::BestiaryLoader;
pub use config::ConfigLoader;
pub use factory::{ContentBundle, ContentFactory};
pub use loot::LootLoader;

use std::path::Path;

use anyhow::Context;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file {}", path.display()))
}
