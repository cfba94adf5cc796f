//! Content factory for building oracles from data files.

use std::path::{Path, PathBuf};

use bridgeworld_core::{Bestiary, GameConfig, LootTable};
use tracing::{debug, info};

use crate::loaders::{BestiaryLoader, ConfigLoader, LoadResult, LootLoader};

/// Everything a session needs besides its seed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentBundle {
    pub config: GameConfig,
    pub bestiary: Bestiary,
    pub loot: LootTable,
}

impl ContentBundle {
    /// Built-in configuration, bestiary and loot table.
    pub fn builtin() -> Self {
        Self {
            config: GameConfig::default(),
            bestiary: Bestiary::standard(),
            loot: LootTable::standard(),
        }
    }
}

impl Default for ContentBundle {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── bestiary.ron
/// └── loot.ron
/// ```
///
/// Each file is optional. A missing file falls back to its built-in
/// counterpart; a present but malformed file is an error.
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "config.toml";
    pub const BESTIARY_FILE: &'static str = "bestiary.ron";
    pub const LOOT_FILE: &'static str = "loot.ron";

    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Loads every content file of `data_dir`.
    pub fn load_dir(data_dir: impl Into<PathBuf>) -> LoadResult<ContentBundle> {
        Self::new(data_dir).load()
    }

    pub fn load(&self) -> LoadResult<ContentBundle> {
        let bundle = ContentBundle {
            config: self.load_config()?,
            bestiary: self.load_bestiary()?,
            loot: self.load_loot()?,
        };

        info!(
            data_dir = %self.data_dir.display(),
            monsters = bundle.bestiary.monsters.len(),
            items = bundle.loot.items.len(),
            "Content loaded"
        );
        Ok(bundle)
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        self.load_or(Self::CONFIG_FILE, ConfigLoader::load, GameConfig::default)
    }

    /// Load monster templates from `bestiary.ron`.
    pub fn load_bestiary(&self) -> LoadResult<Bestiary> {
        self.load_or(Self::BESTIARY_FILE, BestiaryLoader::load, Bestiary::standard)
    }

    /// Load the drop table from `loot.ron`.
    pub fn load_loot(&self) -> LoadResult<LootTable> {
        self.load_or(Self::LOOT_FILE, LootLoader::load, LootTable::standard)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn load_or<T>(
        &self,
        file: &str,
        load: impl FnOnce(&Path) -> LoadResult<T>,
        builtin: impl FnOnce() -> T,
    ) -> LoadResult<T> {
        let path = self.data_dir.join(file);
        if path.is_file() {
            debug!(path = %path.display(), "Loading content file");
            load(&path)
        } else {
            debug!(path = %path.display(), "Content file missing, using built-in");
            Ok(builtin())
        }
    }
}
