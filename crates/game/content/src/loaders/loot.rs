//! Loot table loader.

use std::path::Path;

use bridgeworld_core::LootTable;

use crate::loaders::{LoadResult, read_file};

/// Loader for the loot table from RON files.
///
/// An empty `items` list is allowed and disables drops.
pub struct LootLoader;

impl LootLoader {
    pub fn load(path: &Path) -> LoadResult<LootTable> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid loot table {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<LootTable> {
        let table: LootTable = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse loot table RON: {}", e))?;

        if let Some(item) = table.items.iter().find(|item| item.name.trim().is_empty()) {
            anyhow::bail!("{} item with a blank name", item.kind);
        }

        Ok(table)
    }
}
