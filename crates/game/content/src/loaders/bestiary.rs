//! Bestiary loader.

use std::path::Path;

use bridgeworld_core::{Bestiary, MonsterTemplate};

use crate::loaders::{LoadResult, read_file};

/// Loader for monster templates from RON files.
///
/// ```ron
/// (
///     monsters: [
///         (name: "Ghoul", health: 20, attack: 3, experience: 10),
///     ],
/// )
/// ```
pub struct BestiaryLoader;

impl BestiaryLoader {
    pub fn load(path: &Path) -> LoadResult<Bestiary> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid bestiary {}: {}", path.display(), e))
    }

    /// Parse bestiary RON text.
    ///
    /// Rejects an empty roster and templates with zero health or experience,
    /// which would produce monsters that are born dead or worth nothing.
    pub fn parse(content: &str) -> LoadResult<Bestiary> {
        let bestiary: Bestiary = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse bestiary RON: {}", e))?;

        if bestiary.monsters.is_empty() {
            anyhow::bail!("bestiary lists no monsters");
        }
        for template in &bestiary.monsters {
            validate_template(template)?;
        }

        Ok(bestiary)
    }
}

fn validate_template(template: &MonsterTemplate) -> LoadResult<()> {
    if template.name.trim().is_empty() {
        anyhow::bail!("monster template with a blank name");
    }
    if template.health == 0 {
        anyhow::bail!("monster '{}' has zero health", template.name);
    }
    if template.experience == 0 {
        anyhow::bail!("monster '{}' grants no experience", template.name);
    }
    Ok(())
}
