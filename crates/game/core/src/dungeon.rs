//! Procedural dungeon generation.
//!
//! A dungeon is a list of areas, each holding a rolled number of monsters
//! picked from the bestiary and scaled to the dungeon's level and difficulty.
//!
//! # Scaling
//!
//! ```text
//! leveled = base × (100 + growth% × (level - 1)) / 100 + (level - 1)
//! scaled  = leveled × difficulty% / 100        (at least 1)
//! ```
//!
//! The `+ (level - 1)` term keeps the curve strictly increasing in level even
//! for small template values; difficulty multipliers are 100/150/200 percent.
//!
//! # Counts
//!
//! - areas = `areas_per_dungeon + tier`
//! - monsters per area uniform in `[min_monsters_per_area, max_monsters_per_area + tier + level / 10]`
//!
//! `min_monsters_per_area ≥ 1` is a config invariant, so every area has at
//! least one monster.

use crate::config::GameConfig;
use crate::engine::{ArgumentError, EngineError};
use crate::env::{BestiaryOracle, MonsterTemplate, OracleError, RollStream};
use crate::state::{Area, Difficulty, Dungeon, DungeonId, Monster, MonsterId, ResourceMeter};

/// Scales a level-1 normal-difficulty template value.
pub fn scale_stat(base: u32, growth_percent: u32, level: u32, difficulty: Difficulty) -> u32 {
    let levels_above_first = u64::from(level.saturating_sub(1));
    let percent = u64::from(growth_percent)
        .saturating_mul(levels_above_first)
        .saturating_add(100);
    let leveled =
        (u64::from(base).saturating_mul(percent) / 100).saturating_add(levels_above_first);
    let scaled = leveled.saturating_mul(u64::from(difficulty.scaling_percent())) / 100;
    scaled.clamp(1, u64::from(u32::MAX)) as u32
}

/// Builds dungeons from the bestiary and balance configuration.
pub struct DungeonGenerator<'a> {
    config: &'a GameConfig,
    bestiary: &'a dyn BestiaryOracle,
}

impl<'a> DungeonGenerator<'a> {
    pub fn new(config: &'a GameConfig, bestiary: &'a dyn BestiaryOracle) -> Self {
        Self { config, bestiary }
    }

    /// Checks that `level` is within `1..=max_level`.
    pub fn validate_level(&self, level: u32) -> Result<(), ArgumentError> {
        if level == 0 || level > self.config.max_level {
            return Err(ArgumentError::InvalidLevel {
                level,
                max: self.config.max_level,
            });
        }
        Ok(())
    }

    /// Everything [`Self::generate`] can fail on, checked up front.
    pub fn check(&self, level: u32) -> Result<(), EngineError> {
        self.validate_level(level)?;
        if self.bestiary.templates().is_empty() {
            return Err(OracleError::EmptyBestiary.into());
        }
        Ok(())
    }

    /// Generates a fully populated dungeon.
    ///
    /// `next_monster_id` is called once per monster, in area order.
    pub fn generate(
        &self,
        id: DungeonId,
        level: u32,
        difficulty: Difficulty,
        rolls: &mut RollStream<'_>,
        mut next_monster_id: impl FnMut() -> MonsterId,
    ) -> Result<Dungeon, EngineError> {
        self.check(level)?;

        let templates = self.bestiary.templates();

        // Counts are clamped to the validated bounds even for unvalidated configs.
        let tier = difficulty.tier();
        let area_count = self
            .config
            .areas_per_dungeon
            .min(GameConfig::MAX_AREAS_PER_DUNGEON)
            .saturating_add(tier);
        let min_monsters = self
            .config
            .min_monsters_per_area
            .clamp(1, GameConfig::MAX_MONSTERS_PER_AREA);
        let max_monsters = self
            .config
            .max_monsters_per_area
            .clamp(min_monsters, GameConfig::MAX_MONSTERS_PER_AREA)
            .saturating_add(tier)
            .saturating_add(level / 10);

        let areas = (1..=area_count)
            .map(|number| {
                let count = rolls.range(min_monsters, max_monsters);
                let monsters = (0..count)
                    .map(|_| {
                        let template = &templates[rolls.index(templates.len())];
                        self.spawn(next_monster_id(), template, level, difficulty)
                    })
                    .collect();
                Area::new(format!("Area {number}"), monsters)
            })
            .collect();

        Ok(Dungeon {
            id,
            name: Dungeon::name_for(level, difficulty),
            level,
            difficulty,
            areas,
        })
    }

    fn spawn(
        &self,
        id: MonsterId,
        template: &MonsterTemplate,
        level: u32,
        difficulty: Difficulty,
    ) -> Monster {
        let config = self.config;
        let health = scale_stat(template.health, config.health_growth_percent, level, difficulty);

        Monster {
            id,
            name: template.name.clone(),
            health: ResourceMeter::full(health),
            attack: scale_stat(template.attack, config.attack_growth_percent, level, difficulty),
            experience: scale_stat(
                template.experience,
                config.experience_growth_percent,
                level,
                difficulty,
            ),
        }
    }
}
