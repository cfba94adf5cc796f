use crate::error::{ErrorSeverity, GameError};

/// Game balance constants and tunable parameters.
///
/// Every field has a default, so content files only need to list overrides.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Highest reachable character level and highest dungeon level.
    pub max_level: u32,
    /// Experience scale of the level curve: `threshold(level) = experience_base * level²`.
    pub experience_base: u64,
    /// Areas generated for a normal-difficulty dungeon (harder tiers add one per tier).
    pub areas_per_dungeon: u32,
    /// Lower bound of monsters rolled per area. Must be at least one.
    pub min_monsters_per_area: u32,
    /// Upper bound of monsters rolled per area before level/difficulty bonuses.
    pub max_monsters_per_area: u32,
    /// Monster health growth per dungeon level, in percent of the template value.
    pub health_growth_percent: u32,
    /// Monster attack growth per dungeon level, in percent of the template value.
    pub attack_growth_percent: u32,
    /// Monster experience growth per dungeon level, in percent of the template value.
    pub experience_growth_percent: u32,
    /// Chance (0-100) that a killed monster drops an item.
    pub loot_drop_percent: u32,
}

impl GameConfig {
    pub const DEFAULT_MAX_LEVEL: u32 = 99;
    pub const DEFAULT_EXPERIENCE_BASE: u64 = 100;
    pub const DEFAULT_AREAS_PER_DUNGEON: u32 = 3;
    pub const DEFAULT_MIN_MONSTERS_PER_AREA: u32 = 1;
    pub const DEFAULT_MAX_MONSTERS_PER_AREA: u32 = 3;
    pub const DEFAULT_HEALTH_GROWTH_PERCENT: u32 = 25;
    pub const DEFAULT_ATTACK_GROWTH_PERCENT: u32 = 15;
    pub const DEFAULT_EXPERIENCE_GROWTH_PERCENT: u32 = 20;
    pub const DEFAULT_LOOT_DROP_PERCENT: u32 = 30;

    /// Upper bound accepted for `areas_per_dungeon`.
    pub const MAX_AREAS_PER_DUNGEON: u32 = 20;
    /// Upper bound accepted for `max_monsters_per_area`.
    pub const MAX_MONSTERS_PER_AREA: u32 = 50;
    /// Upper bound accepted for each per-level growth percent.
    pub const MAX_GROWTH_PERCENT: u32 = 1_000;

    pub fn new() -> Self {
        Self {
            max_level: Self::DEFAULT_MAX_LEVEL,
            experience_base: Self::DEFAULT_EXPERIENCE_BASE,
            areas_per_dungeon: Self::DEFAULT_AREAS_PER_DUNGEON,
            min_monsters_per_area: Self::DEFAULT_MIN_MONSTERS_PER_AREA,
            max_monsters_per_area: Self::DEFAULT_MAX_MONSTERS_PER_AREA,
            health_growth_percent: Self::DEFAULT_HEALTH_GROWTH_PERCENT,
            attack_growth_percent: Self::DEFAULT_ATTACK_GROWTH_PERCENT,
            experience_growth_percent: Self::DEFAULT_EXPERIENCE_GROWTH_PERCENT,
            loot_drop_percent: Self::DEFAULT_LOOT_DROP_PERCENT,
        }
    }

    pub fn with_loot_drop_percent(mut self, loot_drop_percent: u32) -> Self {
        self.loot_drop_percent = loot_drop_percent;
        self
    }

    /// Checks the invariants the generator and progression rules rely on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_level == 0 {
            return Err(ConfigError::ZeroMaxLevel);
        }
        if self.experience_base == 0 {
            return Err(ConfigError::ZeroExperienceBase);
        }
        if self.areas_per_dungeon == 0 {
            return Err(ConfigError::NoAreas);
        }
        if self.areas_per_dungeon > Self::MAX_AREAS_PER_DUNGEON {
            return Err(ConfigError::TooManyAreas(self.areas_per_dungeon));
        }
        if self.min_monsters_per_area == 0 {
            return Err(ConfigError::EmptyAreas);
        }
        if self.max_monsters_per_area > Self::MAX_MONSTERS_PER_AREA {
            return Err(ConfigError::TooManyMonsters(self.max_monsters_per_area));
        }
        if self.min_monsters_per_area > self.max_monsters_per_area {
            return Err(ConfigError::MonsterRange {
                min: self.min_monsters_per_area,
                max: self.max_monsters_per_area,
            });
        }
        if self.loot_drop_percent > 100 {
            return Err(ConfigError::LootChance(self.loot_drop_percent));
        }
        for (field, value) in [
            ("health_growth_percent", self.health_growth_percent),
            ("attack_growth_percent", self.attack_growth_percent),
            ("experience_growth_percent", self.experience_growth_percent),
        ] {
            if value > Self::MAX_GROWTH_PERCENT {
                return Err(ConfigError::GrowthPercent { field, value });
            }
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Reasons a [`GameConfig`] is rejected by [`GameConfig::validate`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("max_level must be at least 1")]
    ZeroMaxLevel,

    #[error("experience_base must be at least 1")]
    ZeroExperienceBase,

    #[error("areas_per_dungeon must be at least 1")]
    NoAreas,

    #[error("areas_per_dungeon must be at most {max} (got {0})", max = GameConfig::MAX_AREAS_PER_DUNGEON)]
    TooManyAreas(u32),

    #[error("min_monsters_per_area must be at least 1")]
    EmptyAreas,

    #[error("max_monsters_per_area must be at most {max} (got {0})", max = GameConfig::MAX_MONSTERS_PER_AREA)]
    TooManyMonsters(u32),

    #[error("min_monsters_per_area ({min}) exceeds max_monsters_per_area ({max})")]
    MonsterRange { min: u32, max: u32 },

    #[error("loot_drop_percent must be within 0..=100 (got {0})")]
    LootChance(u32),

    #[error("{field} must be at most {max} (got {value})", max = GameConfig::MAX_GROWTH_PERCENT)]
    GrowthPercent { field: &'static str, value: u32 },
}

impl GameError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use ConfigError::*;
        match self {
            ZeroMaxLevel => "CONFIG_ZERO_MAX_LEVEL",
            ZeroExperienceBase => "CONFIG_ZERO_EXPERIENCE_BASE",
            NoAreas => "CONFIG_NO_AREAS",
            TooManyAreas(_) => "CONFIG_TOO_MANY_AREAS",
            EmptyAreas => "CONFIG_EMPTY_AREAS",
            TooManyMonsters(_) => "CONFIG_TOO_MANY_MONSTERS",
            GrowthPercent { .. } => "CONFIG_GROWTH_PERCENT",
            MonsterRange { .. } => "CONFIG_MONSTER_RANGE",
            LootChance(_) => "CONFIG_LOOT_CHANCE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_empty_areas() {
        let config = GameConfig {
            min_monsters_per_area: 0,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyAreas));
    }

    #[test]
    fn rejects_inverted_monster_range() {
        let config = GameConfig {
            min_monsters_per_area: 4,
            max_monsters_per_area: 2,
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::MonsterRange { min: 4, max: 2 })
        );
    }

    #[test]
    fn rejects_loot_chance_above_hundred() {
        let config = GameConfig::default().with_loot_drop_percent(101);
        assert_eq!(config.validate(), Err(ConfigError::LootChance(101)));
    }

    #[test]
    fn rejects_unbounded_counts() {
        let config = GameConfig {
            max_monsters_per_area: u32::MAX,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::TooManyMonsters(u32::MAX)));

        let config = GameConfig {
            areas_per_dungeon: 21,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::TooManyAreas(21)));
    }

    #[test]
    fn rejects_extreme_growth() {
        let config = GameConfig {
            health_growth_percent: 1_000_000_000,
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::GrowthPercent {
                field: "health_growth_percent",
                value: 1_000_000_000,
            })
        );
        assert_eq!(
            config.validate().map_err(|error| error.error_code()),
            Err("CONFIG_GROWTH_PERCENT")
        );
    }
}
