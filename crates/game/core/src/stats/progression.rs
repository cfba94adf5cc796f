//! Experience curve and level-up rules.
//!
//! Experience is a running total that is never consumed. A character at
//! `level` advances once its total reaches `threshold(level)`:
//!
//! ```text
//! threshold(level) = experience_base × level²
//! ```
//!
//! With the default base of 100 the totals needed for levels 2, 3, 4 are
//! 100, 400, 900.

use super::resources::{life_max, mana_max};
use crate::config::GameConfig;
use crate::state::Character;

/// Total experience a character at `level` needs to reach `level + 1`.
pub fn experience_threshold(config: &GameConfig, level: u32) -> u64 {
    let level = u64::from(level);
    config
        .experience_base
        .saturating_mul(level.saturating_mul(level))
}

/// Adds experience and applies every level-up it unlocks.
///
/// Returns the number of levels gained. Levels stop at `config.max_level`;
/// experience keeps accumulating past the cap.
pub fn grant_experience(character: &mut Character, amount: u64, config: &GameConfig) -> u32 {
    character.experience = character.experience.saturating_add(amount);

    let mut gained = 0;
    while character.level < config.max_level
        && character.experience >= experience_threshold(config, character.level)
    {
        level_up(character);
        gained += 1;
    }
    gained
}

/// Advances one level: class growth is added and maxima are recomputed.
///
/// Current life and mana are left as they are.
pub fn level_up(character: &mut Character) {
    let profile = character.class.profile();

    character.level += 1;
    character.stats.grow(&profile.growth);
    character.life.set_maximum(life_max(character.stats.vitality));
    character.mana.set_maximum(mana_max(&profile, character.level));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{CharacterClass, CharacterId};

    fn fighter() -> Character {
        Character::new(CharacterId(0), "Hero", CharacterClass::Fighter)
    }

    #[test]
    fn threshold_is_quadratic() {
        let config = GameConfig::default();
        assert_eq!(experience_threshold(&config, 1), 100);
        assert_eq!(experience_threshold(&config, 2), 400);
        assert_eq!(experience_threshold(&config, 3), 900);
    }

    #[test]
    fn below_threshold_keeps_level() {
        let config = GameConfig::default();
        let mut hero = fighter();

        assert_eq!(grant_experience(&mut hero, 99, &config), 0);
        assert_eq!(hero.level, 1);
        assert_eq!(hero.experience, 99);
    }

    #[test]
    fn large_grant_applies_every_crossing() {
        let config = GameConfig::default();
        let mut hero = fighter();

        let gained = grant_experience(&mut hero, 1_000, &config);

        // 1000 crosses 100, 400 and 900 but not 1600
        assert_eq!(gained, 3);
        assert_eq!(hero.level, 4);
        assert_eq!(hero.experience, 1_000);
        // Fighter growth (3, 2, 2) applied three times
        assert_eq!(hero.stats.strength, 37);
        assert_eq!(hero.stats.dexterity, 24);
        assert_eq!(hero.stats.vitality, 28);
    }

    #[test]
    fn level_up_recomputes_maxima_without_refill() {
        let config = GameConfig::default();
        let mut hero = fighter();
        hero.life.drain(10);

        grant_experience(&mut hero, 100, &config);

        assert_eq!(hero.life.maximum, life_max(24));
        assert_eq!(hero.life.current, 54);
        assert_eq!(hero.mana.maximum, 11);
        assert_eq!(hero.mana.current, 10);
    }

    #[test]
    fn level_is_capped() {
        let config = GameConfig {
            max_level: 3,
            ..GameConfig::default()
        };
        let mut hero = fighter();

        assert_eq!(grant_experience(&mut hero, u64::MAX, &config), 2);
        assert_eq!(hero.level, 3);
        assert_eq!(hero.experience, u64::MAX);
    }
}
