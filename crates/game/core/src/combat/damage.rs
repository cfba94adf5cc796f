//! Damage calculation and application.

use crate::env::RollStream;
use crate::state::{Character, Monster, ResourceMeter};
use crate::stats::CoreStats;

/// Inclusive bounds of a damage roll.
///
/// # Formula
///
/// ```text
/// min = power
/// max = power + power / 2
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageRange {
    pub min: u32,
    pub max: u32,
}

impl DamageRange {
    pub fn from_power(power: u32) -> Self {
        Self {
            min: power,
            max: power.saturating_add(power / 2),
        }
    }

    pub fn contains(&self, damage: u32) -> bool {
        (self.min..=self.max).contains(&damage)
    }

    /// Rolls a value uniformly inside the range.
    pub fn roll(&self, rolls: &mut RollStream<'_>) -> u32 {
        rolls.range(self.min, self.max)
    }
}

/// Offensive power of a character: `max(1, strength / 2 + dexterity / 4)`.
pub fn character_power(stats: &CoreStats) -> u32 {
    (stats.strength / 2 + stats.dexterity / 4).max(1)
}

/// Offensive power of a monster: its attack value, at least 1.
pub fn monster_power(attack: u32) -> u32 {
    attack.max(1)
}

pub fn character_damage_range(character: &Character) -> DamageRange {
    DamageRange::from_power(character_power(&character.stats))
}

pub fn monster_damage_range(monster: &Monster) -> DamageRange {
    DamageRange::from_power(monster_power(monster.attack))
}

/// Apply damage to a meter.
///
/// Returns the new current value (clamped to 0).
pub fn apply_damage(meter: &mut ResourceMeter, damage: u32) -> u32 {
    meter.drain(damage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_spans_half_of_power() {
        let range = DamageRange::from_power(18);
        assert_eq!(range, DamageRange { min: 18, max: 27 });
        assert!(range.contains(18));
        assert!(range.contains(27));
        assert!(!range.contains(28));
    }

    #[test]
    fn power_has_floor_of_one() {
        assert_eq!(character_power(&CoreStats::new(0, 0, 10)), 1);
        assert_eq!(character_power(&CoreStats::new(28, 18, 22)), 18);
        assert_eq!(monster_power(0), 1);
        assert_eq!(monster_power(7), 7);
    }
}
