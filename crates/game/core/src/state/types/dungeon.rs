//! Dungeons, their areas and the monsters inside them.

use std::str::FromStr;

use strum::{Display, EnumIter, EnumString};

use super::{DungeonId, MonsterId, ResourceMeter};
use crate::engine::ArgumentError;

/// Difficulty tier of a dungeon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Difficulty {
    Normal,
    Nightmare,
    Hell,
}

impl Difficulty {
    pub fn parse(name: &str) -> Result<Self, ArgumentError> {
        Self::from_str(name.trim()).map_err(|_| ArgumentError::UnknownDifficulty(name.to_owned()))
    }

    /// Zero-based rank; each tier adds one area and widens monster counts.
    pub const fn tier(self) -> u32 {
        match self {
            Self::Normal => 0,
            Self::Nightmare => 1,
            Self::Hell => 2,
        }
    }

    /// Multiplier applied to monster health, attack and experience.
    pub const fn scaling_percent(self) -> u32 {
        match self {
            Self::Normal => 100,
            Self::Nightmare => 150,
            Self::Hell => 200,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Monster {
    pub id: MonsterId,
    pub name: String,
    pub health: ResourceMeter,
    pub attack: u32,
    /// Experience granted to the character that kills it.
    pub experience: u32,
}

impl Monster {
    pub fn is_dead(&self) -> bool {
        self.health.is_depleted()
    }
}

/// Sub-region of a dungeon. Monsters are fought front to back.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Area {
    pub name: String,
    pub monsters: Vec<Monster>,
}

impl Area {
    pub fn new(name: impl Into<String>, monsters: Vec<Monster>) -> Self {
        Self {
            name: name.into(),
            monsters,
        }
    }

    pub fn monster(&self, id: MonsterId) -> Option<&Monster> {
        self.monsters.iter().find(|monster| monster.id == id)
    }

    pub fn monster_mut(&mut self, id: MonsterId) -> Option<&mut Monster> {
        self.monsters.iter_mut().find(|monster| monster.id == id)
    }

    /// Removes a monster by id, keeping the order of the others.
    pub fn remove_monster(&mut self, id: MonsterId) -> Option<Monster> {
        let index = self.monsters.iter().position(|monster| monster.id == id)?;
        Some(self.monsters.remove(index))
    }

    pub fn is_cleared(&self) -> bool {
        self.monsters.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dungeon {
    pub id: DungeonId,
    pub name: String,
    pub level: u32,
    pub difficulty: Difficulty,
    pub areas: Vec<Area>,
}

impl Dungeon {
    /// Display name derived from level and difficulty.
    pub fn name_for(level: u32, difficulty: Difficulty) -> String {
        format!("Level {level} Dungeon ({difficulty})")
    }

    pub fn monster(&self, id: MonsterId) -> Option<&Monster> {
        self.areas.iter().find_map(|area| area.monster(id))
    }

    pub fn monster_mut(&mut self, id: MonsterId) -> Option<&mut Monster> {
        self.areas.iter_mut().find_map(|area| area.monster_mut(id))
    }

    pub fn remove_monster(&mut self, id: MonsterId) -> Option<Monster> {
        self.areas
            .iter_mut()
            .find_map(|area| area.remove_monster(id))
    }

    /// First monster of the first area that still has monsters.
    pub fn next_monster(&self) -> Option<&Monster> {
        self.areas.iter().find_map(|area| area.monsters.first())
    }

    pub fn monsters(&self) -> impl Iterator<Item = &Monster> {
        self.areas.iter().flat_map(|area| area.monsters.iter())
    }

    pub fn monster_count(&self) -> usize {
        self.areas.iter().map(|area| area.monsters.len()).sum()
    }

    pub fn is_cleared(&self) -> bool {
        self.areas.iter().all(Area::is_cleared)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monster(id: u32) -> Monster {
        Monster {
            id: MonsterId(id),
            name: format!("Ghoul {id}"),
            health: ResourceMeter::full(10),
            attack: 2,
            experience: 5,
        }
    }

    fn dungeon() -> Dungeon {
        Dungeon {
            id: DungeonId(0),
            name: Dungeon::name_for(1, Difficulty::Normal),
            level: 1,
            difficulty: Difficulty::Normal,
            areas: vec![
                Area::new("Area 1", vec![monster(1), monster(2)]),
                Area::new("Area 2", vec![monster(3)]),
            ],
        }
    }

    #[test]
    fn name_mentions_level_and_difficulty() {
        assert_eq!(
            Dungeon::name_for(4, Difficulty::Nightmare),
            "Level 4 Dungeon (nightmare)"
        );
    }

    #[test]
    fn removal_by_id_preserves_order() {
        let mut dungeon = dungeon();

        let removed = dungeon.remove_monster(MonsterId(2));
        assert_eq!(removed.map(|monster| monster.id), Some(MonsterId(2)));
        assert!(dungeon.remove_monster(MonsterId(2)).is_none());

        let order: Vec<MonsterId> = dungeon.monsters().map(|monster| monster.id).collect();
        assert_eq!(order, vec![MonsterId(1), MonsterId(3)]);
    }

    #[test]
    fn next_monster_skips_cleared_areas() {
        let mut dungeon = dungeon();
        assert_eq!(dungeon.next_monster().map(|m| m.id), Some(MonsterId(1)));

        dungeon.remove_monster(MonsterId(1));
        dungeon.remove_monster(MonsterId(2));
        assert_eq!(dungeon.next_monster().map(|m| m.id), Some(MonsterId(3)));
        assert!(!dungeon.is_cleared());

        dungeon.remove_monster(MonsterId(3));
        assert!(dungeon.next_monster().is_none());
        assert!(dungeon.is_cleared());
        assert_eq!(dungeon.monster_count(), 0);
    }

    #[test]
    fn difficulty_parses_and_orders() {
        assert_eq!(Difficulty::parse("HELL"), Ok(Difficulty::Hell));
        assert_eq!(Difficulty::Nightmare.to_string(), "nightmare");
        assert!(Difficulty::parse("easy").is_err());
        assert!(Difficulty::Normal.scaling_percent() < Difficulty::Nightmare.scaling_percent());
        assert!(Difficulty::Nightmare.scaling_percent() < Difficulty::Hell.scaling_percent());
    }
}
