//! Monster templates and oracle interface.
//!
//! Templates hold level-1, normal-difficulty values. The
//! [`crate::DungeonGenerator`] scales them to the dungeon being built.

/// Unscaled description of a monster kind.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterTemplate {
    pub name: String,
    pub health: u32,
    pub attack: u32,
    pub experience: u32,
}

impl MonsterTemplate {
    pub fn new(name: impl Into<String>, health: u32, attack: u32, experience: u32) -> Self {
        Self {
            name: name.into(),
            health,
            attack,
            experience,
        }
    }
}

/// Oracle providing the monster kinds a dungeon can be populated with.
pub trait BestiaryOracle: Send + Sync {
    /// All templates, in a stable order (template picks index into it).
    fn templates(&self) -> &[MonsterTemplate];
}

/// In-memory bestiary.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bestiary {
    pub monsters: Vec<MonsterTemplate>,
}

impl Bestiary {
    pub fn new(monsters: Vec<MonsterTemplate>) -> Self {
        Self { monsters }
    }

    /// Built-in monster roster.
    pub fn standard() -> Self {
        Self::new(vec![
            MonsterTemplate::new("Cave Rat", 15, 3, 8),
            MonsterTemplate::new("Ghoul", 20, 3, 10),
            MonsterTemplate::new("Skeleton", 28, 5, 14),
            MonsterTemplate::new("Bog Spider", 24, 6, 15),
            MonsterTemplate::new("Zombie", 35, 4, 16),
            MonsterTemplate::new("Dark Stalker", 40, 6, 22),
        ])
    }
}

impl BestiaryOracle for Bestiary {
    fn templates(&self) -> &[MonsterTemplate] {
        &self.monsters
    }
}
