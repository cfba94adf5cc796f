//! Core attributes - the only stored stats of a character.
//!
//! Life and mana maxima, offensive power and level-up growth are all derived
//! from these three values (see [`super::resources`] and [`crate::combat`]).

/// The three base attributes of a character.
///
/// - **Strength**: primary contributor to melee power
/// - **Dexterity**: secondary contributor to power
/// - **Vitality**: determines maximum life
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoreStats {
    pub strength: u32,
    pub dexterity: u32,
    pub vitality: u32,
}

impl CoreStats {
    pub const fn new(strength: u32, dexterity: u32, vitality: u32) -> Self {
        Self {
            strength,
            dexterity,
            vitality,
        }
    }

    /// Adds a per-level growth vector to these stats.
    pub fn grow(&mut self, growth: &CoreStats) {
        self.strength = self.strength.saturating_add(growth.strength);
        self.dexterity = self.dexterity.saturating_add(growth.dexterity);
        self.vitality = self.vitality.saturating_add(growth.vitality);
    }
}
