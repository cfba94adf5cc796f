//! Resource maxima derived from core stats.
//!
//! Formulas:
//! - Life_max = Vitality × 2 + 20
//! - Mana_max = class base mana + (Level - 1) × class mana growth
//!
//! Maxima are recomputed on level-up; current values are game state and are
//! never refilled by the recomputation.

use crate::state::ClassProfile;

/// Life granted per point of vitality.
pub const LIFE_PER_VITALITY: u32 = 2;

/// Flat life every character has regardless of vitality.
pub const BASE_LIFE: u32 = 20;

/// Maximum life for the given vitality. Also the life restored on respawn.
pub fn life_max(vitality: u32) -> u32 {
    vitality
        .saturating_mul(LIFE_PER_VITALITY)
        .saturating_add(BASE_LIFE)
}

/// Maximum mana for a class at the given level.
pub fn mana_max(profile: &ClassProfile, level: u32) -> u32 {
    let levels_gained = level.saturating_sub(1);
    profile
        .base_mana
        .saturating_add(levels_gained.saturating_mul(profile.mana_growth))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::CharacterClass;

    #[test]
    fn life_follows_vitality() {
        assert_eq!(life_max(0), 20);
        assert_eq!(life_max(22), 64);
    }

    #[test]
    fn mana_grows_per_level() {
        let profile = CharacterClass::Spellcaster.profile();
        assert_eq!(mana_max(&profile, 1), 40);
        assert_eq!(mana_max(&profile, 3), 48);
    }
}
