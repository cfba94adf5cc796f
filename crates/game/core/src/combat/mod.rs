//! Combat resolution system.
//!
//! Pure functions over a character, a monster and a roll stream. The engine
//! looks the combatants up, calls [`resolve_exchange`], then applies rewards.
//!
//! # Core Functions
//!
//! - `resolve_exchange`: one simultaneous attack and counterattack
//! - `character_damage_range` / `monster_damage_range`: documented damage bounds
//! - `apply_damage`: life/health reduction (clamped to 0)

pub mod damage;
pub mod result;

pub use damage::{
    DamageRange, apply_damage, character_damage_range, character_power, monster_damage_range,
    monster_power,
};
pub use result::{CombatResult, resolve_exchange};
