//! Stat system.
//!
//! ```text
//! [ Core Stats ]  strength / dexterity / vitality (stored)
//!      ↓
//! [ Resources ]   life / mana maxima (derived)
//!      ↓
//! [ Progression ] experience curve, level-up growth
//! ```

pub mod core;
pub mod progression;
pub mod resources;

pub use self::core::CoreStats;
pub use progression::{experience_threshold, grant_experience, level_up};
pub use resources::{BASE_LIFE, LIFE_PER_VITALITY, life_max, mana_max};
