//! Session data types: identifiers, characters, dungeons, items.

mod character;
mod common;
mod dungeon;
mod item;

pub use character::{Character, CharacterClass, ClassProfile};
pub use common::{CharacterId, DungeonId, MonsterId, ResourceMeter};
pub use dungeon::{Area, Difficulty, Dungeon, Monster};
pub use item::{Item, ItemKind};
