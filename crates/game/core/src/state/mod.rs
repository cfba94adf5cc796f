//! Session state.
//!
//! [`GameState`] owns everything one play session knows about: the character
//! and dungeon registries, which dungeon each character is currently in, the
//! id counters and the RNG seed/nonce pair. It is constructed explicitly and
//! passed to [`crate::GameEngine`]; independent sessions never share state.
pub mod types;

use std::collections::BTreeMap;

pub use types::{
    Area, Character, CharacterClass, CharacterId, ClassProfile, Difficulty, Dungeon, DungeonId,
    Item, ItemKind, Monster, MonsterId, ResourceMeter,
};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    seed: u64,
    nonce: u64,
    next_character: u32,
    next_dungeon: u32,
    next_monster: u32,
    characters: BTreeMap<CharacterId, Character>,
    dungeons: BTreeMap<DungeonId, Dungeon>,
    bindings: BTreeMap<CharacterId, DungeonId>,
}

impl GameState {
    /// Empty session whose rolls derive from `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            nonce: 0,
            next_character: 1,
            next_dungeon: 1,
            next_monster: 1,
            characters: BTreeMap::new(),
            dungeons: BTreeMap::new(),
            bindings: BTreeMap::new(),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of randomized operations performed so far.
    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    pub fn character(&self, id: CharacterId) -> Option<&Character> {
        self.characters.get(&id)
    }

    pub fn character_mut(&mut self, id: CharacterId) -> Option<&mut Character> {
        self.characters.get_mut(&id)
    }

    pub fn characters(&self) -> impl Iterator<Item = &Character> {
        self.characters.values()
    }

    pub fn dungeon(&self, id: DungeonId) -> Option<&Dungeon> {
        self.dungeons.get(&id)
    }

    pub fn dungeons(&self) -> impl Iterator<Item = &Dungeon> {
        self.dungeons.values()
    }

    /// Dungeon the character is currently in, if any.
    pub fn active_dungeon(&self, character: CharacterId) -> Option<DungeonId> {
        self.bindings.get(&character).copied()
    }

    pub(crate) fn advance_nonce(&mut self) {
        self.nonce = self.nonce.wrapping_add(1);
    }

    pub(crate) fn allocate_character_id(&mut self) -> CharacterId {
        let id = CharacterId(self.next_character);
        self.next_character += 1;
        id
    }

    pub(crate) fn allocate_dungeon_id(&mut self) -> DungeonId {
        let id = DungeonId(self.next_dungeon);
        self.next_dungeon += 1;
        id
    }

    pub(crate) fn allocate_monster_id(&mut self) -> MonsterId {
        let id = MonsterId(self.next_monster);
        self.next_monster += 1;
        id
    }

    pub(crate) fn insert_character(&mut self, character: Character) -> &mut Character {
        let id = character.id;
        self.characters.entry(id).or_insert(character)
    }

    pub(crate) fn insert_dungeon(&mut self, dungeon: Dungeon) -> &mut Dungeon {
        let id = dungeon.id;
        self.dungeons.entry(id).or_insert(dungeon)
    }

    /// Binds a character to a dungeon and returns the previous binding.
    ///
    /// A previous dungeon that no character is bound to anymore is dropped
    /// from the registry.
    pub(crate) fn bind(&mut self, character: CharacterId, dungeon: DungeonId) -> Option<DungeonId> {
        let previous = self.bindings.insert(character, dungeon)?;
        if previous != dungeon && !self.bindings.values().any(|&bound| bound == previous) {
            self.dungeons.remove(&previous);
        }
        Some(previous)
    }

    /// Mutable access to a character and a dungeon at the same time.
    pub(crate) fn combatants_mut(
        &mut self,
        character: CharacterId,
        dungeon: DungeonId,
    ) -> Option<(&mut Character, &mut Dungeon)> {
        let character = self.characters.get_mut(&character)?;
        let dungeon = self.dungeons.get_mut(&dungeon)?;
        Some((character, dungeon))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_dungeon(state: &mut GameState) -> DungeonId {
        let id = state.allocate_dungeon_id();
        state.insert_dungeon(Dungeon {
            id,
            name: Dungeon::name_for(1, Difficulty::Normal),
            level: 1,
            difficulty: Difficulty::Normal,
            areas: Vec::new(),
        });
        id
    }

    #[test]
    fn ids_are_allocated_sequentially() {
        let mut state = GameState::new(0);
        assert_eq!(state.allocate_character_id(), CharacterId(1));
        assert_eq!(state.allocate_character_id(), CharacterId(2));
        assert_eq!(state.allocate_monster_id(), MonsterId(1));
    }

    #[test]
    fn rebinding_discards_orphaned_dungeon() {
        let mut state = GameState::new(0);
        let hero = CharacterId(1);
        let first = empty_dungeon(&mut state);
        let second = empty_dungeon(&mut state);

        assert_eq!(state.bind(hero, first), None);
        assert_eq!(state.bind(hero, second), Some(first));

        assert!(state.dungeon(first).is_none());
        assert!(state.dungeon(second).is_some());
        assert_eq!(state.active_dungeon(hero), Some(second));
    }

    #[test]
    fn rebinding_keeps_dungeon_shared_with_another_character() {
        let mut state = GameState::new(0);
        let first = empty_dungeon(&mut state);
        let second = empty_dungeon(&mut state);

        state.bind(CharacterId(1), first);
        state.bind(CharacterId(2), first);
        state.bind(CharacterId(1), second);

        assert!(state.dungeon(first).is_some());
    }
}
