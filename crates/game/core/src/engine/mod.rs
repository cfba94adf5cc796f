//! Session operations.
//!
//! The [`GameEngine`] is the only writer of [`GameState`]. It borrows the
//! session state together with the read-only [`GameEnv`] and exposes the
//! player-facing operations: character creation, dungeon generation and
//! entry, combat exchanges and respawn. Every operation validates its inputs
//! before touching state, and every randomized operation advances the state
//! nonce exactly once so sessions replay deterministically from their seed.

mod errors;

pub use errors::{ArgumentError, EngineError, NotFound};

use crate::combat::{CombatResult, resolve_exchange};
use crate::config::GameConfig;
use crate::dungeon::DungeonGenerator;
use crate::env::{GameEnv, LootOracle, RollStream};
use crate::state::{
    Character, CharacterClass, CharacterId, Difficulty, Dungeon, DungeonId, GameState, Item,
    MonsterId,
};
use crate::stats::grant_experience;

pub struct GameEngine<'a> {
    state: &'a mut GameState,
    env: GameEnv<'a>,
}

impl<'a> GameEngine<'a> {
    pub fn new(state: &'a mut GameState, env: GameEnv<'a>) -> Self {
        Self { state, env }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    /// Creates a level 1 character and registers it.
    pub fn create_character(&mut self, name: &str, class: CharacterClass) -> &Character {
        let id = self.state.allocate_character_id();
        self.state.insert_character(Character::new(id, name, class))
    }

    /// Same as [`Self::create_character`], with the class given by name.
    pub fn create_character_by_name(
        &mut self,
        name: &str,
        class: &str,
    ) -> Result<&Character, EngineError> {
        let class = CharacterClass::parse(class)?;
        Ok(self.create_character(name, class))
    }

    /// Generates and registers a new dungeon. Nobody is bound to it yet.
    pub fn generate_dungeon(
        &mut self,
        level: u32,
        difficulty: Difficulty,
    ) -> Result<&Dungeon, EngineError> {
        let generator = DungeonGenerator::new(self.env.config(), self.env.bestiary());
        generator.check(level)?;

        let state = &mut *self.state;
        let (seed, nonce) = (state.seed(), state.nonce());
        let id = state.allocate_dungeon_id();
        let mut rolls = RollStream::new(self.env.rng(), seed, nonce, id.0);

        let dungeon = generator.generate(id, level, difficulty, &mut rolls, || {
            state.allocate_monster_id()
        })?;

        state.advance_nonce();
        Ok(state.insert_dungeon(dungeon))
    }

    /// Binds a character to a dungeon, replacing any previous binding.
    pub fn enter_dungeon(
        &mut self,
        character: CharacterId,
        dungeon: DungeonId,
    ) -> Result<(), EngineError> {
        self.require_character(character)?;
        self.state
            .dungeon(dungeon)
            .ok_or(NotFound::Dungeon(dungeon))?;

        self.state.bind(character, dungeon);
        Ok(())
    }

    /// Generates a dungeon at the character's level and enters it.
    pub fn enter_new_dungeon(
        &mut self,
        character: CharacterId,
        difficulty: Difficulty,
    ) -> Result<DungeonId, EngineError> {
        let level = self.require_character(character)?.level;
        let dungeon = self.generate_dungeon(level, difficulty)?.id;
        self.enter_dungeon(character, dungeon)?;
        Ok(dungeon)
    }

    /// First monster of the first non-empty area of the character's dungeon.
    ///
    /// `None` once the dungeon is cleared.
    pub fn next_target(&self, character: CharacterId) -> Result<Option<MonsterId>, EngineError> {
        let dungeon = self.active_dungeon(character)?;
        Ok(dungeon.next_monster().map(|monster| monster.id))
    }

    /// Resolves one exchange between a character and a monster of the dungeon
    /// the character is in.
    ///
    /// A killed monster grants its experience, may drop loot, and is removed
    /// from its area before this returns. A character whose life reaches zero
    /// is reported through `character_died` and must [`Self::respawn`] before
    /// fighting again.
    pub fn combat(
        &mut self,
        character: CharacterId,
        monster: MonsterId,
    ) -> Result<CombatResult, EngineError> {
        if self.require_character(character)?.is_dead() {
            return Err(ArgumentError::CharacterDead(character).into());
        }
        let dungeon_id = self.active_dungeon(character)?.id;
        self.active_dungeon(character)?
            .monster(monster)
            .ok_or(NotFound::Monster(monster))?;

        let config = self.env.config();
        let loot = self.env.loot();
        let (seed, nonce) = (self.state.seed(), self.state.nonce());
        let mut rolls = RollStream::new(self.env.rng(), seed, nonce, character.0);

        let (hero, dungeon) = self
            .state
            .combatants_mut(character, dungeon_id)
            .ok_or(NotFound::Dungeon(dungeon_id))?;
        let target = dungeon
            .monster_mut(monster)
            .ok_or(NotFound::Monster(monster))?;

        let mut result = resolve_exchange(hero, target, &mut rolls);

        if result.monster_killed {
            let experience = u64::from(target.experience);
            dungeon.remove_monster(monster);

            result.experience_gained = experience;
            result.levels_gained = grant_experience(hero, experience, config);
            result.loot = roll_loot(loot, config, &mut rolls);
            if let Some(item) = &result.loot {
                hero.inventory.push(item.clone());
            }
        }

        self.state.advance_nonce();
        Ok(result)
    }

    /// Restores a dead character's life from its current vitality.
    pub fn respawn(&mut self, character: CharacterId) -> Result<&Character, EngineError> {
        let hero = self
            .state
            .character_mut(character)
            .ok_or(NotFound::Character(character))?;
        if !hero.is_dead() {
            return Err(ArgumentError::CharacterAlive(character).into());
        }

        hero.respawn();
        Ok(hero)
    }

    fn require_character(&self, character: CharacterId) -> Result<&Character, EngineError> {
        Ok(self
            .state
            .character(character)
            .ok_or(NotFound::Character(character))?)
    }

    fn active_dungeon(&self, character: CharacterId) -> Result<&Dungeon, EngineError> {
        self.require_character(character)?;
        let dungeon = self
            .state
            .active_dungeon(character)
            .ok_or(NotFound::ActiveDungeon(character))?;
        Ok(self
            .state
            .dungeon(dungeon)
            .ok_or(NotFound::Dungeon(dungeon))?)
    }
}

/// Rolls the drop chance and, on success, picks one item uniformly.
fn roll_loot(
    loot: &dyn LootOracle,
    config: &GameConfig,
    rolls: &mut RollStream<'_>,
) -> Option<Item> {
    let items = loot.items();
    if items.is_empty() || !rolls.chance(config.loot_drop_percent) {
        return None;
    }
    Some(items[rolls.index(items.len())].clone())
}
