//! One trip through a freshly generated dungeon.

use bridgeworld_core::{CharacterId, Difficulty, EngineError, GameEngine, Item, NotFound};
use serde::Serialize;
use tracing::{debug, info, warn};

/// What happened during one expedition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ExpeditionReport {
    pub dungeon: String,
    pub level: u32,
    pub difficulty: Difficulty,
    /// Combat exchanges fought.
    pub rounds: u32,
    pub kills: u32,
    pub deaths: u32,
    pub experience_gained: u64,
    pub levels_gained: u32,
    pub loot: Vec<Item>,
    /// False when the round budget ran out first.
    pub cleared: bool,
}

/// Enters a new dungeon at the character's level and fights until it is
/// cleared or `max_rounds` exchanges have been fought.
///
/// A dead character respawns immediately and keeps fighting.
pub fn run_expedition(
    engine: &mut GameEngine<'_>,
    hero: CharacterId,
    difficulty: Difficulty,
    max_rounds: u32,
) -> Result<ExpeditionReport, EngineError> {
    let dungeon_id = engine.enter_new_dungeon(hero, difficulty)?;
    let (dungeon, level, monsters) = engine
        .state()
        .dungeon(dungeon_id)
        .map(|dungeon| (dungeon.name.clone(), dungeon.level, dungeon.monster_count()))
        .ok_or(NotFound::Dungeon(dungeon_id))?;
    info!(dungeon = %dungeon, monsters, "Entered dungeon");

    let mut report = ExpeditionReport {
        dungeon,
        level,
        difficulty,
        rounds: 0,
        kills: 0,
        deaths: 0,
        experience_gained: 0,
        levels_gained: 0,
        loot: Vec::new(),
        cleared: false,
    };

    while report.rounds < max_rounds {
        let Some(target) = engine.next_target(hero)? else {
            report.cleared = true;
            break;
        };

        let result = engine.combat(hero, target)?;
        report.rounds += 1;
        debug!(
            monster = %target,
            dealt = result.character_damage,
            taken = result.monster_damage,
            "Exchange"
        );

        if result.monster_killed {
            report.kills += 1;
            report.experience_gained += result.experience_gained;
            info!(
                monster = %target,
                experience = result.experience_gained,
                "Monster slain"
            );
        }
        if result.levels_gained > 0 {
            report.levels_gained += result.levels_gained;
            let level = engine.state().character(hero).map_or(0, |hero| hero.level);
            info!(level, "Level up");
        }
        if let Some(item) = result.loot {
            info!(item = %item.name, kind = %item.kind, "Loot dropped");
            report.loot.push(item);
        }
        if result.character_died {
            report.deaths += 1;
            info!("Character died, respawning");
            engine.respawn(hero)?;
        }
    }

    if !report.cleared {
        // The last exchange may have emptied the dungeon.
        report.cleared = engine.next_target(hero)?.is_none();
    }
    if !report.cleared {
        warn!(rounds = report.rounds, "Round budget exhausted");
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridgeworld_core::{
        Bestiary, CharacterClass, GameConfig, GameEnv, GameState, LootTable, PcgRng,
    };

    #[test]
    fn expedition_clears_a_level_one_dungeon() {
        let config = GameConfig::default();
        let (bestiary, loot) = (Bestiary::standard(), LootTable::standard());
        let env = GameEnv::new(&config, &PcgRng, &bestiary, &loot);
        let mut state = GameState::new(21);
        let mut engine = GameEngine::new(&mut state, env);
        let hero = engine.create_character("Aria", CharacterClass::Legion).id;

        let report =
            run_expedition(&mut engine, hero, Difficulty::Normal, 1_000).expect("expedition runs");

        assert!(report.cleared);
        assert_eq!(report.level, 1);
        assert!(report.kills >= 3);
        assert!(report.rounds >= report.kills);

        let hero = engine.state().character(hero).expect("hero exists");
        assert_eq!(hero.experience, report.experience_gained);
        assert_eq!(hero.inventory, report.loot);
    }

    #[test]
    fn unknown_character_cannot_set_out() {
        let config = GameConfig::default();
        let (bestiary, loot) = (Bestiary::standard(), LootTable::standard());
        let env = GameEnv::new(&config, &PcgRng, &bestiary, &loot);
        let mut state = GameState::new(23);
        let mut engine = GameEngine::new(&mut state, env);
        let ghost = CharacterId(7);

        assert_eq!(
            run_expedition(&mut engine, ghost, Difficulty::Normal, 10),
            Err(EngineError::NotFound(NotFound::Character(ghost)))
        );
        assert_eq!(engine.state().dungeons().count(), 0);
    }

    #[test]
    fn round_budget_stops_the_expedition() {
        let config = GameConfig::default();
        let bestiary = Bestiary::new(vec![bridgeworld_core::MonsterTemplate::new(
            "Stone Golem",
            100_000,
            1,
            1,
        )]);
        let loot = LootTable::standard();
        let env = GameEnv::new(&config, &PcgRng, &bestiary, &loot);
        let mut state = GameState::new(22);
        let mut engine = GameEngine::new(&mut state, env);
        let hero = engine.create_character("Aria", CharacterClass::Fighter).id;

        let report =
            run_expedition(&mut engine, hero, Difficulty::Normal, 5).expect("expedition runs");

        assert!(!report.cleared);
        assert_eq!(report.rounds, 5);
        assert_eq!(report.kills, 0);
    }
}
