//! Session assembly: content, engine and the expedition loop.

use std::fmt;

use anyhow::Result;
use bridgeworld_content::ContentBundle;
use bridgeworld_core::{Character, GameEngine, GameEnv, GameError, GameState, PcgRng};
use serde::Serialize;
use tracing::{info, warn};

use crate::config::ClientConfig;
use crate::expedition::{ExpeditionReport, run_expedition};

/// Outcome of a whole session, printed by the binary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SessionReport {
    pub seed: u64,
    pub character: Character,
    pub expeditions: Vec<ExpeditionReport>,
}

/// Plays `config.expeditions` expeditions with a fresh character.
pub fn run_session(config: &ClientConfig, content: &ContentBundle, seed: u64) -> Result<SessionReport> {
    content.config.validate()?;

    let env = GameEnv::new(&content.config, &PcgRng, &content.bestiary, &content.loot);
    let mut state = GameState::new(seed);
    let mut engine = GameEngine::new(&mut state, env);

    let hero = engine.create_character(&config.character_name, config.class);
    let hero_id = hero.id;
    info!(seed, name = %hero.name, class = %hero.class, "Session started");

    let mut expeditions = Vec::with_capacity(config.expeditions as usize);
    for number in 1..=config.expeditions {
        let report = run_expedition(&mut engine, hero_id, config.difficulty, config.max_rounds)
            .inspect_err(|error| {
                warn!(
                    expedition = number,
                    severity = error.severity().as_str(),
                    code = error.error_code(),
                    %error,
                    "Expedition aborted"
                );
            })?;
        info!(
            expedition = number,
            kills = report.kills,
            deaths = report.deaths,
            cleared = report.cleared,
            "Expedition finished"
        );
        expeditions.push(report);
    }

    let character = engine
        .state()
        .character(hero_id)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("character {hero_id} vanished from the session"))?;

    Ok(SessionReport {
        seed,
        character,
        expeditions,
    })
}

impl fmt::Display for SessionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hero = &self.character;
        writeln!(f, "Session seed {}", self.seed)?;
        writeln!(
            f,
            "{} the {} | level {} | {} exp | life {}/{} | mana {}/{}",
            hero.name,
            hero.class,
            hero.level,
            hero.experience,
            hero.life.current,
            hero.life.maximum,
            hero.mana.current,
            hero.mana.maximum,
        )?;
        writeln!(
            f,
            "STR {} DEX {} VIT {}",
            hero.stats.strength, hero.stats.dexterity, hero.stats.vitality
        )?;

        for (number, expedition) in self.expeditions.iter().enumerate() {
            writeln!(
                f,
                "#{} {}: {} kills, {} deaths, {} exp, {} levels in {} rounds{}",
                number + 1,
                expedition.dungeon,
                expedition.kills,
                expedition.deaths,
                expedition.experience_gained,
                expedition.levels_gained,
                expedition.rounds,
                if expedition.cleared { "" } else { " (unfinished)" },
            )?;
        }

        if hero.inventory.is_empty() {
            write!(f, "Inventory: empty")
        } else {
            let items: Vec<String> = hero
                .inventory
                .iter()
                .map(|item| format!("{} ({})", item.name, item.kind))
                .collect();
            write!(f, "Inventory: {}", items.join(", "))
        }
    }
}
