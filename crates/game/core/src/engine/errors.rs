//! Error types surfaced by [`super::GameEngine`] operations.

use crate::env::OracleError;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{CharacterId, DungeonId, MonsterId};

/// Input the engine refuses to act on.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArgumentError {
    #[error("unknown character class '{0}'")]
    UnknownClass(String),

    #[error("unknown difficulty '{0}'")]
    UnknownDifficulty(String),

    #[error("dungeon level {level} is outside 1..={max}")]
    InvalidLevel { level: u32, max: u32 },

    #[error("character {0} is dead and must respawn first")]
    CharacterDead(CharacterId),

    #[error("character {0} is alive and cannot respawn")]
    CharacterAlive(CharacterId),
}

/// Entity an operation referenced but could not find.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NotFound {
    #[error("character {0}")]
    Character(CharacterId),

    #[error("dungeon {0}")]
    Dungeon(DungeonId),

    #[error("monster {0}")]
    Monster(MonsterId),

    #[error("active dungeon of character {0}")]
    ActiveDungeon(CharacterId),
}

/// Errors surfaced while executing an engine operation.
///
/// Every operation validates before mutating, so an error means the state
/// is unchanged.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EngineError {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] ArgumentError),

    #[error("{0} not found")]
    NotFound(#[from] NotFound),

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl GameError for EngineError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            EngineError::InvalidArgument(
                ArgumentError::CharacterDead(_) | ArgumentError::CharacterAlive(_),
            ) => ErrorSeverity::Recoverable,
            EngineError::InvalidArgument(_) | EngineError::NotFound(_) => {
                ErrorSeverity::Validation
            }
            EngineError::Oracle(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            EngineError::InvalidArgument(error) => match error {
                ArgumentError::UnknownClass(_) => "ENGINE_UNKNOWN_CLASS",
                ArgumentError::UnknownDifficulty(_) => "ENGINE_UNKNOWN_DIFFICULTY",
                ArgumentError::InvalidLevel { .. } => "ENGINE_INVALID_LEVEL",
                ArgumentError::CharacterDead(_) => "ENGINE_CHARACTER_DEAD",
                ArgumentError::CharacterAlive(_) => "ENGINE_CHARACTER_ALIVE",
            },
            EngineError::NotFound(target) => match target {
                NotFound::Character(_) => "ENGINE_CHARACTER_NOT_FOUND",
                NotFound::Dungeon(_) => "ENGINE_DUNGEON_NOT_FOUND",
                NotFound::Monster(_) => "ENGINE_MONSTER_NOT_FOUND",
                NotFound::ActiveDungeon(_) => "ENGINE_NOT_IN_DUNGEON",
            },
            EngineError::Oracle(error) => error.error_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_missing_entity() {
        let error = EngineError::from(NotFound::Monster(MonsterId(4)));
        assert_eq!(error.to_string(), "monster #4 not found");
        assert_eq!(error.error_code(), "ENGINE_MONSTER_NOT_FOUND");
    }

    #[test]
    fn dead_character_is_recoverable() {
        let error = EngineError::from(ArgumentError::CharacterDead(CharacterId(1)));
        assert!(error.severity().is_recoverable());

        let error = EngineError::from(ArgumentError::UnknownClass("Bard".to_owned()));
        assert_eq!(error.severity(), ErrorSeverity::Validation);
    }

    #[test]
    fn oracle_errors_are_fatal() {
        let error = EngineError::from(OracleError::EmptyBestiary);
        assert!(error.severity().is_fatal());
        assert_eq!(error.severity().as_str(), "fatal");
        assert_eq!(error.error_code(), "ORACLE_EMPTY_BESTIARY");
    }
}
