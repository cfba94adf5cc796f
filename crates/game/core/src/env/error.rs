//! Oracle data errors.

use crate::error::{ErrorSeverity, GameError};

/// Errors raised when oracle data cannot support an operation.
///
/// These are fatal: the engine cannot recover without different content.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// The bestiary has no templates to populate a dungeon with.
    #[error("bestiary contains no monster templates")]
    EmptyBestiary,
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            OracleError::EmptyBestiary => "ORACLE_EMPTY_BESTIARY",
        }
    }
}
