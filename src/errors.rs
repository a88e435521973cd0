//! Errors used throughout the Ataxx engine.
//!
//! `AtaxxError` is the single error type returned by board mutation, the
//! search engines, the command parser and the game session. User-facing
//! conditions (illegal moves, illegal block placements, malformed commands)
//! are recoverable: the session reports them and keeps playing.

use thiserror::Error;

use crate::moves::ataxx_move::Move;

/// Unified error type for the engine.
#[derive(Debug, Error)]
pub enum AtaxxError {
    /// The move is not legal on the current board. The board is unchanged.
    #[error("Illegal move: {0}")]
    IllegalMove(Move),

    /// A blocker was requested on an occupied, blocked or off-board square.
    ///
    /// Payload: the requested square in text form.
    #[error("illegal block placement at {0}")]
    IllegalBlockPlacement(String),

    /// A square could not be parsed from text (expected `a1`..`g7`).
    #[error("invalid square '{0}'")]
    InvalidSquare(String),

    /// A command line could not be interpreted.
    #[error("Command not understood: {0}")]
    InvalidCommand(String),

    /// The command is valid but not allowed in the current session state.
    #[error("'{0}' command is not allowed now.")]
    CommandNotAllowed(String),

    /// A search was requested on a position that is already finished.
    #[error("the game is over; there is no move to choose")]
    GameOver,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result alias for engine operations.
pub type AtaxxResult<T> = Result<T, AtaxxError>;
