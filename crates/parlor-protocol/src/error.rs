//! Error types for the protocol layer.

use crate::GameStage;

/// Errors raised by event tag parsing and stage transitions.
#[derive(Debug, thiserror::Error)]
pub enum EventError {
    /// A stage transition was requested on a plain chat event.
    #[error("not a game event")]
    NotAGame,

    /// The requested stage transition is not legal from the current stage.
    /// For example, resulting a game that was never started.
    #[error("cannot move stage {from} to {to}")]
    WrongStage { from: GameStage, to: GameStage },

    /// A type tag string that doesn't name any known event kind.
    #[error("unknown event tag: {0}")]
    UnknownTag(String),
}
