//! Error types for placements, move sources and the game engine.

/// Why a column was refused. Neither case is fatal: the engine asks the same
/// player again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {} is out of range", .0 + 1)]
    OutOfRangeColumn(usize),

    #[error("column {} is already full", .0 + 1)]
    ColumnFull(usize),
}

/// A move source that can no longer supply a column.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("input closed before a column was chosen")]
    InputClosed,

    #[error("no column can take a token")]
    NoLegalColumn,

    #[error("I/O error")]
    Io(#[from] std::io::Error),
}

/// Errors that stop [`GameEngine::step`](crate::engine::GameEngine::step).
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("the game is already over")]
    GameOver,

    #[error("move source failed")]
    Source(#[from] SourceError),
}
