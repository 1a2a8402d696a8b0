//! Error types for the oxo crate

use thiserror::Error;

/// Main error type for the oxo crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("position {position} is out of bounds (must be 0-8)")]
    PositionOutOfRange { position: usize },

    #[error("cell at position {position} is already occupied")]
    CellOccupied { position: usize },

    #[error("invalid board size: expected {expected} cells, got {got}")]
    InvalidBoardSize { expected: usize, got: usize },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid player suffix '{suffix}' in '{context}' (expected 'X' or 'O')")]
    InvalidPlayerSuffix { suffix: String, context: String },

    #[error("game already over")]
    GameOver,
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
