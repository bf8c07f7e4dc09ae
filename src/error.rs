//! Error types for the tictactotal crate

use thiserror::Error;

/// Main error type for the tictactotal crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("cell ({col}, {row}) is outside the {size}x{size} board")]
    OutOfBounds { col: usize, row: usize, size: usize },

    #[error("cell ({col}, {row}) is already occupied")]
    OccupiedCell { col: usize, row: usize },

    #[error("number {number} is not in the {mover} set")]
    UnavailableNumber { number: u8, mover: String },

    #[error("game already over")]
    GameOver,

    #[error("board string '{context}' has {got} cells, which is not the square of a side length of at least 2")]
    InvalidBoardLength { got: usize, context: String },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid digit counts: odd={odd_count}, even={even_count} (must be equal or odd ahead by 1)")]
    InvalidParityCounts { odd_count: usize, even_count: usize },

    #[error("invalid mover '{mover}' in '{context}' (expected 'O' for odds or 'E' for evens)")]
    InvalidMoverString { mover: String, context: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("no placements available from board '{board}'")]
    NoAvailableMoves { board: String },

    #[error("unknown agent '{token}'. Expected one of: {expected}")]
    UnknownAgent { token: String, expected: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
