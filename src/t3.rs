//! Tic-Tac-Total game implementation

pub mod board;
pub mod game;
pub mod lines;
pub mod tree;

pub use board::{
    BoardState, DEFAULT_SIZE, DEFAULT_TARGET, EVEN_NUMBERS, ODD_NUMBERS, Player,
};
pub use game::{Game, GameOutcome, MoveRecord};
pub use lines::LineAnalyzer;
pub use tree::{DepthStats, TreeStats, explore};
