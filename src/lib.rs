//! Tic-Tac-Total decision engine
//!
//! This crate provides:
//! - An exhaustive minimax move selector with alpha-beta bounds, written
//!   against an abstract game-state capability
//! - A complete Tic-Tac-Total board model with validation and a string codec
//! - Playing agents and a CLI for choosing moves, self-play, and game-tree
//!   analysis

pub mod agents;
pub mod cli;
pub mod engine;
pub mod error;
pub mod export;
pub mod t3;

pub use engine::{Action, GameState, UTILITY_MAX, UTILITY_MIN, alphabeta, choose};
pub use error::{Error, Result};
pub use t3::{BoardState, Game, GameOutcome, Player};
