//! High-level game management

use serde::{Deserialize, Serialize};

use super::board::{BoardState, Player};
use crate::engine::Action;

/// A move as it was played: who placed which digit where
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub player: Player,
    pub action: Action,
}

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

/// A game in progress: the current board, the moves played so far, and the
/// outcome once one is reached
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    state: BoardState,
    moves: Vec<MoveRecord>,
    outcome: Option<GameOutcome>,
}

impl Game {
    /// Start a game with the default rules
    pub fn new() -> Self {
        Self::from_state(BoardState::new())
    }

    /// Start a game from an arbitrary position
    pub fn from_state(state: BoardState) -> Self {
        let outcome = Self::outcome_of(&state);
        Game {
            state,
            moves: Vec::new(),
            outcome,
        }
    }

    /// The current board
    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// Moves played so far
    pub fn moves(&self) -> &[MoveRecord] {
        &self.moves
    }

    /// The outcome, once the game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Play an action for the player on turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is already over or the action is not a
    /// legal placement.
    pub fn play(&mut self, action: Action) -> Result<(), crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        let player = self.state.to_move();
        let next = self.state.apply(&action)?;

        self.moves.push(MoveRecord { player, action });
        self.outcome = Self::outcome_of(&next);
        self.state = next;
        Ok(())
    }

    fn outcome_of(state: &BoardState) -> Option<GameOutcome> {
        if let Some(winner) = state.winner() {
            Some(GameOutcome::Win(winner))
        } else if state.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
