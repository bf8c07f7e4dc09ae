//! Playing agents for the game loop

use rand::{SeedableRng, prelude::IndexedRandom, rngs::StdRng};

use crate::{
    engine::{self, Action, GameState},
    t3::BoardState,
};

/// A move supplier for one seat at the table
pub trait Agent {
    /// Short name used in CLI output
    fn name(&self) -> &str;

    /// Pick a placement for the player on turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the position offers no placements.
    fn select(&mut self, board: &BoardState) -> crate::Result<Action>;
}

/// Agent backed by the exhaustive search engine.
///
/// When the selector reports its degenerate fallback (a placement that is
/// not legal on the current board), the agent substitutes the first
/// canonical transition so a game can always proceed.
#[derive(Debug, Default)]
pub struct EngineAgent;

impl Agent for EngineAgent {
    fn name(&self) -> &str {
        "engine"
    }

    fn select(&mut self, board: &BoardState) -> crate::Result<Action> {
        let chosen = engine::choose(board);
        if board.is_legal(&chosen) {
            return Ok(chosen);
        }
        board
            .transitions()
            .into_iter()
            .map(|(action, _)| action)
            .next()
            .ok_or_else(|| crate::Error::NoAvailableMoves {
                board: board.encode(),
            })
    }
}

/// Agent that places uniformly at random among the legal placements
#[derive(Debug)]
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    /// Create a random agent, seeded for reproducibility when a seed is
    /// given
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(value) => StdRng::seed_from_u64(value),
            None => StdRng::seed_from_u64(rand::random::<u64>()),
        };
        RandomAgent { rng }
    }
}

impl Agent for RandomAgent {
    fn name(&self) -> &str {
        "random"
    }

    fn select(&mut self, board: &BoardState) -> crate::Result<Action> {
        let actions: Vec<Action> = board
            .transitions()
            .into_iter()
            .map(|(action, _)| action)
            .collect();
        actions
            .choose(&mut self.rng)
            .copied()
            .ok_or_else(|| crate::Error::NoAvailableMoves {
                board: board.encode(),
            })
    }
}

/// Build an agent from its CLI token
pub fn from_token(token: &str, seed: Option<u64>) -> crate::Result<Box<dyn Agent>> {
    match token {
        "engine" => Ok(Box::new(EngineAgent)),
        "random" => Ok(Box::new(RandomAgent::new(seed))),
        _ => Err(crate::Error::UnknownAgent {
            token: token.to_string(),
            expected: "engine, random".to_string(),
        }),
    }
}
