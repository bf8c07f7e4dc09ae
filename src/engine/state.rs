//! Action descriptor and the state capability consumed by the search engine

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A single placement: target column, target row, and the digit placed.
///
/// The `utility` slot is not part of the move itself; the selector uses it to
/// carry the best-found score back to the caller. Identity (equality,
/// ordering, hashing) therefore covers only `(col, row, number)`, and the
/// ordering is the canonical enumeration order: column, then row, then
/// number.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Action {
    pub col: usize,
    pub row: usize,
    pub number: u8,
    pub utility: i32,
}

impl Action {
    /// Create an action with an empty utility slot
    pub fn new(col: usize, row: usize, number: u8) -> Self {
        Action {
            col,
            row,
            number,
            utility: 0,
        }
    }

    /// The degenerate default the selector returns when no transition
    /// strictly beats a zero utility. Number 0 is never a legal digit, so
    /// callers can recognize the fallback with [`Action::is_fallback`].
    pub fn fallback() -> Self {
        Action::new(0, 0, 0)
    }

    /// Whether this action is the selector's degenerate default
    pub fn is_fallback(&self) -> bool {
        self.number == 0
    }

    fn key(&self) -> (usize, usize, u8) {
        (self.col, self.row, self.number)
    }
}

impl PartialEq for Action {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Action {}

impl PartialOrd for Action {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Action {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl Hash for Action {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at ({}, {})", self.number, self.col, self.row)
    }
}

/// Capabilities the search engine needs from a game position.
///
/// Implementations own the rules; the engine only walks the tree they
/// describe. `transitions` must enumerate the legal `(Action, successor)`
/// pairs in ascending `(column, row, number)` order, and the order must be
/// stable across calls: the selector breaks utility ties by taking the first
/// enumerated action, so iteration order is part of this contract rather
/// than an implementation detail.
pub trait GameState: Sized {
    /// Legal transitions from this position, in canonical order. Terminal
    /// positions (won or exhausted) enumerate nothing.
    fn transitions(&self) -> Vec<(Action, Self)>;

    /// Whether the player who just moved has completed a winning line
    fn is_win(&self) -> bool;

    /// False marks a terminal leaf: a won position or one with no open cells
    fn has_remaining_moves(&self) -> bool;
}
