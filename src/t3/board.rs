//! Board state representation and move application for Tic-Tac-Total

use std::fmt;

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;
use crate::engine::{Action, GameState};

/// Default board side length
pub const DEFAULT_SIZE: usize = 3;

/// Default line total required to win
pub const DEFAULT_TARGET: u32 = 13;

/// Digits available to the odd-parity player
pub const ODD_NUMBERS: [u8; 3] = [1, 3, 5];

/// Digits available to the even-parity player
pub const EVEN_NUMBERS: [u8; 3] = [2, 4, 6];

/// A player in the game, identified by the parity of the digits they place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Odds,
    Evens,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::Odds => Player::Evens,
            Player::Evens => Player::Odds,
        }
    }

    /// The digits this player may place. Digits are reusable; placing one
    /// does not consume it.
    pub fn numbers(self) -> &'static [u8] {
        match self {
            Player::Odds => &ODD_NUMBERS,
            Player::Evens => &EVEN_NUMBERS,
        }
    }

    /// One-character token used in board strings
    pub fn token(self) -> char {
        match self {
            Player::Odds => 'O',
            Player::Evens => 'E',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Odds => write!(f, "Odds"),
            Player::Evens => write!(f, "Evens"),
        }
    }
}

/// Count of placed digits by parity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ParityCount {
    odd: usize,
    even: usize,
}

/// Complete board state: the grid, the win target, and whose turn it is.
///
/// States are immutable values; [`BoardState::make_move`] returns a new
/// state. The grid is stored row-major, one `Option<u8>` per cell, with
/// `None` marking an open cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    size: usize,
    target: u32,
    cells: Vec<Option<u8>>,
    to_move: Player,
}

impl BoardState {
    /// Create an empty board with the default rules (3x3, line total 13).
    /// Odds moves first.
    pub fn new() -> Self {
        BoardState {
            size: DEFAULT_SIZE,
            target: DEFAULT_TARGET,
            cells: vec![None; DEFAULT_SIZE * DEFAULT_SIZE],
            to_move: Player::Odds,
        }
    }

    /// Create an empty board with a custom side length and win target.
    ///
    /// # Errors
    ///
    /// Returns an error if the side length is smaller than 2 or the target
    /// is zero.
    pub fn with_rules(size: usize, target: u32) -> Result<Self, crate::Error> {
        if size < 2 {
            return Err(crate::Error::InvalidConfiguration {
                message: format!("side length {size} is too small (must be at least 2)"),
            });
        }
        if target == 0 {
            return Err(crate::Error::InvalidConfiguration {
                message: "win target must be positive".to_string(),
            });
        }
        Ok(BoardState {
            size,
            target,
            cells: vec![None; size * size],
            to_move: Player::Odds,
        })
    }

    /// Create a board from a string representation with the default target.
    ///
    /// The string holds one character per cell in row-major order (`.` for
    /// an open cell, `1`-`6` for a placed digit); whitespace is filtered
    /// out. The side length is inferred from the cell count. An optional
    /// suffix `_O` or `_E` names the player to move; when omitted, the mover
    /// is inferred from the digit-parity counts (Odds moves first, so the
    /// counts determine the turn).
    ///
    /// # Errors
    ///
    /// Returns an error if the cell count is not a square of a side length
    /// of at least 2, a character is not a cell representation, the parity
    /// counts are impossible under odds-first play, or a provided suffix
    /// conflicts with the counts.
    ///
    /// # Examples
    ///
    /// ```
    /// use tictactotal::{BoardState, Player};
    ///
    /// let board = BoardState::from_string("53..4...2_O").unwrap();
    /// assert_eq!(board.to_move(), Player::Odds);
    /// assert_eq!(board.cell(0, 0), Some(5));
    /// assert_eq!(board.cell(2, 2), Some(2));
    /// ```
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        Self::from_string_with_target(s, DEFAULT_TARGET)
    }

    /// Create a board from a string representation with an explicit target.
    ///
    /// # Errors
    ///
    /// See [`BoardState::from_string`].
    pub fn from_string_with_target(s: &str, target: u32) -> Result<Self, crate::Error> {
        let cleaned: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        let (board_part, specified_mover) = Self::split_board_and_mover(&cleaned, s)?;

        let len = board_part.chars().count();
        let size = len.isqrt();
        if size < 2 || size * size != len {
            return Err(crate::Error::InvalidBoardLength {
                got: len,
                context: s.to_string(),
            });
        }

        let cells = Self::parse_cells(board_part, s)?;
        let count = Self::count_parities(&cells);
        let inferred = Self::determine_turn_from_counts(&count)?;

        let to_move = match specified_mover {
            Some(mover) if mover != inferred => {
                return Err(crate::Error::InvalidConfiguration {
                    message: format!(
                        "digit counts (odd={}, even={}) put {} on turn, but '{}' names {}",
                        count.odd, count.even, inferred, s, mover
                    ),
                });
            }
            Some(mover) => mover,
            None => inferred,
        };

        let mut board = Self::with_rules(size, target)?;
        board.cells = cells;
        board.to_move = to_move;
        Ok(board)
    }

    fn split_board_and_mover<'a>(
        cleaned: &'a str,
        context: &str,
    ) -> Result<(&'a str, Option<Player>), crate::Error> {
        match cleaned.find('_') {
            Some(idx) => {
                let board = &cleaned[..idx];
                let mover = match &cleaned[idx + 1..] {
                    "O" | "o" => Player::Odds,
                    "E" | "e" => Player::Evens,
                    other => {
                        return Err(crate::Error::InvalidMoverString {
                            mover: other.to_string(),
                            context: context.to_string(),
                        });
                    }
                };
                Ok((board, Some(mover)))
            }
            None => Ok((cleaned, None)),
        }
    }

    fn parse_cells(board_part: &str, context: &str) -> Result<Vec<Option<u8>>, crate::Error> {
        board_part
            .chars()
            .enumerate()
            .map(|(position, c)| match c {
                '.' => Ok(None),
                '1'..='6' => Ok(Some(c as u8 - b'0')),
                _ => Err(crate::Error::InvalidCellCharacter {
                    character: c,
                    position,
                    context: context.to_string(),
                }),
            })
            .collect()
    }

    fn count_parities(cells: &[Option<u8>]) -> ParityCount {
        let mut count = ParityCount { odd: 0, even: 0 };
        for digit in cells.iter().flatten() {
            if digit % 2 == 1 {
                count.odd += 1;
            } else {
                count.even += 1;
            }
        }
        count
    }

    fn determine_turn_from_counts(count: &ParityCount) -> Result<Player, crate::Error> {
        if count.odd == count.even {
            Ok(Player::Odds)
        } else if count.odd == count.even + 1 {
            Ok(Player::Evens)
        } else {
            Err(crate::Error::InvalidParityCounts {
                odd_count: count.odd,
                even_count: count.even,
            })
        }
    }

    /// Board side length
    pub fn size(&self) -> usize {
        self.size
    }

    /// Line total required to win
    pub fn target(&self) -> u32 {
        self.target
    }

    /// The player to move
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// The digit at `(col, row)`, or `None` for an open cell.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the board.
    pub fn cell(&self, col: usize, row: usize) -> Option<u8> {
        self.cells[self.index(col, row)]
    }

    fn index(&self, col: usize, row: usize) -> usize {
        row * self.size + col
    }

    /// Number of placed digits
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Whether every cell holds a digit
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Open cells in canonical order: column ascending, then row ascending
    pub fn open_cells(&self) -> Vec<(usize, usize)> {
        let mut open = Vec::with_capacity(self.cells.len());
        for col in 0..self.size {
            for row in 0..self.size {
                if self.cells[self.index(col, row)].is_none() {
                    open.push((col, row));
                }
            }
        }
        open
    }

    fn analyzer(&self) -> LineAnalyzer {
        LineAnalyzer::new(self.size, self.target)
    }

    /// Whether the player who just moved has completed a line at the target
    /// sum
    pub fn is_win(&self) -> bool {
        self.analyzer().has_win(&self.cells)
    }

    /// The winner, if this state is a win. Lines mix both players' digits,
    /// so the win belongs to whoever placed the digit that completed it;
    /// play stops at a win, which makes that the opponent of the player now
    /// on turn.
    pub fn winner(&self) -> Option<Player> {
        if self.is_win() {
            Some(self.to_move.opponent())
        } else {
            None
        }
    }

    /// Whether this state is a leaf of the game: won, or full without a win
    pub fn is_terminal(&self) -> bool {
        self.is_win() || self.is_full()
    }

    /// Whether any legal placement remains. Won states report `false` even
    /// when open cells remain: the game is over.
    pub fn has_remaining_moves(&self) -> bool {
        !self.is_terminal()
    }

    /// Whether `action` is a placement the mover could make right now
    pub fn is_legal(&self, action: &Action) -> bool {
        !self.is_terminal()
            && action.col < self.size
            && action.row < self.size
            && self.cell(action.col, action.row).is_none()
            && self.to_move.numbers().contains(&action.number)
    }

    /// Place `number` at `(col, row)` and return the resulting state.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is already over, the coordinates are
    /// outside the board, the cell is occupied, or the digit is not in the
    /// mover's set.
    #[must_use = "make_move returns a new board state; the original is unchanged"]
    pub fn make_move(&self, col: usize, row: usize, number: u8) -> Result<BoardState, crate::Error> {
        if self.is_terminal() {
            return Err(crate::Error::GameOver);
        }
        if col >= self.size || row >= self.size {
            return Err(crate::Error::OutOfBounds {
                col,
                row,
                size: self.size,
            });
        }
        if self.cell(col, row).is_some() {
            return Err(crate::Error::OccupiedCell { col, row });
        }
        if !self.to_move.numbers().contains(&number) {
            return Err(crate::Error::UnavailableNumber {
                number,
                mover: self.to_move.to_string(),
            });
        }

        let mut next = self.clone();
        let idx = self.index(col, row);
        next.cells[idx] = Some(number);
        next.to_move = self.to_move.opponent();
        Ok(next)
    }

    /// Apply an action produced by transition enumeration
    #[must_use = "apply returns a new board state; the original is unchanged"]
    pub fn apply(&self, action: &Action) -> Result<BoardState, crate::Error> {
        self.make_move(action.col, action.row, action.number)
    }

    /// Placements that would win immediately for the mover, in canonical
    /// order
    pub fn winning_placements(&self) -> Vec<Action> {
        if self.is_terminal() {
            return Vec::new();
        }
        let mut placements: Vec<Action> = self
            .analyzer()
            .completions(&self.cells, self.to_move.numbers())
            .into_iter()
            .map(|(idx, digit)| Action::new(idx % self.size, idx / self.size, digit))
            .collect();
        placements.sort_unstable();
        placements
    }

    /// Encode the board as a string accepted by [`BoardState::from_string`]
    pub fn encode(&self) -> String {
        let mut encoded = String::with_capacity(self.cells.len() + 2);
        for cell in &self.cells {
            match cell {
                Some(n) => encoded.push((b'0' + n) as char),
                None => encoded.push('.'),
            }
        }
        encoded.push('_');
        encoded.push(self.to_move.token());
        encoded
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                if col > 0 {
                    write!(f, " ")?;
                }
                match self.cell(col, row) {
                    Some(n) => write!(f, "{n}")?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "{} to move", self.to_move)
    }
}

impl GameState for BoardState {
    /// Enumerate legal placements in canonical order: for each open cell in
    /// column-then-row ascending order, each of the mover's digits
    /// ascending. Terminal states enumerate nothing.
    fn transitions(&self) -> Vec<(Action, BoardState)> {
        if self.is_terminal() {
            return Vec::new();
        }
        let numbers = self.to_move.numbers();
        let open = self.open_cells();
        let mut transitions = Vec::with_capacity(open.len() * numbers.len());
        for (col, row) in open {
            for &number in numbers {
                let action = Action::new(col, row, number);
                let child = self
                    .apply(&action)
                    .expect("enumerated placements are always legal");
                transitions.push((action, child));
            }
        }
        transitions
    }

    fn is_win(&self) -> bool {
        BoardState::is_win(self)
    }

    fn has_remaining_moves(&self) -> bool {
        BoardState::has_remaining_moves(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odds_moves_first_with_odd_digits() {
        let board = BoardState::new();
        assert_eq!(board.to_move(), Player::Odds);
        assert_eq!(Player::Odds.numbers(), &[1, 3, 5]);
        assert_eq!(Player::Evens.numbers(), &[2, 4, 6]);
    }

    #[test]
    fn make_move_alternates_the_mover() {
        let board = BoardState::new();
        let after = board.make_move(0, 0, 5).unwrap();
        assert_eq!(after.cell(0, 0), Some(5));
        assert_eq!(after.to_move(), Player::Evens);
        // The original is unchanged.
        assert_eq!(board.cell(0, 0), None);
    }

    #[test]
    fn make_move_rejects_illegal_placements() {
        let board = BoardState::new();
        assert!(matches!(
            board.make_move(3, 0, 1),
            Err(crate::Error::OutOfBounds { .. })
        ));
        assert!(matches!(
            board.make_move(0, 0, 2),
            Err(crate::Error::UnavailableNumber { .. })
        ));

        let after = board.make_move(1, 1, 3).unwrap();
        assert!(matches!(
            after.make_move(1, 1, 2),
            Err(crate::Error::OccupiedCell { .. })
        ));
    }

    #[test]
    fn win_detection_follows_the_target_sum() {
        // 5 + 3 + 5 on the top row hits 13.
        let board = BoardState::from_string("535.4...2_E").unwrap();
        assert!(board.is_win());
        assert_eq!(board.winner(), Some(Player::Odds));
        assert!(board.is_terminal());
        assert!(!board.has_remaining_moves());
    }

    #[test]
    fn won_states_enumerate_no_transitions() {
        let board = BoardState::from_string("535.4...2_E").unwrap();
        assert!(board.transitions().is_empty());
        assert!(matches!(
            board.make_move(0, 1, 2),
            Err(crate::Error::GameOver)
        ));
    }

    #[test]
    fn transitions_follow_canonical_order() {
        let board = BoardState::from_string("53..4...2_O").unwrap();
        let actions: Vec<Action> = board.transitions().into_iter().map(|(a, _)| a).collect();

        // Column ascending, then row, then digit.
        let mut sorted = actions.clone();
        sorted.sort();
        assert_eq!(actions, sorted);

        // Open cells of "53..4...2" in column-major order: (0,1), (0,2),
        // (1,2), (2,0), (2,1) with three odd digits each.
        assert_eq!(actions.len(), 15);
        assert_eq!(actions[0], Action::new(0, 1, 1));
        assert_eq!(actions[1], Action::new(0, 1, 3));
        assert_eq!(actions[2], Action::new(0, 1, 5));
        assert_eq!(actions[3], Action::new(0, 2, 1));
        assert_eq!(actions[9], Action::new(2, 0, 1));
    }

    #[test]
    fn transitions_are_stable_across_calls() {
        let board = BoardState::from_string("53..4...2_O").unwrap();
        let first: Vec<Action> = board.transitions().into_iter().map(|(a, _)| a).collect();
        let second: Vec<Action> = board.transitions().into_iter().map(|(a, _)| a).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn winning_placements_find_line_completions() {
        let board = BoardState::from_string("53..4...2_O").unwrap();
        assert_eq!(board.winning_placements(), vec![Action::new(2, 0, 5)]);
    }

    #[test]
    fn encode_round_trips_through_from_string() {
        let board = BoardState::from_string("53..4...2_O").unwrap();
        let encoded = board.encode();
        assert_eq!(encoded, "53..4...2_O");
        assert_eq!(BoardState::from_string(&encoded).unwrap(), board);
    }

    #[test]
    fn mover_is_inferred_from_parity_counts() {
        assert_eq!(
            BoardState::from_string(".........").unwrap().to_move(),
            Player::Odds
        );
        assert_eq!(
            BoardState::from_string("5........").unwrap().to_move(),
            Player::Evens
        );
        assert_eq!(
            BoardState::from_string("5...2....").unwrap().to_move(),
            Player::Odds
        );
    }

    #[test]
    fn impossible_parity_counts_are_rejected() {
        assert!(matches!(
            BoardState::from_string("52..4...."),
            Err(crate::Error::InvalidParityCounts { .. })
        ));
        assert!(matches!(
            BoardState::from_string("13......."),
            Err(crate::Error::InvalidParityCounts { .. })
        ));
    }

    #[test]
    fn conflicting_mover_suffix_is_rejected() {
        assert!(matches!(
            BoardState::from_string("5........_O"),
            Err(crate::Error::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn malformed_strings_are_rejected() {
        assert!(matches!(
            BoardState::from_string("........"),
            Err(crate::Error::InvalidBoardLength { .. })
        ));
        assert!(matches!(
            BoardState::from_string("....x...."),
            Err(crate::Error::InvalidCellCharacter { .. })
        ));
        assert!(matches!(
            BoardState::from_string("........._Q"),
            Err(crate::Error::InvalidMoverString { .. })
        ));
    }

    #[test]
    fn full_board_without_a_win_is_a_draw() {
        // Rows and columns sum to 4 or 5, diagonals to 3; nothing hits 13.
        let board = BoardState::from_string("121212121_E").unwrap();
        assert!(board.is_full());
        assert!(!board.is_win(), "no line may sum to 13: {board}");
        assert!(board.is_terminal());
        assert_eq!(board.winner(), None);
    }
}
