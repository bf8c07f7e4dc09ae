//! Move selection via exhaustive minimax search with alpha-beta bounds

use super::state::{Action, GameState};

/// Lower utility bound. One step inside `i32::MIN` so the sentinel survives
/// comparisons and negation without wrapping.
pub const UTILITY_MIN: i32 = i32::MIN + 1;

/// Upper utility bound, mirrored from [`UTILITY_MIN`]
pub const UTILITY_MAX: i32 = i32::MAX - 1;

/// Select the single best placement from `state`.
///
/// Root transitions are scanned in canonical order. A child that is an
/// immediate win is returned on the spot, regardless of what deeper search
/// would say about its siblings. Otherwise each child is evaluated with
/// [`alphabeta`] and the first action whose utility strictly beats the
/// running best (initially zero) is recorded, with the winning score written
/// into its utility slot. Strict comparison means ties resolve to the
/// earliest enumerated action.
///
/// When no transition strictly beats zero (including the case of an empty
/// transition set) the degenerate [`Action::fallback`] placement is returned
/// with utility 0, even though positions may exist where every real move
/// scores below zero. That asymmetry is part of the selector's contract;
/// callers that need a playable move can test [`Action::is_fallback`].
///
/// # Examples
///
/// ```
/// use tictactotal::{BoardState, choose};
///
/// // Odds can complete the top row: 5 + 3 + 5 = 13.
/// let board = BoardState::from_string("53..4...2_O").unwrap();
/// let best = choose(&board);
/// assert_eq!((best.col, best.row, best.number), (2, 0, 5));
/// ```
pub fn choose<S: GameState>(state: &S) -> Action {
    let mut alpha = UTILITY_MIN;
    let beta = UTILITY_MAX;
    let mut highest_utility = 0;
    let mut action_to_take = Action::fallback();

    for (action, child) in state.transitions() {
        if child.is_win() {
            return action;
        }
        let utility = alphabeta(&child, alpha, beta, true);
        if utility > highest_utility {
            highest_utility = utility;
            alpha = highest_utility;
            action_to_take = action;
            action_to_take.utility = highest_utility;
        }
    }

    action_to_take
}

/// Evaluate `state` between the bounds `alpha` and `beta`.
///
/// `maximizing` names the side being scored at this node; children are
/// evaluated with the flag inverted. Any position with no remaining moves
/// scores exactly 0, wins and draws alike: the preference for immediate wins
/// lives entirely in [`choose`]'s shortcut, not here. The maximizing branch
/// stops visiting siblings once `beta >= alpha`, the minimizing branch once
/// `beta <= alpha`; skipped subtrees cannot change the value already
/// committed to by an ancestor.
pub fn alphabeta<S: GameState>(state: &S, mut alpha: i32, mut beta: i32, maximizing: bool) -> i32 {
    if !state.has_remaining_moves() {
        return 0;
    }

    if maximizing {
        let mut utility = UTILITY_MIN;
        for (_, child) in state.transitions() {
            utility = utility.max(alphabeta(&child, alpha, beta, false));
            alpha = alpha.max(utility);
            if beta >= alpha {
                break;
            }
        }
        utility
    } else {
        let mut utility = UTILITY_MAX;
        for (_, child) in state.transitions() {
            utility = utility.min(alphabeta(&child, alpha, beta, true));
            beta = beta.min(utility);
            if beta <= alpha {
                break;
            }
        }
        utility
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Hand-built tree node for exercising the search without a real board
    #[derive(Clone)]
    struct Node {
        win: bool,
        open: bool,
        children: Vec<(Action, Node)>,
    }

    impl Node {
        /// Terminal draw leaf
        fn leaf() -> Self {
            Node {
                win: false,
                open: false,
                children: Vec::new(),
            }
        }

        /// Terminal winning leaf
        fn win_leaf() -> Self {
            Node {
                win: true,
                open: false,
                children: Vec::new(),
            }
        }

        /// A node that claims to have moves left but enumerates none, so the
        /// evaluator returns the sentinel of whichever side is on turn
        fn stuck() -> Self {
            Node {
                win: false,
                open: true,
                children: Vec::new(),
            }
        }

        fn branch(children: Vec<(Action, Node)>) -> Self {
            Node {
                win: false,
                open: true,
                children,
            }
        }

        /// An internal node that evaluates to `UTILITY_MAX` when scored as
        /// the maximizing side: its only grandchild is a stuck minimizing
        /// node.
        fn max_valued() -> Self {
            Node::branch(vec![(Action::new(0, 0, 1), Node::stuck())])
        }
    }

    impl GameState for Node {
        fn transitions(&self) -> Vec<(Action, Node)> {
            self.children.clone()
        }

        fn is_win(&self) -> bool {
            self.win
        }

        fn has_remaining_moves(&self) -> bool {
            self.open
        }
    }

    /// Minimax without the cutoff checks, for comparison
    fn reference_minimax<S: GameState>(state: &S, maximizing: bool) -> i32 {
        if !state.has_remaining_moves() {
            return 0;
        }
        let transitions = state.transitions();
        let child_values = transitions
            .iter()
            .map(|(_, child)| reference_minimax(child, !maximizing));
        if maximizing {
            child_values.fold(UTILITY_MIN, i32::max)
        } else {
            child_values.fold(UTILITY_MAX, i32::min)
        }
    }

    #[test]
    fn terminal_leaves_score_exactly_zero() {
        // Wins reached inside the recursion score the same as draws.
        for node in [Node::leaf(), Node::win_leaf()] {
            assert_eq!(alphabeta(&node, UTILITY_MIN, UTILITY_MAX, true), 0);
            assert_eq!(alphabeta(&node, UTILITY_MIN, UTILITY_MAX, false), 0);
        }
    }

    #[test]
    fn stuck_nodes_yield_the_turn_sentinel() {
        let node = Node::stuck();
        assert_eq!(alphabeta(&node, UTILITY_MIN, UTILITY_MAX, true), UTILITY_MIN);
        assert_eq!(
            alphabeta(&node, UTILITY_MIN, UTILITY_MAX, false),
            UTILITY_MAX
        );
    }

    #[test]
    fn immediate_win_beats_higher_valued_sibling() {
        // The first child evaluates to UTILITY_MAX, far above anything a win
        // leaf would score, but the winning child must still be taken.
        let win_action = Action::new(1, 1, 4);
        let root = Node::branch(vec![
            (Action::new(0, 0, 2), Node::max_valued()),
            (win_action, Node::win_leaf()),
        ]);
        assert_eq!(choose(&root), win_action);
    }

    #[test]
    fn immediate_win_keeps_its_enumerated_utility_slot() {
        let root = Node::branch(vec![(Action::new(2, 1, 6), Node::win_leaf())]);
        assert_eq!(choose(&root).utility, 0);
    }

    #[test]
    fn equal_utilities_resolve_to_the_earliest_placement() {
        // Both children score UTILITY_MAX; the first enumerated action wins
        // and carries the score in its utility slot.
        let first = Action::new(0, 1, 3);
        let second = Action::new(2, 0, 1);
        let root = Node::branch(vec![
            (first, Node::max_valued()),
            (second, Node::max_valued()),
        ]);
        let chosen = choose(&root);
        assert_eq!(chosen, first);
        assert_eq!(chosen.utility, UTILITY_MAX);
    }

    #[test]
    fn nothing_above_zero_falls_back_to_the_default() {
        // Draw-valued children never strictly beat the initial zero, so the
        // selector keeps its degenerate default.
        let root = Node::branch(vec![
            (Action::new(0, 0, 1), Node::leaf()),
            (Action::new(1, 0, 1), Node::leaf()),
        ]);
        assert_eq!(choose(&root), Action::fallback());
    }

    #[test]
    fn empty_transition_set_falls_back_to_the_default() {
        let chosen = choose(&Node::stuck());
        assert!(chosen.is_fallback());
        assert_eq!(chosen.utility, 0);
    }

    #[test]
    fn choose_is_deterministic() {
        let root = Node::branch(vec![
            (Action::new(0, 0, 5), Node::max_valued()),
            (Action::new(0, 2, 3), Node::leaf()),
            (Action::new(1, 1, 1), Node::max_valued()),
        ]);
        let first = choose(&root);
        for _ in 0..10 {
            assert_eq!(choose(&root), first);
        }
    }

    #[test]
    fn pruning_agrees_with_reference_on_uniform_trees() {
        // Every leaf is a draw, so cutoffs cannot change any node's value.
        fn uniform(depth: usize, width: usize) -> Node {
            if depth == 0 {
                return Node::leaf();
            }
            let children = (0..width)
                .map(|i| (Action::new(i, 0, 1), uniform(depth - 1, width)))
                .collect();
            Node::branch(children)
        }

        for depth in 1..=4 {
            let tree = uniform(depth, 3);
            for maximizing in [true, false] {
                assert_eq!(
                    alphabeta(&tree, UTILITY_MIN, UTILITY_MAX, maximizing),
                    reference_minimax(&tree, maximizing),
                    "depth {depth}, maximizing {maximizing}"
                );
            }
        }
    }
}
