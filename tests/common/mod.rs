use std::collections::HashSet;

use xoxo_search::{core::Board, game::tictactoe::TTTBoard};

/// Every position that can come up in a game where X moves first, the empty board included
pub fn reachable_states() -> HashSet<TTTBoard> {
    let mut seen = HashSet::new();
    let mut stack = vec![TTTBoard::new()];
    while let Some(b) = stack.pop() {
        if !seen.insert(b) || b.game_is_over() {
            continue;
        }
        let mark = b.current_player();
        stack.extend(b.valid_moves().into_iter().map(|addr| b.with_mark(addr, mark)));
    }
    seen
}
