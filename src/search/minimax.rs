use crate::core::PlayerMark;
use crate::game::tictactoe::TTTBoard;

use super::{evaluate, MoveOrder, SearchResult, SearchStats, INFINITY};

/// compute the best move and score of a node by use of plain minimax
///
/// Every successor is visited, so this is the reference the pruned search is
/// checked against. Positions are scored for `cpu_player`, who maximizes; the
/// opponent minimizes. `cur_player` is the side to move on `board`.
pub fn minimax(
    board: &TTTBoard,
    cpu_player: PlayerMark,
    cur_player: PlayerMark,
    order: &MoveOrder,
    stats: &mut SearchStats,
) -> SearchResult {
    stats.evaluated += 1;
    if evaluate::is_terminal(board) {
        return SearchResult::leaf(evaluate::utility(board, cpu_player));
    }
    stats.expanded += 1;

    let maximizing = cur_player == cpu_player;
    let mut best = SearchResult {
        best_move: None,
        score: if maximizing { -INFINITY } else { INFINITY },
    };
    for addr in order.moves(board) {
        let child = board.with_mark(addr, cur_player);
        let score = minimax(&child, cpu_player, cur_player.other(), order, stats).score;
        // strict comparisons: the first move reaching the best score keeps it
        let better = if maximizing {
            score > best.score
        } else {
            score < best.score
        };
        if better {
            best = SearchResult {
                best_move: Some(addr),
                score,
            };
        }
    }
    best
}
