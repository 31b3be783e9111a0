use crate::core::PlayerMark;
use crate::game::tictactoe::TTTBoard;

use super::{evaluate, MoveOrder, Score, SearchResult, SearchStats, INFINITY};

/// compute the best move and score of a node by use of alpha-beta with pruning
///
/// `alpha` is the score the maximizing `cpu_player` is already sure of along the
/// current path and `beta` the score the opponent is already sure of. A node
/// stops looking at further moves once `alpha >= beta`, on either side.
///
/// A node that stops early returns the best score it saw, which lies outside
/// the caller's window. The caller only takes strictly better scores, so such
/// a bound never replaces its chosen move. With the full window at the root
/// the result is the same as [`minimax`](super::minimax()).
pub fn alpha_beta(
    board: &TTTBoard,
    cpu_player: PlayerMark,
    cur_player: PlayerMark,
    mut alpha: Score,
    mut beta: Score,
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
        let score =
            alpha_beta(&child, cpu_player, cur_player.other(), alpha, beta, order, stats).score;
        if maximizing {
            if score > best.score {
                best = SearchResult {
                    best_move: Some(addr),
                    score,
                };
            }
            alpha = alpha.max(best.score);
        } else {
            if score < best.score {
                best = SearchResult {
                    best_move: Some(addr),
                    score,
                };
            }
            beta = beta.min(best.score);
        }
        if alpha >= beta {
            stats.cutoffs += 1;
            break;
        }
    }
    best
}

/// [`alpha_beta`] with the full `(-INFINITY, INFINITY)` window
pub fn alpha_beta_root(
    board: &TTTBoard,
    cpu_player: PlayerMark,
    cur_player: PlayerMark,
    order: &MoveOrder,
    stats: &mut SearchStats,
) -> SearchResult {
    alpha_beta(board, cpu_player, cur_player, -INFINITY, INFINITY, order, stats)
}
