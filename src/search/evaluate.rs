//! Terminal test and utility function.

use crate::core::{Board, GameStatus, PlayerMark};
use crate::game::tictactoe::TTTBoard;

use super::Score;

/// Has the game ended, either by a completed line or a full board?
pub fn is_terminal(board: &TTTBoard) -> bool {
    board.empty_count() == 0 || board.winner().is_some()
}

/// Score of a finished game from the point of view of `player`.
///
/// A draw is worth 0. A win is worth `1 + remaining` where `remaining` is the
/// number of empty cells left, so a win on a full board is worth 1 and faster
/// wins are worth more. Losses mirror this below zero.
///
/// Panics if the game is not over.
pub fn utility(board: &TTTBoard, player: PlayerMark) -> Score {
    match try_utility(board, player) {
        Some(score) => score,
        None => panic!("utility called on a board where the game is not over\n{board}"),
    }
}

/// Like [`utility`], but `None` for an undecided board
pub fn try_utility(board: &TTTBoard, player: PlayerMark) -> Option<Score> {
    let speed = 1 + board.empty_count() as Score;
    match board.game_status() {
        GameStatus::Undecided => None,
        GameStatus::Draw => Some(0),
        GameStatus::Won(mark) if mark == player => Some(speed),
        GameStatus::Won(_) => Some(-speed),
    }
}
