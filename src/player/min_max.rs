use log::debug;

use crate::core::{Board, Player, PlayerMark};
use crate::game::tictactoe::{TTTAddr, TTTBoard};
use crate::search::{minimax, MoveOrder, SearchResult, SearchStats};

/// A player that searches the whole game tree with plain minimax before every move
pub struct MinMaxAi {
    my_marker: PlayerMark,
    order: MoveOrder,
    /// Counters summed over every search this player has run
    stats: SearchStats,
    name: String,
}

impl MinMaxAi {
    pub fn new(mark: PlayerMark, order: MoveOrder) -> Self {
        Self {
            my_marker: mark,
            order,
            stats: SearchStats::default(),
            name: format!("minimax {mark}"),
        }
    }

    /// Search `b` with this player to move
    pub fn analyse(&mut self, b: &TTTBoard) -> (SearchResult, SearchStats) {
        let mut stats = SearchStats::default();
        let res = minimax(b, self.my_marker, self.my_marker, &self.order, &mut stats);
        self.stats += stats;
        (res, stats)
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}

impl Player<TTTBoard> for MinMaxAi {
    fn play(&mut self, b: &TTTBoard) -> TTTAddr {
        debug_assert_eq!(b.current_player(), self.my_marker);
        let (res, stats) = self.analyse(b);
        debug!(
            "{} picked {:?} with score {} ({})",
            self.name, res.best_move, res.score, stats
        );
        res.best_move
            .expect("an undecided board always has a move")
    }
}

impl Drop for MinMaxAi {
    fn drop(&mut self) {
        debug!("{} totals: {}", self.name, self.stats);
    }
}
