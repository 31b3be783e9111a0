use log::debug;

use crate::core::{Board, Player, PlayerMark};
use crate::game::tictactoe::{TTTAddr, TTTBoard};
use crate::search::{alpha_beta_root, MoveOrder, SearchResult, SearchStats};

pub struct ABAi {
    my_marker: PlayerMark,
    order: MoveOrder,
    /// A performance counter. If we prune well, these numbers are small
    stats: SearchStats,
    name: String,
}

impl ABAi {
    pub fn new(mark: PlayerMark, order: MoveOrder) -> Self {
        ABAi {
            my_marker: mark,
            order,
            stats: SearchStats::default(),
            name: format!("alphabeta {mark}"),
        }
    }

    pub fn analyse(&mut self, b: &TTTBoard) -> (SearchResult, SearchStats) {
        let mut stats = SearchStats::default();
        let res = alpha_beta_root(b, self.my_marker, self.my_marker, &self.order, &mut stats);
        self.stats += stats;
        (res, stats)
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}

impl Player<TTTBoard> for ABAi {
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

impl Drop for ABAi {
    fn drop(&mut self) {
        debug!("{} totals: {}", self.name, self.stats);
    }
}
