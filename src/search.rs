//! Exhaustive game-tree search over [`TTTBoard`]s.
//!
//! Both searchers score every position from the point of view of a fixed
//! computer player, whoever is to move. The board the caller passes in is never
//! modified; every successor is a fresh copy.

use std::fmt::Display;
use std::str::FromStr;

use clap::ValueEnum;
use itertools::Itertools as _;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::game::tictactoe::{TTTAddr, TTTBoard};

pub mod alpha_beta;
pub mod evaluate;
pub mod minimax;

pub use alpha_beta::{alpha_beta, alpha_beta_root};
pub use evaluate::{is_terminal, try_utility, utility};
pub use minimax::minimax;

pub type Score = i32;

/// Larger than any utility. Use `-INFINITY` for the other end of the window.
pub const INFINITY: Score = Score::MAX;

/// The move a searcher picked and the score it backed up.
///
/// `best_move` is `None` only when the searched board was already terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub best_move: Option<TTTAddr>,
    pub score: Score,
}

impl SearchResult {
    pub(crate) fn leaf(score: Score) -> Self {
        Self {
            best_move: None,
            score,
        }
    }
}

/// Performance counters. The caller owns these and resets them between runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Non-terminal nodes whose successors were generated
    pub expanded: u64,
    /// Terminal checks, one per visited node
    pub evaluated: u64,
    /// Times alpha-beta skipped the remaining siblings of a node
    pub cutoffs: u64,
}

impl SearchStats {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl std::ops::AddAssign for SearchStats {
    fn add_assign(&mut self, rhs: Self) {
        self.expanded += rhs.expanded;
        self.evaluated += rhs.evaluated;
        self.cutoffs += rhs.cutoffs;
    }
}

impl Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} expanded, {} evaluated, {} cutoffs",
            self.expanded, self.evaluated, self.cutoffs
        )
    }
}

/// Named orderings. They only matter for how much alpha-beta can prune.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OrderPreset {
    /// 0 through 8
    Linear,
    /// The center, then the rest left to right
    CenterFirst,
    /// The center, the corners, then the edges
    CenterCorners,
    /// The center, corners starting from the bottom right, then the edges
    CenterCornersDiagonal,
}

impl OrderPreset {
    fn cells(&self) -> [usize; 9] {
        match self {
            OrderPreset::Linear => [0, 1, 2, 3, 4, 5, 6, 7, 8],
            OrderPreset::CenterFirst => [4, 0, 1, 2, 3, 5, 6, 7, 8],
            OrderPreset::CenterCorners => [4, 0, 8, 6, 2, 1, 3, 5, 7],
            OrderPreset::CenterCornersDiagonal => [4, 8, 6, 2, 0, 1, 3, 5, 7],
        }
    }
}

/// The order successors are generated in. Ties in score go to the earlier move.
///
/// invariant: a permutation of 0-8
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOrder([usize; 9]);

impl MoveOrder {
    pub fn new(cells: [usize; 9]) -> Result<Self, Error> {
        if cells.iter().copied().sorted().eq(0..9) {
            Ok(Self(cells))
        } else {
            Err(Error::InvalidMoveOrder(cells.to_vec()))
        }
    }

    pub fn cells(&self) -> &[usize; 9] {
        &self.0
    }

    /// The empty cells of `board`, in this order
    pub fn moves<'a>(&'a self, board: &'a TTTBoard) -> impl Iterator<Item = TTTAddr> + 'a {
        self.0
            .iter()
            .filter(|&&num| board.is_empty_at(num))
            .map(|&num| TTTAddr(num))
    }
}

impl Default for MoveOrder {
    fn default() -> Self {
        OrderPreset::CenterCorners.into()
    }
}

impl From<OrderPreset> for MoveOrder {
    fn from(preset: OrderPreset) -> Self {
        Self(preset.cells())
    }
}

/// Comma separated cell indices, e.g. `4,8,6,2,0,1,3,5,7`
impl FromStr for MoveOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let nums = s
            .split(',')
            .map(|x| x.trim().parse::<usize>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| Error::UnparsableMoveOrder(s.to_string()))?;
        let cells: [usize; 9] = nums
            .clone()
            .try_into()
            .map_err(|_| Error::InvalidMoveOrder(nums))?;
        Self::new(cells)
    }
}

impl Display for MoveOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.iter().join(","))
    }
}
