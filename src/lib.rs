//! Exhaustive game-tree search for tic-tac-toe.
//!
//! A plain minimax searcher and an alpha-beta pruned one share the board model
//! in [`game::tictactoe`] and the terminal test and utility function in
//! [`search::evaluate`]. The [`player`] module wraps the searchers so they can
//! take part in a game driven by [`core::run_game`].

pub mod core;
pub mod error;
pub mod game;
pub mod player;
pub mod search;

pub use error::Error;
