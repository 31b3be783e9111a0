//! The core abstractions for this application
//!

use std::fmt::Display;
use std::str::FromStr;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The two sides. Crosses (X, player 0) move first, naughts (O, player 1) second.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlayerMark {
    Cross,
    Naught,
}

impl PlayerMark {
    pub fn other(&self) -> Self {
        match *self {
            Self::Cross => Self::Naught,
            Self::Naught => Self::Cross,
        }
    }

    /// The numeric player id, 0 for X and 1 for O
    pub fn index(&self) -> u8 {
        match *self {
            Self::Cross => 0,
            Self::Naught => 1,
        }
    }
}

impl Display for PlayerMark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerMark::Cross => write!(f, "X"),
            PlayerMark::Naught => write!(f, "O"),
        }
    }
}

impl FromStr for PlayerMark {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "x" | "X" | "0" => Ok(PlayerMark::Cross),
            "o" | "O" | "1" => Ok(PlayerMark::Naught),
            other => Err(Error::InvalidPlayer(other.to_string())),
        }
    }
}

/// The Player trait is the struct that represents a player.
pub trait Player<B: Board> {
    /// The play function is the main mechanic for the AIs
    /// You observe the whole board through a reference, and can do whatever you like, and then you return an action representing where to play
    fn play(&mut self, b: &B) -> B::Coordinate;
}

pub trait Board: Display + Default {
    type Coordinate: Display + Copy;
    /// The coordinates where you are allowed to place your marker in this turn.
    fn valid_moves(&self) -> Vec<Self::Coordinate>;
    fn place_mark(&mut self, a: Self::Coordinate, marker: PlayerMark);
    fn game_status(&self) -> GameStatus;
    fn current_player(&self) -> PlayerMark;
    fn game_is_over(&self) -> bool {
        !matches!(self.game_status(), GameStatus::Undecided)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Hash, Eq, Ord, PartialOrd)]
pub enum GameStatus {
    Undecided,
    Draw,
    Won(PlayerMark),
}

#[derive(Debug, Clone, Copy, PartialEq, Hash, Eq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum GameEndStatus {
    Draw,
    Won(PlayerMark),
}

impl Display for GameEndStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEndStatus::Draw => write!(f, "draw"),
            GameEndStatus::Won(p) => write!(f, "{p} won"),
        }
    }
}

/// Play a full game from the empty board. `p1` plays crosses and moves first.
pub fn run_game<B: Board>(
    mut p1: Box<dyn Player<B>>,
    mut p2: Box<dyn Player<B>>,
) -> GameEndStatus {
    let mut board = B::default();
    while !board.game_is_over() {
        let current_player = board.current_player();
        let action = match current_player {
            PlayerMark::Cross => p1.play(&board),
            PlayerMark::Naught => p2.play(&board),
        };
        info!("Player {} played {}", current_player, action);
        board.place_mark(action, current_player);
        debug!("\n{}", board);
    }
    println!("{}", &board);
    let status = match board.game_status() {
        GameStatus::Draw => GameEndStatus::Draw,
        GameStatus::Won(p) => GameEndStatus::Won(p),
        GameStatus::Undecided => unreachable!(),
    };
    info!("Game over: {}", status);
    status
}
