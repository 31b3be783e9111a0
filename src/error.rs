use thiserror::Error;

/// Errors raised while building boards and move orders from outside input
#[derive(Error, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("board must have exactly 9 cells, got {got} in '{context}'")]
    InvalidBoardLength { got: usize, context: String },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid cell value {value} at position {position} (expected -1, 0 or 1)")]
    InvalidCellValue { value: i8, position: usize },

    #[error("both players have three in a row")]
    BothPlayersWon,

    #[error("invalid player '{0}' (expected X, O, 0 or 1)")]
    InvalidPlayer(String),

    #[error("move order must be a permutation of 0-8, got {0:?}")]
    InvalidMoveOrder(Vec<usize>),

    #[error("could not parse move order '{0}'")]
    UnparsableMoveOrder(String),
}
