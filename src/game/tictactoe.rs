use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{Board, GameStatus, PlayerMark};
use crate::error::Error;

/// Represents a coordinate on the board
///
///  0 1 2
///  3 4 5
///  6 7 8
///
/// invariant: the number inside must be 0-8
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct TTTAddr(pub usize);

impl std::fmt::Display for TTTAddr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// The 8 ways to get three in a row: rows top to bottom, columns left to right,
/// then the southeast and the northeast diagonal.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

type Marker = Option<PlayerMark>;

/// The board entries from top left row wise to bottom right.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct TTTBoard([Marker; 9]);

impl Board for TTTBoard {
    type Coordinate = TTTAddr;

    fn valid_moves(&self) -> Vec<TTTAddr> {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(num, &mark)| if mark.is_none() { Some(TTTAddr(num)) } else { None })
            .collect()
    }

    fn game_status(&self) -> GameStatus {
        if let Some(p) = self.winner() {
            GameStatus::Won(p)
        } else if self.empty_count() == 0 {
            GameStatus::Draw
        } else {
            GameStatus::Undecided
        }
    }

    fn place_mark(&mut self, a: TTTAddr, marker: PlayerMark) {
        let num = a.0;
        if num >= 9 {
            panic!("Bad input! {num} is not a cell on the board")
        }
        if self.0[num].is_some() {
            panic!("There is already a marker there! Invalid move just played!")
        }
        self.0[num] = Some(marker);
    }

    fn current_player(&self) -> PlayerMark {
        if self.n_moves_made() % 2 == 0 {
            PlayerMark::Cross
        } else {
            PlayerMark::Naught
        }
    }
}

impl TTTBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of this board with `marker` placed at `a`. The board itself is left untouched.
    pub fn with_mark(&self, a: TTTAddr, marker: PlayerMark) -> Self {
        let mut child = *self;
        child.place_mark(a, marker);
        child
    }

    pub fn cell(&self, a: TTTAddr) -> Marker {
        self.0[a.0]
    }

    pub fn is_empty_at(&self, num: usize) -> bool {
        self.0[num].is_none()
    }

    /// The owner of a completed line, if any. All 8 lines are checked.
    pub fn winner(&self) -> Option<PlayerMark> {
        WIN_LINES.iter().find_map(|&line| self.line_owner(line))
    }

    fn line_owner(&self, [a, b, c]: [usize; 3]) -> Option<PlayerMark> {
        match self.0[a] {
            Some(p) if self.0[b] == Some(p) && self.0[c] == Some(p) => Some(p),
            _ => None,
        }
    }

    fn has_line(&self, p: PlayerMark) -> bool {
        WIN_LINES
            .iter()
            .any(|&line| self.line_owner(line) == Some(p))
    }

    pub fn empty_count(&self) -> usize {
        self.0.iter().filter(|&q| q.is_none()).count()
    }

    pub fn n_moves_made(&self) -> usize {
        9 - self.empty_count()
    }

    /// Raw cell values: -1 for empty, 0 for X, 1 for O
    pub fn to_cells(&self) -> [i8; 9] {
        self.0.map(|mark| match mark {
            None => -1,
            Some(p) => p.index() as i8,
        })
    }

    fn checked(self) -> Result<Self, Error> {
        if self.has_line(PlayerMark::Cross) && self.has_line(PlayerMark::Naught) {
            return Err(Error::BothPlayersWon);
        }
        Ok(self)
    }
}

impl TryFrom<[i8; 9]> for TTTBoard {
    type Error = Error;

    fn try_from(cells: [i8; 9]) -> Result<Self, Self::Error> {
        let mut b = Self::new();
        for (position, &value) in cells.iter().enumerate() {
            b.0[position] = match value {
                -1 => None,
                0 => Some(PlayerMark::Cross),
                1 => Some(PlayerMark::Naught),
                _ => return Err(Error::InvalidCellValue { value, position }),
            };
        }
        b.checked()
    }
}

/// Nine characters, row wise. `x` and `o` (any case) are marks, a space, `.` or `-` is empty.
impl FromStr for TTTBoard {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let got = s.chars().count();
        if got != 9 {
            return Err(Error::InvalidBoardLength {
                got,
                context: s.to_string(),
            });
        }
        let mut b = Self::new();
        for (position, c) in s.chars().enumerate() {
            b.0[position] = match c {
                'x' | 'X' => Some(PlayerMark::Cross),
                'o' | 'O' => Some(PlayerMark::Naught),
                ' ' | '.' | '-' => None,
                character => {
                    return Err(Error::InvalidCellCharacter {
                        character,
                        position,
                        context: s.to_string(),
                    })
                }
            };
        }
        b.checked()
    }
}

impl std::fmt::Display for TTTBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let m = |m: Marker| match m {
            None => ' ',
            Some(PlayerMark::Cross) => 'X',
            Some(PlayerMark::Naught) => 'O',
        };
        writeln!(f, " ------- ")?;
        for row in self.0.chunks(3) {
            write!(f, "| ")?;
            row.iter().try_for_each(|&mark| write!(f, "{} ", m(mark)))?;
            writeln!(f, "|")?;
        }
        writeln!(f, " ------- ")
    }
}
