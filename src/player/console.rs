use std::io::BufRead;

use log::error;

use crate::{
    core::{Board, Player, PlayerMark},
    game::tictactoe::{TTTAddr, TTTBoard},
};

pub struct ConsolePlayer {
    pub name: String,
}

impl ConsolePlayer {
    pub fn new(mark: PlayerMark) -> Self {
        ConsolePlayer {
            name: mark.to_string(),
        }
    }
}

/// Parse a 1-9 cell number typed by a human into a free cell of `b`
fn parse_move(line: &str, b: &TTTBoard) -> Result<TTTAddr, String> {
    let num: usize = line
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", line.trim()))?;
    if !(1..=9).contains(&num) {
        return Err(format!("{num} is not in range 1-9"));
    }
    let addr = TTTAddr(num - 1);
    if b.cell(addr).is_some() {
        return Err(format!("cell {num} is already taken"));
    }
    Ok(addr)
}

impl Player<TTTBoard> for ConsolePlayer {
    fn play(&mut self, b: &TTTBoard) -> TTTAddr {
        println!("Time for {} to make a move", self.name);
        print!("{}", b);
        println!("Input a number 1-9 to make a move 1 = top left, 9 = bottom right");
        let stdin = std::io::stdin();
        loop {
            let mut line = String::new();
            let read = stdin
                .lock()
                .read_line(&mut line)
                .expect("Could not read line. Fatal error! Exiting...");
            if read == 0 {
                error!("stdin closed, playing the first free cell");
                return b.valid_moves()[0];
            }
            match parse_move(&line, b) {
                Ok(addr) => {
                    println!("Got {}", addr.0 + 1);
                    return addr;
                }
                Err(msg) => eprintln!("{msg}"),
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reads_one_based_cells() {
        let b: TTTBoard = "x        ".parse().unwrap();
        assert_eq!(parse_move("5\n", &b), Ok(TTTAddr(4)));
        assert!(parse_move("1\n", &b).is_err());
        assert!(parse_move("10", &b).is_err());
        assert!(parse_move("five", &b).is_err());
    }
}
