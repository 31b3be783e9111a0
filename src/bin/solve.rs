//! Analyse a single tic-tac-toe position.
//!
//! Prints what the terminal test and the utility function say about the board,
//! then the move and score each requested searcher backs up, with its counters.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::{info, warn, LevelFilter};
use serde::Serialize;
use simple_logger::SimpleLogger;
use xoxo_search::{
    core::{Board, PlayerMark},
    game::tictactoe::TTTBoard,
    search::{
        alpha_beta_root, is_terminal, minimax, try_utility, MoveOrder, OrderPreset, Score,
        SearchResult, SearchStats,
    },
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum Algorithm {
    Minimax,
    AlphaBeta,
    Both,
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The board as 9 characters row wise: x, o, and space or '.' for empty
    board: String,

    /// The side the search plays for
    #[arg(long, default_value = "x")]
    cpu: PlayerMark,

    /// The side to move. Defaults to whoever's turn it is by piece count
    #[arg(long)]
    to_move: Option<PlayerMark>,

    #[arg(short, long, value_enum, default_value = "both")]
    algorithm: Algorithm,

    /// The order successors are tried in
    #[arg(long, value_enum, default_value = "center-corners")]
    order: OrderPreset,

    /// A custom move order, e.g. "4,8,6,2,0,1,3,5,7". Overrides --order
    #[arg(long)]
    custom_order: Option<MoveOrder>,

    /// Print a JSON report instead of text
    #[arg(long)]
    json: bool,

    /// Log more. Repeat for even more
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Serialize)]
struct SearchRun {
    result: SearchResult,
    stats: SearchStats,
}

#[derive(Serialize)]
struct Report {
    cells: [i8; 9],
    cpu: PlayerMark,
    to_move: PlayerMark,
    terminal: bool,
    utility: Option<Score>,
    minimax: Option<SearchRun>,
    alpha_beta: Option<SearchRun>,
}

fn run(
    search: fn(&TTTBoard, PlayerMark, PlayerMark, &MoveOrder, &mut SearchStats) -> SearchResult,
    board: &TTTBoard,
    cpu: PlayerMark,
    to_move: PlayerMark,
    order: &MoveOrder,
) -> SearchRun {
    let mut stats = SearchStats::default();
    let result = search(board, cpu, to_move, order, &mut stats);
    SearchRun { result, stats }
}

fn print_run(name: &str, run: &SearchRun) {
    match run.result.best_move {
        Some(addr) => println!("{name}: move {} score {}", addr, run.result.score),
        None => println!("{name}: no move, score {}", run.result.score),
    }
    println!("  {}", run.stats);
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    SimpleLogger::new().with_level(level).env().init()?;

    let board: TTTBoard = args
        .board
        .parse()
        .with_context(|| format!("could not read board '{}'", args.board))?;
    let to_move = args.to_move.unwrap_or_else(|| board.current_player());
    let order = args.custom_order.unwrap_or_else(|| args.order.into());
    info!("Searching for {} with {} to move, order {}", args.cpu, to_move, order);

    let minimax_run = matches!(args.algorithm, Algorithm::Minimax | Algorithm::Both)
        .then(|| run(minimax, &board, args.cpu, to_move, &order));
    let alpha_beta_run = matches!(args.algorithm, Algorithm::AlphaBeta | Algorithm::Both)
        .then(|| run(alpha_beta_root, &board, args.cpu, to_move, &order));
    if let (Some(m), Some(ab)) = (&minimax_run, &alpha_beta_run) {
        if m.result != ab.result {
            warn!(
                "searchers disagree: minimax {:?}, alpha-beta {:?}",
                m.result, ab.result
            );
        }
    }

    let report = Report {
        cells: board.to_cells(),
        cpu: args.cpu,
        to_move,
        terminal: is_terminal(&board),
        utility: try_utility(&board, args.cpu),
        minimax: minimax_run,
        alpha_beta: alpha_beta_run,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }
    print!("{}", board);
    println!("is_terminal: {}", report.terminal);
    match report.utility {
        Some(u) => println!("utility for {}: {}", args.cpu, u),
        None => println!("utility for {}: undefined, the game is not over", args.cpu),
    }
    if let Some(m) = &report.minimax {
        print_run("minimax", m);
    }
    if let Some(ab) = &report.alpha_beta {
        print_run("alpha-beta", ab);
    }
    Ok(())
}
