use clap::{Parser, ValueEnum};
use log::LevelFilter;
use rand::{rngs::StdRng, Rng as _, SeedableRng as _};
use simple_logger::SimpleLogger;
use xoxo_search::{
    core::{run_game, Player, PlayerMark},
    game::tictactoe::TTTBoard,
    player::{ABAi, ConsolePlayer, MinMaxAi, RandomAi},
    search::{MoveOrder, OrderPreset},
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum PlayerType {
    Console,
    Random,
    Minimax,
    AlphaBeta,
}

/// A Tic-Tac-Toe game for the command line, with a perfect AI integrated!
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Player 1 type, plays X and moves first
    #[arg(long, default_value = "console")]
    p1: PlayerType,

    /// Player 2 type, plays O
    #[arg(long, default_value = "alpha-beta")]
    p2: PlayerType,

    /// The order the AIs try moves in
    #[arg(long, value_enum, default_value = "center-corners")]
    order: OrderPreset,

    /// A custom move order, e.g. "4,8,6,2,0,1,3,5,7". Overrides --order
    #[arg(long)]
    custom_order: Option<MoveOrder>,

    /// The seed for the random number generator (when used)
    #[arg(long)]
    seed: Option<u64>,

    /// Log more. Repeat for even more
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn make_player(
    kind: PlayerType,
    mark: PlayerMark,
    order: MoveOrder,
    rng: &mut StdRng,
) -> Box<dyn Player<TTTBoard>> {
    match kind {
        PlayerType::Console => Box::new(ConsolePlayer::new(mark)),
        PlayerType::Random => Box::new(RandomAi::new(mark, Some(rng.gen()))),
        PlayerType::Minimax => Box::new(MinMaxAi::new(mark, order)),
        PlayerType::AlphaBeta => Box::new(ABAi::new(mark, order)),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    SimpleLogger::new().with_level(level).env().init()?;

    let seed = args.seed.unwrap_or(StdRng::from_entropy().gen());
    log::info!("AI seed: {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);
    let order = args.custom_order.unwrap_or_else(|| args.order.into());
    log::info!("Move order: {}", order);

    let p1 = make_player(args.p1, PlayerMark::Cross, order, &mut rng);
    let p2 = make_player(args.p2, PlayerMark::Naught, order, &mut rng);
    let result = run_game::<TTTBoard>(p1, p2);
    println!("Game over: {}", result);
    Ok(())
}
