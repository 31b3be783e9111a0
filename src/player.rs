pub mod alpha_beta;
pub mod console;
pub mod min_max;
pub mod random;

pub use alpha_beta::ABAi;
pub use console::ConsolePlayer;
pub use min_max::MinMaxAi;
pub use random::RandomAi;
