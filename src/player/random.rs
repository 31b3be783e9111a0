use log::info;
use rand::{rngs::StdRng, Rng as _, SeedableRng};

use crate::core::{Board, Player, PlayerMark};

/// Plays a uniformly random legal move
pub struct RandomAi<R> {
    rng: R,
    pub name: String,
}

impl<R, B> Player<B> for RandomAi<R>
where
    R: rand::Rng,
    B: Board,
{
    fn play(&mut self, b: &B) -> B::Coordinate {
        let moves: Vec<_> = b.valid_moves();
        let action = moves[self.rng.gen_range(0..moves.len())];
        info!("Random AI `{}` plays {}", self.name, action);
        action
    }
}

impl RandomAi<StdRng> {
    pub fn new(mark: PlayerMark, seed: Option<u64>) -> Self {
        Self {
            name: mark.to_string(),
            rng: match seed {
                None => StdRng::from_entropy(),
                Some(seed) => StdRng::seed_from_u64(seed),
            },
        }
    }
}
