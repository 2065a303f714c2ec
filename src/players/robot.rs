use super::Opponent;
use crate::Move;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Computer opponent choosing uniformly among rock, paper and scissors.
///
/// Each process gets an independently seeded generator; [`Robot::seeded`]
/// exists for reproducible draws.
#[derive(Debug, Clone)]
pub struct Robot {
    rng: SmallRng,
}

impl Robot {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for Robot {
    fn default() -> Self {
        Self {
            rng: SmallRng::from_rng(&mut rand::rng()),
        }
    }
}

impl Opponent for Robot {
    fn throw(&mut self) -> Move {
        let n = Move::all().len() as u8;
        let choice = Move::from(self.rng.random_range(0..n));
        log::debug!("robot throws {}", choice);
        choice
    }
}
