//! Sources of moves.
//!
//! - [`Robot`] — computer opponent drawing uniformly from the three moves
//! - [`Move`] — a fixed opponent that always throws itself
//! - [`Human`] — prompts on a writer and reads one raw line from a reader
mod human;
mod robot;

pub use human::*;
pub use robot::*;

use crate::Move;

/// Something that can throw a move against the user.
pub trait Opponent {
    fn throw(&mut self) -> Move;
}

/// A fixed move is an opponent that never changes its mind.
impl Opponent for Move {
    fn throw(&mut self) -> Move {
        *self
    }
}
