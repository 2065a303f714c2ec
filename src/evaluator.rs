use crate::Human;
use crate::Move;
use crate::Opponent;
use crate::Outcome;
use crate::Robot;
use crate::Round;
use anyhow::Context;
use std::io::BufRead;
use std::io::Write;

/// Plays one round end to end: prompt, read, draw, classify, print.
///
/// Generic over the opponent so a round can be replayed against a fixed
/// [`Move`]; the default plays against a uniformly random [`Robot`].
#[derive(Debug, Default)]
pub struct RoundEvaluator<O = Robot> {
    opponent: O,
}

impl<O> RoundEvaluator<O>
where
    O: Opponent,
{
    pub fn new(opponent: O) -> Self {
        Self { opponent }
    }

    pub fn choose_computer_move(&mut self) -> Move {
        self.opponent.throw()
    }

    pub fn classify(user: &str, computer: Move) -> Outcome {
        Round::new(user, computer).classify()
    }

    /// Reads the user's move from `input` and writes the prompt and outcome
    /// lines to `output`. Invalid moves are reported, not returned as errors;
    /// only I/O failures are.
    pub fn play<R, W>(&mut self, input: R, mut output: W) -> anyhow::Result<Round>
    where
        R: BufRead,
        W: Write,
    {
        let computer = self.choose_computer_move();
        let user = Human::new(input, &mut output).ask()?;
        let round = Round::new(user, computer);
        match round.classify() {
            Outcome::Invalid => log::info!("invalid choice {}", round),
            outcome => log::debug!("{} -> {}", round, outcome),
        }
        for line in round.lines() {
            writeln!(output, "{}", line).context("write outcome")?;
        }
        output.flush().context("flush outcome")?;
        Ok(round)
    }
}
