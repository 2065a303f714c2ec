use crate::INVALID_NOTICE;
use crate::Move;
use crate::Outcome;
use crate::outcome::Verdict;

/// A single round: the user's input exactly as typed, and the computer's move.
///
/// The user side stays a raw string rather than a [`Move`] because input that
/// is not a move still gets compared. An invalid string is announced with
/// [`INVALID_NOTICE`] and then falls through the tie and win checks, always
/// landing on a loss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    user: String,
    computer: Move,
}

impl Round {
    pub fn new(user: impl Into<String>, computer: Move) -> Self {
        Self {
            user: user.into(),
            computer,
        }
    }
    pub fn user(&self) -> &str {
        &self.user
    }
    pub fn computer(&self) -> Move {
        self.computer
    }
    /// The user's move, if the input names one.
    pub fn parsed(&self) -> Option<Move> {
        Move::try_from(self.user.as_str()).ok()
    }

    /// Invalid input short-circuits to [`Outcome::Invalid`];
    /// anything else is the [`Round::verdict`].
    pub fn classify(&self) -> Outcome {
        match self.parsed() {
            None => Outcome::Invalid,
            Some(_) => Outcome::from(self.verdict()),
        }
    }
    /// Win, lose or tie, computed from the raw input whether or not it is valid.
    pub fn verdict(&self) -> Verdict {
        if self.computer.named(&self.user) {
            return Verdict::Tie;
        }
        match self.parsed() {
            Some(user) if user.beats(&self.computer) => Verdict::Win,
            _ => Verdict::Lose,
        }
    }

    /// Every line this round prints, in order.
    pub fn lines(&self) -> Vec<String> {
        let announcement = match self.verdict() {
            Verdict::Tie => format!("It's a tie! You both chose {}.", self.user),
            Verdict::Win => format!("You win! {} beats {}.", self.user, self.computer),
            Verdict::Lose => format!("You lose! {} beats {}.", self.computer, self.user),
        };
        match self.classify() {
            Outcome::Invalid => vec![INVALID_NOTICE.to_string(), announcement],
            _ => vec![announcement],
        }
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?} vs {}", self.user, self.computer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_move_ties() {
        for c in Move::all() {
            assert_eq!(Round::new(c.name(), c).classify(), Outcome::Tie);
            assert_eq!(
                Round::new(c.name().to_uppercase(), c).classify(),
                Outcome::Tie
            );
        }
    }

    #[test]
    fn winning_pairs() {
        assert_eq!(Round::new("rock", Move::Scissors).classify(), Outcome::Win);
        assert_eq!(Round::new("paper", Move::Rock).classify(), Outcome::Win);
        assert_eq!(Round::new("scissors", Move::Paper).classify(), Outcome::Win);
    }

    #[test]
    fn losing_pairs() {
        assert_eq!(Round::new("scissors", Move::Rock).classify(), Outcome::Lose);
        assert_eq!(Round::new("rock", Move::Paper).classify(), Outcome::Lose);
        assert_eq!(Round::new("paper", Move::Scissors).classify(), Outcome::Lose);
    }

    #[test]
    fn every_pair_agrees_with_beats() {
        for u in Move::all() {
            for c in Move::all() {
                let expected = match (u == c, u.beats(&c)) {
                    (true, _) => Outcome::Tie,
                    (false, true) => Outcome::Win,
                    (false, false) => Outcome::Lose,
                };
                assert_eq!(Round::new(u.name(), c).classify(), expected);
            }
        }
    }

    #[test]
    fn garbage_is_invalid_but_still_loses() {
        for c in Move::all() {
            let round = Round::new("lizard", c);
            assert_eq!(round.classify(), Outcome::Invalid);
            assert_eq!(round.verdict(), Verdict::Lose);
        }
    }

    #[test]
    fn unicode_lowercasing_matches_moves() {
        let kelvin = "ROC\u{212A}";
        assert_eq!(Round::new(kelvin, Move::Scissors).classify(), Outcome::Win);
        assert_eq!(Round::new(kelvin, Move::Rock).classify(), Outcome::Tie);
        assert_eq!(
            Round::new(kelvin, Move::Rock).lines(),
            vec!["It's a tie! You both chose ROC\u{212A}."]
        );
    }

    #[test]
    fn win_message() {
        let round = Round::new("rock", Move::Scissors);
        assert_eq!(round.lines(), vec!["You win! rock beats scissors."]);
    }

    #[test]
    fn tie_message_keeps_typed_case() {
        let round = Round::new("Paper", Move::Paper);
        assert_eq!(round.lines(), vec!["It's a tie! You both chose Paper."]);
    }

    #[test]
    fn lose_message() {
        let round = Round::new("Scissors", Move::Rock);
        assert_eq!(round.lines(), vec!["You lose! rock beats Scissors."]);
    }

    #[test]
    fn invalid_message_then_loss() {
        let round = Round::new("lizard", Move::Paper);
        assert_eq!(
            round.lines(),
            vec![
                "Invalid choice. Please try again.",
                "You lose! paper beats lizard.",
            ]
        );
    }

    #[test]
    fn empty_input_is_invalid() {
        let round = Round::new("", Move::Rock);
        assert_eq!(round.classify(), Outcome::Invalid);
        assert_eq!(round.lines().first().map(String::as_str), Some(INVALID_NOTICE));
    }
}
