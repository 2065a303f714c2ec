/// Result of comparing the user's input against the computer's move.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Lose,
    Tie,
    /// The user's input was not a move at all.
    Invalid,
}

/// Win, lose or tie. Every round has one, valid input or not.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Verdict {
    Win,
    Lose,
    Tie,
}

impl From<Verdict> for Outcome {
    fn from(v: Verdict) -> Self {
        match v {
            Verdict::Win => Self::Win,
            Verdict::Lose => Self::Lose,
            Verdict::Tie => Self::Tie,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Win => "win",
                Self::Lose => "lose",
                Self::Tie => "tie",
                Self::Invalid => "invalid",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_never_invalid() {
        for v in [Verdict::Win, Verdict::Lose, Verdict::Tie] {
            assert_ne!(Outcome::from(v), Outcome::Invalid);
        }
    }

    #[test]
    fn display() {
        assert_eq!(Outcome::Win.to_string(), "win");
        assert_eq!(Outcome::Invalid.to_string(), "invalid");
    }
}
