/// A throw in Rock-Paper-Scissors.
///
/// Standard rules apply: R beats S, S beats P, P beats R.
/// Text representations are the lowercase names; parsing lowercases first.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Move {
    /// Rock — beats Scissors, loses to Paper.
    Rock,
    /// Paper — beats Rock, loses to Scissors.
    Paper,
    /// Scissors — beats Paper, loses to Rock.
    Scissors,
}

impl Move {
    /// The full domain, in a fixed order.
    pub const fn all() -> [Self; 3] {
        [Self::Rock, Self::Paper, Self::Scissors]
    }
    /// Lowercase name, as shown to the user.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Rock => "rock",
            Self::Paper => "paper",
            Self::Scissors => "scissors",
        }
    }
    /// The one move this move defeats.
    pub const fn victim(&self) -> Self {
        match self {
            Self::Rock => Self::Scissors,
            Self::Paper => Self::Rock,
            Self::Scissors => Self::Paper,
        }
    }
    /// The one move that defeats this move.
    pub const fn beaten_by(&self) -> Self {
        match self {
            Self::Rock => Self::Paper,
            Self::Paper => Self::Scissors,
            Self::Scissors => Self::Rock,
        }
    }
    pub fn beats(&self, other: &Self) -> bool {
        self.victim() == *other
    }
    /// Whether `s`, lowercased, is this move's name.
    pub fn named(&self, s: &str) -> bool {
        s.to_lowercase() == self.name()
    }
}

/// index into Move::all(), wrapping
impl From<u8> for Move {
    fn from(n: u8) -> Self {
        match n % 3 {
            0 => Self::Rock,
            1 => Self::Paper,
            _ => Self::Scissors,
        }
    }
}

/// str isomorphism, case-insensitive
impl TryFrom<&str> for Move {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::all()
            .into_iter()
            .find(|m| m.named(s))
            .ok_or_else(|| format!("'{}' is not rock, paper, or scissors", s))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
