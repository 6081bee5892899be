use super::Throw;

/// Result of a single round from the caller's perspective.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

/// (caller's throw, house's throw) -> outcome for the caller
impl From<(Throw, Throw)> for Outcome {
    fn from((user, robo): (Throw, Throw)) -> Self {
        if user == robo {
            Self::Draw
        } else if user.beats(&robo) {
            Self::Win
        } else {
            Self::Lose
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Win => write!(f, "win"),
            Self::Lose => write!(f, "lose"),
            Self::Draw => write!(f, "draw"),
        }
    }
}
