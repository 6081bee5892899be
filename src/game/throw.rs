#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Throw {
    #[default]
    Rock = 0,
    Paper = 1,
    Scissors = 2,
}

impl Throw {
    pub const fn all() -> &'static [Self] {
        &[Self::Rock, Self::Paper, Self::Scissors]
    }
    /// the unique throw that defeats this one
    pub const fn counter(&self) -> Self {
        match self {
            Self::Rock => Self::Paper,
            Self::Paper => Self::Scissors,
            Self::Scissors => Self::Rock,
        }
    }
    /// cyclic dominance: rock > scissors > paper > rock
    pub const fn beats(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::Rock, Self::Scissors)
                | (Self::Scissors, Self::Paper)
                | (Self::Paper, Self::Rock)
        )
    }
}

/// u8 isomorphism
impl From<u8> for Throw {
    fn from(n: u8) -> Throw {
        match n {
            0 => Throw::Rock,
            1 => Throw::Paper,
            2 => Throw::Scissors,
            _ => panic!("Invalid throw u8: {}", n),
        }
    }
}
impl From<Throw> for u8 {
    fn from(t: Throw) -> u8 {
        t as u8
    }
}

/// str isomorphism, wire symbols are lowercase
impl TryFrom<&str> for Throw {
    type Error = &'static str;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "rock" => Ok(Throw::Rock),
            "paper" => Ok(Throw::Paper),
            "scissors" => Ok(Throw::Scissors),
            _ => Err("invalid throw"),
        }
    }
}

impl std::fmt::Display for Throw {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Throw::Rock => "rock",
                Throw::Paper => "paper",
                Throw::Scissors => "scissors",
            }
        )
    }
}

impl crate::Arbitrary for Throw {
    fn random() -> Self {
        use rand::seq::IndexedRandom;
        let ref mut rng = rand::rng();
        Self::all()
            .choose(rng)
            .copied()
            .expect("non empty alphabet")
    }
}
