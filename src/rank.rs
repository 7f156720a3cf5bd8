//! Percentile ranks and the sets of ranks a report is made of.

use std::{fmt::Display, num::NonZeroU8, str::FromStr};

use itertools::Itertools;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum RankError {
    #[error("rank {0} is out of range, must be between 1 and 100")]
    OutOfRange(u64),
    #[error("invalid rank {0:?}, expecting an integer between 1 and 100")]
    Invalid(String),
    #[error("the rank step must be at least 1")]
    ZeroStep,
    #[error("the list of ranks is empty")]
    EmptyList,
}

/// A percentile rank, 1..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rank(u8);

impl Rank {
    pub const MIN: Rank = Rank(1);
    pub const MAX: Rank = Rank(100);

    pub fn new(rank: u64) -> Result<Self, RankError> {
        if (1..=100).contains(&rank) {
            Ok(Rank(rank as u8))
        } else {
            Err(RankError::OutOfRange(rank))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u64> for Rank {
    type Error = RankError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Rank::new(value)
    }
}

impl FromStr for Rank {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rank: u64 = s
            .trim()
            .parse()
            .map_err(|_| RankError::Invalid(s.to_string()))?;
        Rank::new(rank)
    }
}

impl Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The step used by the bracketed rank set unless configured
/// otherwise: 1, 5, 10, .. 95, 99.
pub const DEFAULT_STEP: NonZeroU8 = match NonZeroU8::new(5) {
    Some(step) => step,
    None => panic!("5 is not zero"),
};

/// Which ranks to compute. All variants produce strictly ascending
/// ranks without duplicates via [`RankSet::ranks`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RankSet {
    /// 1, then every multiple of `step` up to 95, then 99.
    Bracketed { step: NonZeroU8 },
    /// 1..=100
    All,
    /// Explicitly chosen ranks (sorted and deduplicated on use).
    List(Vec<Rank>),
}

impl Default for RankSet {
    fn default() -> Self {
        RankSet::Bracketed { step: DEFAULT_STEP }
    }
}

impl RankSet {
    pub fn bracketed(step: u8) -> Result<Self, RankError> {
        let step = NonZeroU8::new(step).ok_or(RankError::ZeroStep)?;
        Ok(RankSet::Bracketed { step })
    }

    pub fn list(ranks: Vec<Rank>) -> Result<Self, RankError> {
        if ranks.is_empty() {
            return Err(RankError::EmptyList);
        }
        Ok(RankSet::List(ranks))
    }

    pub fn ranks(&self) -> Vec<Rank> {
        match self {
            RankSet::Bracketed { step } => {
                let inner = (step.get()..=95).step_by(usize::from(step.get()));
                std::iter::once(1)
                    .chain(inner)
                    .chain(std::iter::once(99))
                    .sorted()
                    .dedup()
                    .map(Rank)
                    .collect()
            }
            RankSet::All => (1..=100).map(Rank).collect(),
            RankSet::List(ranks) => ranks.iter().copied().sorted().dedup().collect(),
        }
    }
}
