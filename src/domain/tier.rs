use std::fmt;

use thiserror::Error;

/// Number of tiers, from Unrated (0) to Master (31).
pub const TIER_COUNT: usize = 32;

/// Index of the terminal tier.
pub const MASTER_INDEX: u8 = 31;

/// Minimum rating (inclusive) required for each tier index.
pub const THRESHOLDS: [u32; TIER_COUNT] = [
    0, // unrated
    30, 60, 90, 120, 150, // bronze
    200, 300, 400, 500, 650, // silver
    800, 950, 1100, 1250, 1400, // gold
    1600, 1750, 1900, 2000, 2100, // platinum
    2200, 2300, 2400, 2500, 2600, // diamond
    2700, 2800, 2850, 2900, 2950, // ruby
    3000, // master
];

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingError {
    #[error("rating must be non-negative, got {0}")]
    Negative(i64),

    #[error("rating {0} is out of range")]
    OutOfRange(i64),
}

/// A validated, non-negative rating as reported by the rating API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rating(u32);

impl Rating {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for Rating {
    type Error = RatingError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < 0 {
            return Err(RatingError::Negative(value));
        }
        u32::try_from(value)
            .map(Self)
            .map_err(|_| RatingError::OutOfRange(value))
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Division {
    Unrated,
    Bronze,
    Silver,
    Gold,
    Platinum,
    Diamond,
    Ruby,
    Master,
}

impl Division {
    const RANKED: [Division; 6] = [
        Division::Bronze,
        Division::Silver,
        Division::Gold,
        Division::Platinum,
        Division::Diamond,
        Division::Ruby,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Division::Unrated => "Unrated",
            Division::Bronze => "Bronze",
            Division::Silver => "Silver",
            Division::Gold => "Gold",
            Division::Platinum => "Platinum",
            Division::Diamond => "Diamond",
            Division::Ruby => "Ruby",
            Division::Master => "Master",
        }
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the 32 ranked tiers.
///
/// The index is always in `0..=31`; construct through [`Tier::from_rating`]
/// or [`Tier::from_index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tier(u8);

impl Tier {
    pub const UNRATED: Tier = Tier(0);
    pub const MASTER: Tier = Tier(MASTER_INDEX);

    /// Maps a rating onto its tier index.
    ///
    /// Follows the piecewise boundaries of the rating table exactly; every
    /// branch agrees with [`THRESHOLDS`].
    pub const fn from_rating(rating: Rating) -> Self {
        let r = rating.value();
        let index = match r {
            0..30 => 0,
            30..150 => r / 30,
            150..200 => 5,
            200..500 => (r - 200) / 100 + 6,
            500..1400 => (r - 500) / 150 + 9,
            1400..1600 => 15,
            1600..1750 => 16,
            1750..1900 => 17,
            1900..2800 => (r - 1900) / 100 + 18,
            2800..3000 => (r - 2800) / 50 + 27,
            _ => 31,
        };
        Tier(index as u8)
    }

    pub fn from_index(index: u8) -> Option<Self> {
        (index <= MASTER_INDEX).then_some(Tier(index))
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    pub const fn is_master(self) -> bool {
        self.0 == MASTER_INDEX
    }

    /// Minimum rating for this tier.
    pub const fn threshold(self) -> u32 {
        THRESHOLDS[self.0 as usize]
    }

    /// The tier directly above, or `None` for Master.
    pub fn next(self) -> Option<Self> {
        Tier::from_index(self.0 + 1)
    }

    pub const fn division(self) -> Division {
        match self.0 {
            0 => Division::Unrated,
            MASTER_INDEX => Division::Master,
            i => Division::RANKED[((i - 1) / 5) as usize],
        }
    }

    /// Position within the division, 5 (lowest) down to 1 (highest).
    ///
    /// Unrated and Master have no sub-rank.
    pub const fn sub_rank(self) -> Option<u8> {
        match self.0 {
            0 | MASTER_INDEX => None,
            i => Some(5 - (i - 1) % 5),
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.sub_rank() {
            Some(rank) => write!(f, "{} {rank}", self.division()),
            None => write!(f, "{}", self.division()),
        }
    }
}
