//! Scoring engine.
//!
//! Pure functions that turn card sequences into ordered [`ScoreEvent`] lists.
//! Two evaluation contexts exist:
//! - [`score_pegging`]: the live pile since the count last reset;
//! - [`score_counting`]: a four-card hand (or the crib) plus the up-card.
//!
//! Events come out in detection order so a front end can announce them one by
//! one; [`total_points`] folds them into a number.

pub(crate) mod combinations;
pub(crate) mod counting;
pub(crate) mod pegging;
pub(crate) mod rank_counts;
pub(crate) mod runs;

pub use combinations::Combinations;
pub use counting::{score_counting, CountKind};
pub use pegging::{score_last_card, score_pegging};

/// A single scoring combination. The catalog is closed and each variant has a
/// fixed point value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum ScoreEvent {
    Fifteen,
    ThirtyOne,
    LastCard,
    Pair,
    PairRoyale,
    DoublePairRoyale,
    RunOfThree,
    RunOfFour,
    RunOfFive,
    RunOfSix,
    RunOfSeven,
    Flush,
    FiveCardFlush,
    Nobs,
}

impl ScoreEvent {
    pub const ALL: [ScoreEvent; 14] = [
        ScoreEvent::Fifteen,
        ScoreEvent::ThirtyOne,
        ScoreEvent::LastCard,
        ScoreEvent::Pair,
        ScoreEvent::PairRoyale,
        ScoreEvent::DoublePairRoyale,
        ScoreEvent::RunOfThree,
        ScoreEvent::RunOfFour,
        ScoreEvent::RunOfFive,
        ScoreEvent::RunOfSix,
        ScoreEvent::RunOfSeven,
        ScoreEvent::Flush,
        ScoreEvent::FiveCardFlush,
        ScoreEvent::Nobs,
    ];

    pub const fn points(self) -> u32 {
        match self {
            ScoreEvent::Fifteen => 2,
            ScoreEvent::ThirtyOne => 2,
            ScoreEvent::LastCard => 1,
            ScoreEvent::Pair => 2,
            ScoreEvent::PairRoyale => 6,
            ScoreEvent::DoublePairRoyale => 12,
            ScoreEvent::RunOfThree => 3,
            ScoreEvent::RunOfFour => 4,
            ScoreEvent::RunOfFive => 5,
            ScoreEvent::RunOfSix => 6,
            ScoreEvent::RunOfSeven => 7,
            ScoreEvent::Flush => 4,
            ScoreEvent::FiveCardFlush => 5,
            ScoreEvent::Nobs => 1,
        }
    }

    /// Announcement text.
    pub const fn label(self) -> &'static str {
        match self {
            ScoreEvent::Fifteen => "Fifteen",
            ScoreEvent::ThirtyOne => "Thirty-one",
            ScoreEvent::LastCard => "Last card",
            ScoreEvent::Pair => "Pair",
            ScoreEvent::PairRoyale => "Pair royale",
            ScoreEvent::DoublePairRoyale => "Double pair royale",
            ScoreEvent::RunOfThree => "Run of three",
            ScoreEvent::RunOfFour => "Run of four",
            ScoreEvent::RunOfFive => "Run of five",
            ScoreEvent::RunOfSix => "Run of six",
            ScoreEvent::RunOfSeven => "Run of seven",
            ScoreEvent::Flush => "Flush",
            ScoreEvent::FiveCardFlush => "Five-card flush",
            ScoreEvent::Nobs => "Nobs",
        }
    }

    /// Pair tier for a group of `size` equal ranks (2, 3 or 4).
    pub const fn pair_tier(size: usize) -> Option<ScoreEvent> {
        match size {
            2 => Some(ScoreEvent::Pair),
            3 => Some(ScoreEvent::PairRoyale),
            4 => Some(ScoreEvent::DoublePairRoyale),
            _ => None,
        }
    }

    /// Run event for a run of `len` cards (3 through 7).
    pub const fn run_of(len: usize) -> Option<ScoreEvent> {
        match len {
            3 => Some(ScoreEvent::RunOfThree),
            4 => Some(ScoreEvent::RunOfFour),
            5 => Some(ScoreEvent::RunOfFive),
            6 => Some(ScoreEvent::RunOfSix),
            7 => Some(ScoreEvent::RunOfSeven),
            _ => None,
        }
    }
}

impl std::fmt::Display for ScoreEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} for {}", self.label(), self.points())
    }
}

/// Sum of the point values of `events`.
///
/// ```
/// use cribbage_rs::scoring::{total_points, ScoreEvent};
///
/// assert_eq!(total_points(&[ScoreEvent::Fifteen, ScoreEvent::Pair]), 4);
/// assert_eq!(total_points(&[]), 0);
/// ```
pub fn total_points(events: &[ScoreEvent]) -> u32 {
    events.iter().map(|e| e.points()).sum()
}
