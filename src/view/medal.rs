use serde::{Serialize, Serializer};
use std::fmt;

/// Podium medal for the top three ranks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    /// Medal for a rank, if the rank is on the podium
    pub fn from_rank(rank: usize) -> Option<Self> {
        match rank {
            1 => Some(Medal::Gold),
            2 => Some(Medal::Silver),
            3 => Some(Medal::Bronze),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Medal::Gold => "🥇",
            Medal::Silver => "🥈",
            Medal::Bronze => "🥉",
        }
    }
}

impl fmt::Display for Medal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.symbol())
    }
}

impl Serialize for Medal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol())
    }
}

/// What the rank column shows: a medal glyph or the bare number.
///
/// Serializes untagged, so `{"display": "🥇"}` or `{"display": 4}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RankDisplay {
    Medal(Medal),
    Rank(usize),
}

impl RankDisplay {
    pub fn is_medal(&self) -> bool {
        matches!(self, RankDisplay::Medal(_))
    }
}

impl fmt::Display for RankDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankDisplay::Medal(medal) => fmt::Display::fmt(medal, f),
            RankDisplay::Rank(rank) => fmt::Display::fmt(rank, f),
        }
    }
}

/// Map a rank to its display value: medals for 1 to 3, the number otherwise.
///
/// Only ranks produced by `compute_ranks` (always >= 1) are meaningful here;
/// `0` falls through to the bare number.
pub fn rank_to_display(rank: usize) -> RankDisplay {
    match Medal::from_rank(rank) {
        Some(medal) => RankDisplay::Medal(medal),
        None => RankDisplay::Rank(rank),
    }
}
