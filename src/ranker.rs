//! Review ordering.
//!
//! Ranking is a stable, comparator-driven sort over reviews that have already
//! been loaded into memory. Nothing here performs I/O or touches review content:
//! the output is always a permutation of the input.
//!
//! | mode             | primary key        | tie-break            |
//! |------------------|--------------------|----------------------|
//! | `Newest`         | created_at desc    | input order          |
//! | `Oldest`         | created_at asc     | input order          |
//! | `HighestRating`  | rating desc        | created_at desc      |
//! | `LowestRating`   | rating asc         | created_at asc       |

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::RatingBounds;
use crate::error::{Error, Result};
use crate::models::{Review, ReviewRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    Newest,
    Oldest,
    HighestRating,
    LowestRating,
}

impl SortMode {
    pub const ALL: [SortMode; 4] = [
        SortMode::Newest,
        SortMode::Oldest,
        SortMode::HighestRating,
        SortMode::LowestRating,
    ];

    /// Canonical parameter spelling, as accepted by `from_str`
    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::Newest => "newest",
            SortMode::Oldest => "oldest",
            SortMode::HighestRating => "highest_rating",
            SortMode::LowestRating => "lowest_rating",
        }
    }

    /// Link text for the mode
    pub fn label(self) -> &'static str {
        match self {
            SortMode::Newest => "Newest",
            SortMode::Oldest => "Oldest",
            SortMode::HighestRating => "Highest Rating",
            SortMode::LowestRating => "Lowest Rating",
        }
    }

    pub fn comparator(self) -> fn(&Review, &Review) -> Ordering {
        match self {
            SortMode::Newest => newest_first,
            SortMode::Oldest => oldest_first,
            SortMode::HighestRating => highest_rating_first,
            SortMode::LowestRating => lowest_rating_first,
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = Error;

    /// Case-insensitive; `-` and spaces are read as `_`.
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        SortMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == normalized)
            .ok_or_else(|| Error::InvalidArgument(format!("unrecognized sort mode {:?}", s)))
    }
}

fn newest_first(a: &Review, b: &Review) -> Ordering {
    b.created_at().cmp(&a.created_at())
}

fn oldest_first(a: &Review, b: &Review) -> Ordering {
    a.created_at().cmp(&b.created_at())
}

fn highest_rating_first(a: &Review, b: &Review) -> Ordering {
    b.rating()
        .cmp(&a.rating())
        .then_with(|| newest_first(a, b))
}

fn lowest_rating_first(a: &Review, b: &Review) -> Ordering {
    a.rating()
        .cmp(&b.rating())
        .then_with(|| oldest_first(a, b))
}

/// Returns `reviews` ordered by `mode`. The input is left untouched.
///
/// Works over owned reviews as well as references, so callers holding
/// `Vec<&Review>` borrowed from a catalog can rank without cloning.
pub fn rank<R>(reviews: &[R], mode: SortMode) -> Vec<R>
where
    R: Borrow<Review> + Clone,
{
    let cmp = mode.comparator();
    let mut ranked = reviews.to_vec();
    ranked.sort_by(|a, b| cmp(a.borrow(), b.borrow()));
    debug!(mode = %mode, count = ranked.len(), "ranked reviews");
    ranked
}

/// Parses `mode` and ranks. Unknown modes fail with `InvalidArgument`.
pub fn rank_by<R>(reviews: &[R], mode: &str) -> Result<Vec<R>>
where
    R: Borrow<Review> + Clone,
{
    let mode = mode.parse::<SortMode>()?;
    Ok(rank(reviews, mode))
}

/// Validates raw records and ranks them. The first malformed record aborts
/// the whole call with `InvalidRecord`.
pub fn rank_records(
    records: &[ReviewRecord],
    mode: SortMode,
    bounds: &RatingBounds,
) -> Result<Vec<Review>> {
    let reviews = records
        .iter()
        .cloned()
        .map(|record| record.validate(bounds))
        .collect::<Result<Vec<_>>>()?;
    Ok(rank(&reviews, mode))
}
