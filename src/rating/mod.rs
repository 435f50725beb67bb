//! Restaurant rating: the rounded mean of its review scores.
//!
//! A rating carries exactly one fractional digit, so it is stored as an
//! integer number of tenths and only turned into a decimal at the edges
//! (JSON, display, threshold comparisons).

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Review, MAX_SCORE};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(into = "f64", try_from = "f64")]
pub struct Rating {
    tenths: u16,
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("rating {0} is outside 0.0..=5.0")]
pub struct RatingOutOfRange(pub f64);

impl Rating {
    pub const ZERO: Rating = Rating { tenths: 0 };

    pub const fn from_tenths(tenths: u16) -> Self {
        Self { tenths }
    }

    pub const fn tenths(self) -> u16 {
        self.tenths
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.tenths) / 10.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.tenths / 10, self.tenths % 10)
    }
}

impl From<Rating> for f64 {
    fn from(rating: Rating) -> Self {
        rating.as_f64()
    }
}

impl TryFrom<f64> for Rating {
    type Error = RatingOutOfRange;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        let max = f64::from(MAX_SCORE);
        if !value.is_finite() || !(0.0..=max).contains(&value) {
            return Err(RatingOutOfRange(value));
        }
        Ok(Self {
            tenths: (value * 10.0).round() as u16,
        })
    }
}

/// Compute a restaurant's rating from its reviews.
///
/// No reviews gives zero. Otherwise the mean score is rounded half-up to one
/// decimal place: `[4, 5]` gives 4.5, `[1, 1, 2]` gives 1.3 and a mean of
/// exactly 4.25 gives 4.3. The arithmetic stays on integers, so ties are
/// decided on the exact mean and never on a binary approximation of it.
pub fn aggregate<'a, I>(reviews: I) -> Rating
where
    I: IntoIterator<Item = &'a Review>,
{
    aggregate_scores(reviews.into_iter().map(|review| review.rating))
}

/// [`aggregate`] over bare scores.
pub fn aggregate_scores<I>(scores: I) -> Rating
where
    I: IntoIterator<Item = u8>,
{
    let (sum, count) = scores
        .into_iter()
        .fold((0u64, 0u64), |(sum, count), score| {
            (sum + u64::from(score), count + 1)
        });

    if count == 0 {
        return Rating::ZERO;
    }

    // round_half_up(10 * sum / count) == floor((20 * sum + count) / (2 * count))
    let tenths = (20 * sum + count) / (2 * count);
    Rating::from_tenths(tenths as u16)
}
