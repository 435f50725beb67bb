use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::Model;

/// Lowest score a visitor can give.
pub const MIN_SCORE: u8 = 1;
/// Highest score a visitor can give.
pub const MAX_SCORE: u8 = 5;

/// Identity of a review: one review per visitor per restaurant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewKey {
    pub visitor_id: u64,
    pub restaurant_id: u64,
}

impl ReviewKey {
    pub fn new(visitor_id: u64, restaurant_id: u64) -> Self {
        Self {
            visitor_id,
            restaurant_id,
        }
    }
}

impl fmt::Display for ReviewKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.visitor_id, self.restaurant_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub visitor_id: u64,
    pub restaurant_id: u64,
    pub rating: u8,
    pub comment: String,
}

impl Review {
    pub fn new(key: ReviewKey, rating: u8, comment: impl Into<String>) -> Self {
        Self {
            visitor_id: key.visitor_id,
            restaurant_id: key.restaurant_id,
            rating,
            comment: comment.into(),
        }
    }

    pub fn review_key(&self) -> ReviewKey {
        ReviewKey::new(self.visitor_id, self.restaurant_id)
    }
}

impl Model for Review {
    const COLLECTION: &'static str = "reviews";

    fn key(&self) -> String {
        self.review_key().to_string()
    }
}

/// A review submission. Either reference may be missing, which the review
/// service rejects before touching the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub visitor_id: Option<u64>,
    pub restaurant_id: Option<u64>,
    pub rating: u8,
    pub comment: String,
}

impl NewReview {
    pub fn new(visitor_id: u64, restaurant_id: u64, rating: u8, comment: impl Into<String>) -> Self {
        Self {
            visitor_id: Some(visitor_id),
            restaurant_id: Some(restaurant_id),
            rating,
            comment: comment.into(),
        }
    }
}
