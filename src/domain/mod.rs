//! Restaurants, visitors and the reviews that link them.

mod restaurant;
mod review;
mod visitor;

pub use restaurant::{CuisineType, NewRestaurant, Restaurant};
pub use review::{NewReview, Review, ReviewKey, MAX_SCORE, MIN_SCORE};
pub use visitor::{NewVisitor, Sex, Visitor};

pub use crate::rating::Rating;
