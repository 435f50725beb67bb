//! Restaurants, visitors and reviews, with each restaurant's rating kept equal
//! to the rounded mean of its review scores.
//!
//! The crate is layered bottom-up:
//!
//! - `model`: keyed, serde-encoded storage (`ModelStore`, `InMemoryModelStore`)
//! - `store`: the entity-level contract the services use (`EntityStore`)
//! - `rating`: the pure rating computation (`aggregate`)
//! - `service`: review lifecycle plus restaurant and visitor CRUD
//! - `http`: axum routes over the services (feature `http`)

mod domain;
pub mod lock;
pub mod model;
pub mod rating;
mod service;
mod store;

#[cfg(feature = "http")]
pub mod http;

pub use domain::{
    CuisineType, NewRestaurant, NewReview, NewVisitor, Rating, Restaurant, Review, ReviewKey, Sex,
    Visitor, MAX_SCORE, MIN_SCORE,
};
pub use lock::{InMemoryLockManager, LockManager};
pub use model::{InMemoryModelStore, ModelError, ModelStore};
pub use rating::aggregate;
pub use service::{
    Page, PageRequest, RestaurantService, ReviewService, ServiceError, Services, SortOrder,
    VisitorService, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};
pub use store::EntityStore;
