//! Services: the operations the API layer calls.
//!
//! `ReviewService` owns the review lifecycle and keeps restaurant ratings in
//! step with reviews. `RestaurantService` and `VisitorService` are plain CRUD,
//! except that deleting a restaurant or visitor also removes their reviews.
//!
//! All three share one store and one lock manager, passed in explicitly:
//!
//! ```ignore
//! use restaurant_ratings::{NewReview, Services};
//!
//! let services = Services::in_memory();
//! let review = services.reviews.create(NewReview::new(1, 1, 5, "great"))?;
//! let restaurant = services.restaurants.get(1)?;
//! ```

mod error;
mod page;
mod restaurant;
mod review;
mod visitor;

use std::sync::Arc;

pub use error::ServiceError;
pub use page::{Page, PageRequest, SortOrder, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use restaurant::RestaurantService;
pub use review::ReviewService;
pub use visitor::VisitorService;

use crate::lock::{InMemoryLockManager, LockManager};
use crate::model::InMemoryModelStore;
use crate::store::EntityStore;

/// The three services wired to one store and one lock manager.
pub struct Services<S, L = InMemoryLockManager> {
    pub restaurants: RestaurantService<S, L>,
    pub visitors: VisitorService<S, L>,
    pub reviews: ReviewService<S, L>,
}

impl<S: EntityStore, L: LockManager> Services<S, L> {
    pub fn new(store: S, locks: L) -> Self {
        let store = Arc::new(store);
        let reviews = ReviewService::new(store.clone(), Arc::new(locks));
        Self {
            restaurants: RestaurantService::new(store.clone(), reviews.clone()),
            visitors: VisitorService::new(store, reviews.clone()),
            reviews,
        }
    }
}

impl Services<InMemoryModelStore> {
    /// Services over a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(InMemoryModelStore::new(), InMemoryLockManager::new())
    }
}
