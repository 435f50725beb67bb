//! Review lifecycle: create-or-replace, update, delete and lookups.
//!
//! Every mutation finishes by recomputing the owning restaurant's rating from
//! the reviews left in the store, so after any call returns
//! `restaurant.rating == aggregate(reviews of restaurant)`.
//!
//! The review write and the rating write are separate store operations. They
//! run while holding the `restaurant:{id}` lock, so concurrent mutations on one
//! restaurant are applied one after the other and the last recompute sees
//! every review written before it.
//!
//! Locks are always taken visitor first, then restaurant. `create` holds
//! `visitor:{id}` as well, so it cannot race a visitor delete.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::page::{Page, PageRequest, SortOrder};
use super::ServiceError;
use crate::domain::{NewReview, Rating, Review, ReviewKey, MAX_SCORE, MIN_SCORE};
use crate::lock::{InMemoryLockManager, LockGuard, LockManager};
use crate::rating::aggregate;
use crate::store::EntityStore;

pub(crate) fn restaurant_lock_key(restaurant_id: u64) -> String {
    format!("restaurant:{}", restaurant_id)
}

pub(crate) fn visitor_lock_key(visitor_id: u64) -> String {
    format!("visitor:{}", visitor_id)
}

pub struct ReviewService<S, L = InMemoryLockManager> {
    store: Arc<S>,
    locks: Arc<L>,
}

impl<S, L> Clone for ReviewService<S, L> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            locks: self.locks.clone(),
        }
    }
}

impl<S: EntityStore, L: LockManager> ReviewService<S, L> {
    pub fn new(store: Arc<S>, locks: Arc<L>) -> Self {
        Self { store, locks }
    }

    /// Create a review, or replace the existing one for the same visitor and
    /// restaurant, then refresh the restaurant's rating.
    ///
    /// Fails with `Validation` if either reference is missing (restaurant
    /// checked first) and with `NotFound` if either entity does not exist.
    /// Nothing is written on failure.
    pub fn create(&self, input: NewReview) -> Result<Review, ServiceError> {
        let restaurant_id = input
            .restaurant_id
            .ok_or_else(|| ServiceError::validation("restaurant not specified"))?;
        let visitor_id = input
            .visitor_id
            .ok_or_else(|| ServiceError::validation("visitor not specified"))?;
        check_score(input.rating)?;

        let _visitor = self.lock_visitor(visitor_id)?;
        let _restaurant = self.lock_restaurant(restaurant_id)?;

        if !self.store.exists_restaurant(restaurant_id)? || !self.store.exists_visitor(visitor_id)? {
            return Err(ServiceError::not_found("restaurant or visitor not found"));
        }

        let key = ReviewKey::new(visitor_id, restaurant_id);
        let saved = self
            .store
            .save_review(&Review::new(key, input.rating, input.comment))?;
        let rating = self.refresh_rating(restaurant_id)?;

        info!(
            visitor_id,
            restaurant_id,
            score = saved.rating,
            restaurant_rating = %rating,
            "review saved"
        );
        Ok(saved)
    }

    pub fn get(&self, key: ReviewKey) -> Result<Review, ServiceError> {
        self.store
            .find_review_by_key(key)?
            .ok_or_else(|| review_not_found(key))
    }

    /// All reviews, ordered by restaurant then visitor.
    pub fn list(&self) -> Result<Vec<Review>, ServiceError> {
        Ok(self.store.list_reviews()?)
    }

    /// Reviews ordered by score, one page at a time. Equal scores keep the
    /// restaurant-then-visitor order.
    pub fn list_sorted(
        &self,
        order: SortOrder,
        request: PageRequest,
    ) -> Result<Page<Review>, ServiceError> {
        let mut reviews = self.store.list_reviews()?;
        match order {
            SortOrder::Asc => reviews.sort_by_key(|r| r.rating),
            SortOrder::Desc => reviews.sort_by_key(|r| std::cmp::Reverse(r.rating)),
        }
        Ok(Page::slice(reviews, request))
    }

    /// Change the score and comment of an existing review.
    pub fn update(
        &self,
        key: ReviewKey,
        rating: u8,
        comment: impl Into<String>,
    ) -> Result<Review, ServiceError> {
        check_score(rating)?;

        let _guard = self.lock_restaurant(key.restaurant_id)?;

        let mut review = self
            .store
            .find_review_by_key(key)?
            .ok_or_else(|| review_not_found(key))?;
        review.rating = rating;
        review.comment = comment.into();

        let updated = self.store.save_review(&review)?;
        let restaurant_rating = self.refresh_rating(key.restaurant_id)?;

        info!(
            visitor_id = key.visitor_id,
            restaurant_id = key.restaurant_id,
            score = rating,
            restaurant_rating = %restaurant_rating,
            "review updated"
        );
        Ok(updated)
    }

    /// Delete a review. Deleting a review that does not exist succeeds.
    pub fn delete(&self, key: ReviewKey) -> Result<(), ServiceError> {
        let _guard = self.lock_restaurant(key.restaurant_id)?;

        let Some(review) = self.store.find_review_by_key(key)? else {
            debug!(%key, "no review to delete");
            return Ok(());
        };

        self.store.delete_review(&review)?;
        let rating = self.refresh_rating(key.restaurant_id)?;

        info!(
            visitor_id = key.visitor_id,
            restaurant_id = key.restaurant_id,
            restaurant_rating = %rating,
            "review deleted"
        );
        Ok(())
    }

    /// Recompute and persist a restaurant's rating from its current reviews.
    pub fn recompute_rating(&self, restaurant_id: u64) -> Result<Rating, ServiceError> {
        let _guard = self.lock_restaurant(restaurant_id)?;
        self.refresh_rating(restaurant_id)
    }

    pub(crate) fn lock_restaurant(&self, restaurant_id: u64) -> Result<LockGuard<'_, L>, ServiceError> {
        Ok(self.locks.acquire(&restaurant_lock_key(restaurant_id))?)
    }

    /// Take before any restaurant lock.
    pub(crate) fn lock_visitor(&self, visitor_id: u64) -> Result<LockGuard<'_, L>, ServiceError> {
        Ok(self.locks.acquire(&visitor_lock_key(visitor_id))?)
    }

    /// Caller must hold the restaurant's lock.
    fn refresh_rating(&self, restaurant_id: u64) -> Result<Rating, ServiceError> {
        let reviews = self.store.find_reviews_by_restaurant(restaurant_id)?;
        let rating = aggregate(&reviews);

        match self.store.get_restaurant(restaurant_id)? {
            Some(mut restaurant) => {
                restaurant.rating = rating;
                self.store.save_restaurant(&restaurant)?;
                debug!(restaurant_id, reviews = reviews.len(), %rating, "rating recomputed");
            }
            None => {
                warn!(restaurant_id, "rating not stored, restaurant is gone");
            }
        }
        Ok(rating)
    }
}

fn check_score(score: u8) -> Result<(), ServiceError> {
    if (MIN_SCORE..=MAX_SCORE).contains(&score) {
        Ok(())
    } else {
        Err(ServiceError::validation(format!(
            "rating must be between {} and {}",
            MIN_SCORE, MAX_SCORE
        )))
    }
}

fn review_not_found(key: ReviewKey) -> ServiceError {
    ServiceError::not_found(format!(
        "review not found for visitor {} and restaurant {}",
        key.visitor_id, key.restaurant_id
    ))
}
