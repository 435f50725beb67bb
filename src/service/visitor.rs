use std::sync::Arc;

use tracing::info;

use super::review::ReviewService;
use super::ServiceError;
use crate::domain::{NewVisitor, Visitor};
use crate::lock::{InMemoryLockManager, LockManager};
use crate::store::EntityStore;

pub struct VisitorService<S, L = InMemoryLockManager> {
    store: Arc<S>,
    reviews: ReviewService<S, L>,
}

impl<S, L> Clone for VisitorService<S, L> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            reviews: self.reviews.clone(),
        }
    }
}

impl<S: EntityStore, L: LockManager> VisitorService<S, L> {
    pub fn new(store: Arc<S>, reviews: ReviewService<S, L>) -> Self {
        Self { store, reviews }
    }

    pub fn create(&self, fields: NewVisitor) -> Result<Visitor, ServiceError> {
        let id = self.store.next_visitor_id()?;
        let visitor = self.store.save_visitor(&Visitor::create(id, fields))?;
        info!(visitor_id = id, "visitor created");
        Ok(visitor)
    }

    pub fn get(&self, id: u64) -> Result<Visitor, ServiceError> {
        self.store
            .get_visitor(id)?
            .ok_or_else(|| visitor_not_found(id))
    }

    pub fn list(&self) -> Result<Vec<Visitor>, ServiceError> {
        Ok(self.store.list_visitors()?)
    }

    pub fn update(&self, id: u64, fields: NewVisitor) -> Result<Visitor, ServiceError> {
        let _guard = self.reviews.lock_visitor(id)?;

        if !self.store.exists_visitor(id)? {
            return Err(visitor_not_found(id));
        }
        let saved = self.store.save_visitor(&Visitor::create(id, fields))?;
        info!(visitor_id = id, "visitor updated");
        Ok(saved)
    }

    /// Delete a visitor and their reviews, refreshing the rating of every
    /// restaurant they had reviewed. Unknown ids are a no-op.
    ///
    /// The visitor lock is held throughout, so no review for this visitor can
    /// be created between the cascade and the final delete.
    pub fn delete(&self, id: u64) -> Result<(), ServiceError> {
        let _guard = self.reviews.lock_visitor(id)?;

        if !self.store.exists_visitor(id)? {
            return Ok(());
        }

        let reviews = self.store.find_reviews_by_visitor(id)?;
        for review in &reviews {
            self.reviews.delete(review.review_key())?;
        }
        self.store.delete_visitor(id)?;

        info!(visitor_id = id, reviews = reviews.len(), "visitor deleted");
        Ok(())
    }
}

fn visitor_not_found(id: u64) -> ServiceError {
    ServiceError::not_found(format!("visitor {} not found", id))
}
