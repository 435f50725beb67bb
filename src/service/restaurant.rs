use std::sync::Arc;

use tracing::info;

use super::review::ReviewService;
use super::ServiceError;
use crate::domain::{NewRestaurant, Restaurant};
use crate::lock::{InMemoryLockManager, LockManager};
use crate::store::EntityStore;

pub struct RestaurantService<S, L = InMemoryLockManager> {
    store: Arc<S>,
    reviews: ReviewService<S, L>,
}

impl<S, L> Clone for RestaurantService<S, L> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            reviews: self.reviews.clone(),
        }
    }
}

impl<S: EntityStore, L: LockManager> RestaurantService<S, L> {
    pub fn new(store: Arc<S>, reviews: ReviewService<S, L>) -> Self {
        Self { store, reviews }
    }

    /// Create a restaurant with a fresh id and a zero rating.
    pub fn create(&self, fields: NewRestaurant) -> Result<Restaurant, ServiceError> {
        let id = self.store.next_restaurant_id()?;
        let restaurant = self.store.save_restaurant(&Restaurant::create(id, fields))?;
        info!(restaurant_id = id, name = %restaurant.name, "restaurant created");
        Ok(restaurant)
    }

    pub fn get(&self, id: u64) -> Result<Restaurant, ServiceError> {
        self.store
            .get_restaurant(id)?
            .ok_or_else(|| restaurant_not_found(id))
    }

    pub fn list(&self) -> Result<Vec<Restaurant>, ServiceError> {
        Ok(self.store.list_restaurants()?)
    }

    /// Replace the editable fields. The rating is derived and stays as is.
    pub fn update(&self, id: u64, fields: NewRestaurant) -> Result<Restaurant, ServiceError> {
        let _guard = self.reviews.lock_restaurant(id)?;

        let mut restaurant = self
            .store
            .get_restaurant(id)?
            .ok_or_else(|| restaurant_not_found(id))?;
        restaurant.apply(fields);

        let saved = self.store.save_restaurant(&restaurant)?;
        info!(restaurant_id = id, "restaurant updated");
        Ok(saved)
    }

    /// Delete a restaurant together with its reviews. Unknown ids are a no-op.
    pub fn delete(&self, id: u64) -> Result<(), ServiceError> {
        let _guard = self.reviews.lock_restaurant(id)?;

        if !self.store.exists_restaurant(id)? {
            return Ok(());
        }

        let reviews = self.store.find_reviews_by_restaurant(id)?;
        for review in &reviews {
            self.store.delete_review(review)?;
        }
        self.store.delete_restaurant(id)?;

        info!(restaurant_id = id, reviews = reviews.len(), "restaurant deleted");
        Ok(())
    }

    /// Restaurants rated at least `min_rating`, ordered by id.
    pub fn with_min_rating(&self, min_rating: f64) -> Result<Vec<Restaurant>, ServiceError> {
        if !min_rating.is_finite() {
            return Err(ServiceError::validation("minimum rating must be a number"));
        }
        let mut restaurants = self.store.list_restaurants()?;
        restaurants.retain(|r| r.rating.as_f64() >= min_rating);
        Ok(restaurants)
    }
}

fn restaurant_not_found(id: u64) -> ServiceError {
    ServiceError::not_found(format!("restaurant {} not found", id))
}
