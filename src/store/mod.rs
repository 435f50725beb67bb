//! EntityStore - the storage contract the services are written against.
//!
//! Every `ModelStore` is an `EntityStore`, so the in-memory store (or any
//! other backend) plugs straight into the services. Test doubles can also
//! implement `EntityStore` directly.

use crate::domain::{Restaurant, Review, ReviewKey, Visitor};
use crate::model::{Model, ModelError, ModelStore, ModelsExt};

pub trait EntityStore: Send + Sync {
    fn get_restaurant(&self, id: u64) -> Result<Option<Restaurant>, ModelError>;

    /// Upsert a restaurant.
    fn save_restaurant(&self, restaurant: &Restaurant) -> Result<Restaurant, ModelError>;

    fn exists_restaurant(&self, id: u64) -> Result<bool, ModelError>;

    /// Delete a restaurant row only. Returns true if it existed.
    fn delete_restaurant(&self, id: u64) -> Result<bool, ModelError>;

    fn list_restaurants(&self) -> Result<Vec<Restaurant>, ModelError>;

    fn next_restaurant_id(&self) -> Result<u64, ModelError>;

    fn get_visitor(&self, id: u64) -> Result<Option<Visitor>, ModelError>;

    /// Upsert a visitor.
    fn save_visitor(&self, visitor: &Visitor) -> Result<Visitor, ModelError>;

    fn exists_visitor(&self, id: u64) -> Result<bool, ModelError>;

    /// Delete a visitor row only. Returns true if it existed.
    fn delete_visitor(&self, id: u64) -> Result<bool, ModelError>;

    fn list_visitors(&self) -> Result<Vec<Visitor>, ModelError>;

    fn next_visitor_id(&self) -> Result<u64, ModelError>;

    fn find_review_by_key(&self, key: ReviewKey) -> Result<Option<Review>, ModelError>;

    fn find_reviews_by_restaurant(&self, restaurant_id: u64) -> Result<Vec<Review>, ModelError>;

    fn find_reviews_by_visitor(&self, visitor_id: u64) -> Result<Vec<Review>, ModelError>;

    fn list_reviews(&self) -> Result<Vec<Review>, ModelError>;

    /// Upsert a review by its (visitor, restaurant) key.
    fn save_review(&self, review: &Review) -> Result<Review, ModelError>;

    fn delete_review(&self, review: &Review) -> Result<(), ModelError>;
}

impl<S: ModelStore> EntityStore for S {
    fn get_restaurant(&self, id: u64) -> Result<Option<Restaurant>, ModelError> {
        self.models::<Restaurant>().get(&id.to_string())
    }

    fn save_restaurant(&self, restaurant: &Restaurant) -> Result<Restaurant, ModelError> {
        self.models::<Restaurant>().save(restaurant)
    }

    fn exists_restaurant(&self, id: u64) -> Result<bool, ModelError> {
        self.models::<Restaurant>().exists(&id.to_string())
    }

    fn delete_restaurant(&self, id: u64) -> Result<bool, ModelError> {
        self.models::<Restaurant>().delete(&id.to_string())
    }

    fn list_restaurants(&self) -> Result<Vec<Restaurant>, ModelError> {
        let mut restaurants = self.models::<Restaurant>().all()?;
        restaurants.sort_by_key(|r| r.id);
        Ok(restaurants)
    }

    fn next_restaurant_id(&self) -> Result<u64, ModelError> {
        self.models::<Restaurant>().next_id()
    }

    fn get_visitor(&self, id: u64) -> Result<Option<Visitor>, ModelError> {
        self.models::<Visitor>().get(&id.to_string())
    }

    fn save_visitor(&self, visitor: &Visitor) -> Result<Visitor, ModelError> {
        self.models::<Visitor>().save(visitor)
    }

    fn exists_visitor(&self, id: u64) -> Result<bool, ModelError> {
        self.models::<Visitor>().exists(&id.to_string())
    }

    fn delete_visitor(&self, id: u64) -> Result<bool, ModelError> {
        self.models::<Visitor>().delete(&id.to_string())
    }

    fn list_visitors(&self) -> Result<Vec<Visitor>, ModelError> {
        let mut visitors = self.models::<Visitor>().all()?;
        visitors.sort_by_key(|v| v.id);
        Ok(visitors)
    }

    fn next_visitor_id(&self) -> Result<u64, ModelError> {
        self.models::<Visitor>().next_id()
    }

    fn find_review_by_key(&self, key: ReviewKey) -> Result<Option<Review>, ModelError> {
        self.models::<Review>().get(&key.to_string())
    }

    fn find_reviews_by_restaurant(&self, restaurant_id: u64) -> Result<Vec<Review>, ModelError> {
        let mut reviews = self
            .models::<Review>()
            .find(&|r: &Review| r.restaurant_id == restaurant_id)?;
        reviews.sort_by_key(Review::review_key);
        Ok(reviews)
    }

    fn find_reviews_by_visitor(&self, visitor_id: u64) -> Result<Vec<Review>, ModelError> {
        let mut reviews = self
            .models::<Review>()
            .find(&|r: &Review| r.visitor_id == visitor_id)?;
        reviews.sort_by_key(Review::review_key);
        Ok(reviews)
    }

    fn list_reviews(&self) -> Result<Vec<Review>, ModelError> {
        let mut reviews = self.models::<Review>().all()?;
        reviews.sort_by_key(|r| (r.restaurant_id, r.visitor_id));
        Ok(reviews)
    }

    fn save_review(&self, review: &Review) -> Result<Review, ModelError> {
        self.models::<Review>().save(review)
    }

    fn delete_review(&self, review: &Review) -> Result<(), ModelError> {
        self.models::<Review>().delete(&review.key())?;
        Ok(())
    }
}
