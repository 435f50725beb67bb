use serde::{Deserialize, Serialize};

use crate::model::Model;
use crate::rating::Rating;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CuisineType {
    Italian,
    Chinese,
    Russian,
    Japanese,
    French,
    Other,
}

/// A restaurant as persisted. `rating` is derived from its reviews and is
/// only written by the review lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub cuisine_type: CuisineType,
    pub avg_check: f64,
    #[serde(default)]
    pub rating: Rating,
}

/// Editable restaurant fields, used for both create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRestaurant {
    pub name: String,
    pub description: String,
    pub cuisine_type: CuisineType,
    pub avg_check: f64,
}

impl Restaurant {
    /// A freshly created restaurant starts without reviews, so at rating zero.
    pub fn create(id: u64, fields: NewRestaurant) -> Self {
        Self {
            id,
            name: fields.name,
            description: fields.description,
            cuisine_type: fields.cuisine_type,
            avg_check: fields.avg_check,
            rating: Rating::ZERO,
        }
    }

    /// Overwrite the editable fields, leaving `id` and `rating` untouched.
    pub fn apply(&mut self, fields: NewRestaurant) {
        self.name = fields.name;
        self.description = fields.description;
        self.cuisine_type = fields.cuisine_type;
        self.avg_check = fields.avg_check;
    }
}

impl Model for Restaurant {
    const COLLECTION: &'static str = "restaurants";

    fn key(&self) -> String {
        self.id.to_string()
    }
}
