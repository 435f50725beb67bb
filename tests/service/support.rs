//! Shared fixtures: services over a fresh in-memory store, plus helpers to
//! create restaurants and visitors.

use restaurant_ratings::{
    CuisineType, EntityStore, LockManager, NewRestaurant, NewVisitor, Restaurant, Services, Sex,
    Visitor,
};

pub fn trattoria() -> NewRestaurant {
    NewRestaurant {
        name: "Trattoria".into(),
        description: "Pasta and wine".into(),
        cuisine_type: CuisineType::Italian,
        avg_check: 300.0,
    }
}

pub fn noodle_bar() -> NewRestaurant {
    NewRestaurant {
        name: "Noodle Bar".into(),
        description: String::new(),
        cuisine_type: CuisineType::Chinese,
        avg_check: 450.5,
    }
}

pub fn visitor(name: &str) -> NewVisitor {
    NewVisitor {
        name: name.into(),
        age: 30,
        sex: Sex::Female,
    }
}

pub fn add_restaurant<S: EntityStore, L: LockManager>(
    services: &Services<S, L>,
    fields: NewRestaurant,
) -> Restaurant {
    services.restaurants.create(fields).unwrap()
}

pub fn add_visitors<S: EntityStore, L: LockManager>(
    services: &Services<S, L>,
    count: usize,
) -> Vec<Visitor> {
    (0..count)
        .map(|i| services.visitors.create(visitor(&format!("visitor-{}", i))).unwrap())
        .collect()
}

pub fn rating_of<S: EntityStore, L: LockManager>(services: &Services<S, L>, id: u64) -> f64 {
    services.restaurants.get(id).unwrap().rating.as_f64()
}
