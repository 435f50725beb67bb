use restaurant_ratings::{
    CuisineType, EntityStore, InMemoryLockManager, InMemoryModelStore, NewRestaurant, NewReview,
    Rating, ServiceError, Services,
};

use crate::support::{add_restaurant, add_visitors, noodle_bar, rating_of, trattoria};

#[test]
fn create_assigns_ids_and_zero_rating() {
    let services = Services::in_memory();

    let first = add_restaurant(&services, trattoria());
    let second = add_restaurant(&services, noodle_bar());

    assert_ne!(first.id, second.id);
    assert_eq!(first.rating, Rating::ZERO);
    assert_eq!(first.name, "Trattoria");
    assert_eq!(first.cuisine_type, CuisineType::Italian);
    assert_eq!(services.restaurants.get(first.id).unwrap(), first);
    assert_eq!(services.restaurants.list().unwrap(), vec![first, second]);
}

#[test]
fn get_unknown_restaurant_is_not_found() {
    let services = Services::in_memory();
    let err = services.restaurants.get(42).unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
    assert_eq!(err.status_code(), 404);
}

#[test]
fn update_replaces_fields_but_keeps_rating() {
    let services = Services::in_memory();
    let restaurant = add_restaurant(&services, trattoria());
    let visitor = &add_visitors(&services, 1)[0];
    services
        .reviews
        .create(NewReview::new(visitor.id, restaurant.id, 4, "good"))
        .unwrap();

    let updated = services
        .restaurants
        .update(
            restaurant.id,
            NewRestaurant {
                name: "Trattoria Nuova".into(),
                description: "Under new management".into(),
                cuisine_type: CuisineType::French,
                avg_check: 550.0,
            },
        )
        .unwrap();

    assert_eq!(updated.id, restaurant.id);
    assert_eq!(updated.name, "Trattoria Nuova");
    assert_eq!(updated.cuisine_type, CuisineType::French);
    assert_eq!(updated.avg_check, 550.0);
    assert_eq!(updated.rating, Rating::from_tenths(40));
    assert_eq!(services.restaurants.get(restaurant.id).unwrap(), updated);
}

#[test]
fn update_unknown_restaurant_is_not_found() {
    let services = Services::in_memory();
    let err = services.restaurants.update(9, trattoria()).unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
    assert!(services.restaurants.list().unwrap().is_empty());
}

#[test]
fn delete_removes_restaurant_and_its_reviews() {
    let store = InMemoryModelStore::new();
    let services = Services::new(store.clone(), InMemoryLockManager::new());
    let doomed = add_restaurant(&services, trattoria());
    let kept = add_restaurant(&services, noodle_bar());
    let visitors = add_visitors(&services, 2);
    for visitor in &visitors {
        services
            .reviews
            .create(NewReview::new(visitor.id, doomed.id, 2, "bad"))
            .unwrap();
        services
            .reviews
            .create(NewReview::new(visitor.id, kept.id, 5, "good"))
            .unwrap();
    }

    services.restaurants.delete(doomed.id).unwrap();

    assert!(matches!(
        services.restaurants.get(doomed.id),
        Err(ServiceError::NotFound(_))
    ));
    assert!(store.find_reviews_by_restaurant(doomed.id).unwrap().is_empty());
    assert_eq!(store.list_reviews().unwrap().len(), 2);
    assert_eq!(rating_of(&services, kept.id), 5.0);
}

#[test]
fn delete_unknown_restaurant_is_a_no_op() {
    let services = Services::in_memory();
    let restaurant = add_restaurant(&services, trattoria());

    services.restaurants.delete(restaurant.id + 100).unwrap();
    services.restaurants.delete(restaurant.id).unwrap();
    services.restaurants.delete(restaurant.id).unwrap();

    assert!(services.restaurants.list().unwrap().is_empty());
}

#[test]
fn ids_are_not_reused_after_delete() {
    let services = Services::in_memory();
    let first = add_restaurant(&services, trattoria());
    services.restaurants.delete(first.id).unwrap();

    let second = add_restaurant(&services, trattoria());
    assert_ne!(first.id, second.id);
}

#[test]
fn min_rating_filter_is_inclusive() {
    let services = Services::in_memory();
    let low = add_restaurant(&services, trattoria());
    let high = add_restaurant(&services, noodle_bar());
    let unrated = add_restaurant(&services, trattoria());
    let visitors = add_visitors(&services, 2);

    for (visitor, score) in visitors.iter().zip([3, 4]) {
        services
            .reviews
            .create(NewReview::new(visitor.id, low.id, score, "ok"))
            .unwrap();
    }
    services
        .reviews
        .create(NewReview::new(visitors[0].id, high.id, 5, "top"))
        .unwrap();

    let ids = |min: f64| -> Vec<u64> {
        services
            .restaurants
            .with_min_rating(min)
            .unwrap()
            .into_iter()
            .map(|r| r.id)
            .collect()
    };

    assert_eq!(ids(3.5), vec![low.id, high.id]);
    assert_eq!(ids(3.6), vec![high.id]);
    assert_eq!(ids(0.0), vec![low.id, high.id, unrated.id]);
    assert!(ids(5.1).is_empty());
}

#[test]
fn min_rating_must_be_a_number() {
    let services = Services::in_memory();
    let err = services.restaurants.with_min_rating(f64::NAN).unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
}
