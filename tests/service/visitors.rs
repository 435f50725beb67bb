use restaurant_ratings::{
    EntityStore, InMemoryLockManager, InMemoryModelStore, NewReview, NewVisitor, ReviewKey,
    ServiceError, Services, Sex,
};

use crate::support::{add_restaurant, add_visitors, noodle_bar, rating_of, trattoria, visitor};

#[test]
fn create_and_fetch() {
    let services = Services::in_memory();

    let alice = services.visitors.create(visitor("Alice")).unwrap();
    let anon = services
        .visitors
        .create(NewVisitor {
            name: String::new(),
            age: 19,
            sex: Sex::Male,
        })
        .unwrap();

    assert_ne!(alice.id, anon.id);
    assert_eq!(alice.name, "Alice");
    assert_eq!(services.visitors.get(anon.id).unwrap(), anon);
    assert_eq!(services.visitors.list().unwrap(), vec![alice, anon]);
}

#[test]
fn get_unknown_visitor_is_not_found() {
    let services = Services::in_memory();
    assert!(matches!(
        services.visitors.get(3),
        Err(ServiceError::NotFound(_))
    ));
}

#[test]
fn update_replaces_fields() {
    let services = Services::in_memory();
    let created = services.visitors.create(visitor("Alice")).unwrap();

    let updated = services
        .visitors
        .update(
            created.id,
            NewVisitor {
                name: "Alice B.".into(),
                age: 31,
                sex: Sex::Female,
            },
        )
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Alice B.");
    assert_eq!(updated.age, 31);
    assert_eq!(services.visitors.get(created.id).unwrap(), updated);
}

#[test]
fn update_unknown_visitor_is_not_found() {
    let services = Services::in_memory();
    let err = services.visitors.update(5, visitor("Nobody")).unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
    assert!(services.visitors.list().unwrap().is_empty());
}

#[test]
fn delete_removes_reviews_and_refreshes_ratings() {
    let store = InMemoryModelStore::new();
    let services = Services::new(store.clone(), InMemoryLockManager::new());
    let a = add_restaurant(&services, trattoria());
    let b = add_restaurant(&services, noodle_bar());
    let visitors = add_visitors(&services, 2);
    let (harsh, kind) = (&visitors[0], &visitors[1]);

    for (v, score) in [(harsh, 1), (kind, 5)] {
        services
            .reviews
            .create(NewReview::new(v.id, a.id, score, "ok"))
            .unwrap();
    }
    services
        .reviews
        .create(NewReview::new(harsh.id, b.id, 2, "no"))
        .unwrap();
    assert_eq!(rating_of(&services, a.id), 3.0);
    assert_eq!(rating_of(&services, b.id), 2.0);

    services.visitors.delete(harsh.id).unwrap();

    assert!(matches!(
        services.visitors.get(harsh.id),
        Err(ServiceError::NotFound(_))
    ));
    assert!(store.find_reviews_by_visitor(harsh.id).unwrap().is_empty());
    assert_eq!(rating_of(&services, a.id), 5.0);
    assert_eq!(rating_of(&services, b.id), 0.0);
    assert!(services
        .reviews
        .get(ReviewKey::new(kind.id, a.id))
        .is_ok());
}

#[test]
fn delete_unknown_visitor_is_a_no_op() {
    let services = Services::in_memory();
    let kept = services.visitors.create(visitor("Kept")).unwrap();

    services.visitors.delete(kept.id + 1).unwrap();

    assert_eq!(services.visitors.list().unwrap(), vec![kept]);
}

#[test]
fn deleted_visitor_cannot_review() {
    let services = Services::in_memory();
    let restaurant = add_restaurant(&services, trattoria());
    let gone = services.visitors.create(visitor("Gone")).unwrap();
    services.visitors.delete(gone.id).unwrap();

    let err = services
        .reviews
        .create(NewReview::new(gone.id, restaurant.id, 5, "ghost"))
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}
