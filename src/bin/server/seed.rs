use restaurant_ratings::{
    CuisineType, EntityStore, LockManager, NewRestaurant, NewReview, NewVisitor, ServiceError,
    Services, Sex,
};
use tracing::info;

/// Populate an empty store with a small demo data set, going through the
/// services so ratings come out consistent.
pub fn seed_demo_data<S, L>(services: &Services<S, L>) -> Result<(), ServiceError>
where
    S: EntityStore,
    L: LockManager,
{
    let visitors = [
        ("John Doe", 25, Sex::Male),
        ("Jaden Smith", 30, Sex::Female),
        ("Alex Kim", 41, Sex::Male),
    ]
    .into_iter()
    .map(|(name, age, sex)| {
        services.visitors.create(NewVisitor {
            name: name.to_string(),
            age,
            sex,
        })
    })
    .collect::<Result<Vec<_>, _>>()?;

    let restaurants = [
        ("Little Potato", "Baked potatoes", CuisineType::Italian, 300.0),
        ("Golden Wok", "Noodles and dumplings", CuisineType::Chinese, 500.0),
        ("Skewer House", "Grill", CuisineType::Russian, 700.0),
    ]
    .into_iter()
    .map(|(name, description, cuisine_type, avg_check)| {
        services.restaurants.create(NewRestaurant {
            name: name.to_string(),
            description: description.to_string(),
            cuisine_type,
            avg_check,
        })
    })
    .collect::<Result<Vec<_>, _>>()?;

    let reviews = [
        (0, 0, 5, "Had a wonderful evening"),
        (0, 1, 4, "Decent"),
        (1, 0, 3, "Slow service"),
        (2, 2, 4, "Good kebab"),
    ];
    for (visitor, restaurant, rating, comment) in reviews {
        services.reviews.create(NewReview::new(
            visitors[visitor].id,
            restaurants[restaurant].id,
            rating,
            comment,
        ))?;
    }

    info!(
        visitors = visitors.len(),
        restaurants = restaurants.len(),
        reviews = reviews.len(),
        "demo data seeded"
    );
    Ok(())
}
