use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use super::dto::{RestaurantListQuery, RestaurantRequest};
use super::{blocking, ApiError, AppState};
use crate::domain::Restaurant;
use crate::lock::LockManager;
use crate::store::EntityStore;

/// `GET /api/restaurants[?minRating=x]`
pub async fn list<S, L>(
    State(services): State<AppState<S, L>>,
    query: Result<Query<RestaurantListQuery>, QueryRejection>,
) -> Result<Json<Vec<Restaurant>>, ApiError>
where
    S: EntityStore + 'static,
    L: LockManager + 'static,
{
    let Query(query) = query?;
    let restaurants = match query.min_rating {
        Some(min) => services.restaurants.with_min_rating(min)?,
        None => services.restaurants.list()?,
    };
    Ok(Json(restaurants))
}

/// `POST /api/restaurants`
pub async fn create<S, L>(
    State(services): State<AppState<S, L>>,
    body: Result<Json<RestaurantRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Restaurant>), ApiError>
where
    S: EntityStore + 'static,
    L: LockManager + 'static,
{
    let Json(request) = body?;
    let restaurant = services.restaurants.create(request.validate()?)?;
    Ok((StatusCode::CREATED, Json(restaurant)))
}

/// `GET /api/restaurants/:id`
pub async fn get<S, L>(
    State(services): State<AppState<S, L>>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<Json<Restaurant>, ApiError>
where
    S: EntityStore + 'static,
    L: LockManager + 'static,
{
    let Path(id) = path?;
    Ok(Json(services.restaurants.get(id)?))
}

/// `PUT /api/restaurants/:id`
pub async fn update<S, L>(
    State(services): State<AppState<S, L>>,
    path: Result<Path<u64>, PathRejection>,
    body: Result<Json<RestaurantRequest>, JsonRejection>,
) -> Result<Json<Restaurant>, ApiError>
where
    S: EntityStore + 'static,
    L: LockManager + 'static,
{
    let Path(id) = path?;
    let Json(request) = body?;
    let fields = request.validate()?;
    let restaurant = blocking(move || services.restaurants.update(id, fields)).await?;
    Ok(Json(restaurant))
}

/// `DELETE /api/restaurants/:id`
pub async fn delete<S, L>(
    State(services): State<AppState<S, L>>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<StatusCode, ApiError>
where
    S: EntityStore + 'static,
    L: LockManager + 'static,
{
    let Path(id) = path?;
    blocking(move || services.restaurants.delete(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
