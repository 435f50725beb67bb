//! Review routes. Review paths put the restaurant first:
//! `/api/reviews/:restaurant_id/:visitor_id`.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::dto::{ReviewListQuery, ReviewRequest, ReviewUpdateRequest};
use super::{blocking, ApiError, AppState};
use crate::domain::{Review, ReviewKey};
use crate::lock::LockManager;
use crate::service::{PageRequest, SortOrder, DEFAULT_PAGE_SIZE};
use crate::store::EntityStore;

fn review_key(path: Result<Path<(u64, u64)>, PathRejection>) -> Result<ReviewKey, ApiError> {
    let Path((restaurant_id, visitor_id)) = path?;
    Ok(ReviewKey::new(visitor_id, restaurant_id))
}

/// `GET /api/reviews`, or a sorted page with `?sort=asc|desc&page=&size=`.
pub async fn list<S, L>(
    State(services): State<AppState<S, L>>,
    query: Result<Query<ReviewListQuery>, QueryRejection>,
) -> Result<Response, ApiError>
where
    S: EntityStore + 'static,
    L: LockManager + 'static,
{
    let Query(query) = query?;
    if !query.is_paged() {
        return Ok(Json(services.reviews.list()?).into_response());
    }

    let request = PageRequest::new(
        query.page.unwrap_or(0),
        query.size.unwrap_or(DEFAULT_PAGE_SIZE),
    )?;
    let page = services
        .reviews
        .list_sorted(query.sort.unwrap_or(SortOrder::Asc), request)?;
    Ok(Json(page).into_response())
}

/// `POST /api/reviews` creates or replaces the review of a visitor for a restaurant.
pub async fn create<S, L>(
    State(services): State<AppState<S, L>>,
    body: Result<Json<ReviewRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Review>), ApiError>
where
    S: EntityStore + 'static,
    L: LockManager + 'static,
{
    let Json(request) = body?;
    let input = request.validate()?;
    let review = blocking(move || services.reviews.create(input)).await?;
    Ok((StatusCode::CREATED, Json(review)))
}

pub async fn get<S, L>(
    State(services): State<AppState<S, L>>,
    path: Result<Path<(u64, u64)>, PathRejection>,
) -> Result<Json<Review>, ApiError>
where
    S: EntityStore + 'static,
    L: LockManager + 'static,
{
    let key = review_key(path)?;
    Ok(Json(services.reviews.get(key)?))
}

pub async fn update<S, L>(
    State(services): State<AppState<S, L>>,
    path: Result<Path<(u64, u64)>, PathRejection>,
    body: Result<Json<ReviewUpdateRequest>, JsonRejection>,
) -> Result<Json<Review>, ApiError>
where
    S: EntityStore + 'static,
    L: LockManager + 'static,
{
    let key = review_key(path)?;
    let Json(request) = body?;
    let (rating, comment) = request.validate()?;
    let review = blocking(move || services.reviews.update(key, rating, comment)).await?;
    Ok(Json(review))
}

/// Succeeds whether or not the review existed.
pub async fn delete<S, L>(
    State(services): State<AppState<S, L>>,
    path: Result<Path<(u64, u64)>, PathRejection>,
) -> Result<StatusCode, ApiError>
where
    S: EntityStore + 'static,
    L: LockManager + 'static,
{
    let key = review_key(path)?;
    blocking(move || services.reviews.delete(key)).await?;
    Ok(StatusCode::NO_CONTENT)
}
