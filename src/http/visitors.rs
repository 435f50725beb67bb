use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use super::dto::VisitorRequest;
use super::{blocking, ApiError, AppState};
use crate::domain::Visitor;
use crate::lock::LockManager;
use crate::store::EntityStore;

pub async fn list<S, L>(
    State(services): State<AppState<S, L>>,
) -> Result<Json<Vec<Visitor>>, ApiError>
where
    S: EntityStore + 'static,
    L: LockManager + 'static,
{
    Ok(Json(services.visitors.list()?))
}

pub async fn create<S, L>(
    State(services): State<AppState<S, L>>,
    body: Result<Json<VisitorRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Visitor>), ApiError>
where
    S: EntityStore + 'static,
    L: LockManager + 'static,
{
    let Json(request) = body?;
    let visitor = services.visitors.create(request.validate()?)?;
    Ok((StatusCode::CREATED, Json(visitor)))
}

pub async fn get<S, L>(
    State(services): State<AppState<S, L>>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<Json<Visitor>, ApiError>
where
    S: EntityStore + 'static,
    L: LockManager + 'static,
{
    let Path(id) = path?;
    Ok(Json(services.visitors.get(id)?))
}

pub async fn update<S, L>(
    State(services): State<AppState<S, L>>,
    path: Result<Path<u64>, PathRejection>,
    body: Result<Json<VisitorRequest>, JsonRejection>,
) -> Result<Json<Visitor>, ApiError>
where
    S: EntityStore + 'static,
    L: LockManager + 'static,
{
    let Path(id) = path?;
    let Json(request) = body?;
    let fields = request.validate()?;
    let visitor = blocking(move || services.visitors.update(id, fields)).await?;
    Ok(Json(visitor))
}

/// Also removes the visitor's reviews.
pub async fn delete<S, L>(
    State(services): State<AppState<S, L>>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<StatusCode, ApiError>
where
    S: EntityStore + 'static,
    L: LockManager + 'static,
{
    let Path(id) = path?;
    blocking(move || services.visitors.delete(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
