//! HTTP transport: maps REST routes onto the services.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `GET /health`
//! - `GET|POST /api/restaurants`, `GET|PUT|DELETE /api/restaurants/:id`
//! - `GET|POST /api/visitors`, `GET|PUT|DELETE /api/visitors/:id`
//! - `GET|POST /api/reviews`, `GET|PUT|DELETE /api/reviews/:restaurant_id/:visitor_id`
//!
//! Errors are returned as `{ "status": 404, "error": "Not Found", "message": "..." }`.
//!
//! Handlers that mutate run the service call on tokio's blocking pool, since
//! they may wait on a per-key lock.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use restaurant_ratings::{http, Services};
//!
//! let app = http::router(Arc::new(Services::in_memory()));
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//! axum::serve(listener, app).await?;
//! ```

mod dto;
mod error;
mod restaurants;
mod reviews;
mod visitors;

use std::sync::Arc;

use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

pub use dto::{
    RestaurantListQuery, RestaurantRequest, ReviewListQuery, ReviewRequest, ReviewUpdateRequest,
    VisitorRequest,
};
pub use error::ApiError;

use crate::lock::LockManager;
use crate::service::{ServiceError, Services};
use crate::store::EntityStore;

/// Shared handler state.
pub type AppState<S, L> = Arc<Services<S, L>>;

/// Build the application router over the given services.
pub fn router<S, L>(services: AppState<S, L>) -> Router
where
    S: EntityStore + 'static,
    L: LockManager + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route(
            "/api/restaurants",
            get(restaurants::list::<S, L>).post(restaurants::create::<S, L>),
        )
        .route(
            "/api/restaurants/:id",
            get(restaurants::get::<S, L>)
                .put(restaurants::update::<S, L>)
                .delete(restaurants::delete::<S, L>),
        )
        .route(
            "/api/visitors",
            get(visitors::list::<S, L>).post(visitors::create::<S, L>),
        )
        .route(
            "/api/visitors/:id",
            get(visitors::get::<S, L>)
                .put(visitors::update::<S, L>)
                .delete(visitors::delete::<S, L>),
        )
        .route(
            "/api/reviews",
            get(reviews::list::<S, L>).post(reviews::create::<S, L>),
        )
        .route(
            "/api/reviews/:restaurant_id/:visitor_id",
            get(reviews::get::<S, L>)
                .put(reviews::update::<S, L>)
                .delete(reviews::delete::<S, L>),
        )
        .with_state(services)
}

/// Run a service call on the blocking pool and await its result.
pub(crate) async fn blocking<T, F>(call: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, ServiceError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(call)
        .await
        .map_err(|e| ApiError::Worker(e.to_string()))?
        .map_err(ApiError::from)
}

/// `GET /health`
async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
    }))
}
