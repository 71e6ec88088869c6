//! # CloudShop - Backend Status Service
//!
//! ## Modules
//!
//! - [`handlers`] - HTTP request handlers for the two endpoints
//! - [`models`] - Configuration, shared state and response bodies
//! - [`services`] - Database connector and its retry loop
//! - [`utils`] - Constants, secret lookup and logging setup

pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::handlers::{api_status, health_check};
use crate::models::AppState;

/// Creates an Axum router with application routes and state.
///
/// # Routes
///
/// - `GET /` - liveness, plain text
/// - `GET /api` - database connectivity status, JSON
///
/// Each request runs as its own Tokio task; the retry loop of `/api`
/// suspends only the task serving that request.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(health_check))
        .route("/api", get(api_status))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
