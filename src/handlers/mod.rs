//! # HTTP Request Handlers
//!
//! This module contains all HTTP request handlers for the CloudShop backend.
//!
//! ## Available Handlers
//!
//! - **Liveness** (`health_check`) - `GET /`, process liveness
//! - **API Status** (`api`) - `GET /api`, database connectivity and node identity

mod api;
mod health_check;

pub use api::*;
pub use health_check::*;
