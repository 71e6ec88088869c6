//! # Services
//!
//! This module contains the services used by the HTTP handlers.
//!
//! ## Available Services
//!
//! - **Connector** (`connector`) - Database connection with bounded retry

pub mod connector;
