//! # Utility Modules
//!
//! This module contains utility functions and constants used throughout the
//! CloudShop backend.
//!
//! ## Available Utilities
//!
//! - **Constants** (`constant`) - Application-wide configuration constants
//! - **Secrets** (`secret`) - Secret lookup from files or environment variables
//! - **Telemetry** (`telemetry`) - Global `tracing` subscriber setup

pub mod constant;
pub mod secret;
pub mod telemetry;
