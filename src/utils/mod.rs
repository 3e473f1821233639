//! Shared utilities
//!
//! Error types and logging setup used across the engine.

pub mod error;
pub mod logging;

pub use error::{Result, RouteError};
