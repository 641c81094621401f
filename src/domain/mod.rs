//! # Domain Layer
//!
//! Collections, points, documents and the error type shared by every layer.
//! This layer is independent of the HTTP client, PDF reader and CLI.

mod error;
pub mod models;

pub use error::*;
pub use models::*;
