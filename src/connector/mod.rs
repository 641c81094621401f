//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Vector store (Qdrant REST API, in-memory stand-in)
//! - PDF text extraction (pdf-extract)
//! - Text chunking (text-splitter)
//! - Embeddings (placeholder vectors)
//!
//! plus the `api` wiring that turns CLI commands into use case calls.

pub mod adapter;
pub mod api;

pub use adapter::*;
