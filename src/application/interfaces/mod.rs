mod embedding_service;
mod text_chunker;
mod text_extractor;
mod vector_store_admin;

pub use embedding_service::*;
pub use text_chunker::*;
pub use text_extractor::*;
pub use vector_store_admin::*;
