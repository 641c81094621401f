mod in_memory_vector_store;
mod pdf_text_extractor;
mod placeholder_embedding;
mod qdrant_rest_client;
mod recursive_text_chunker;

pub use in_memory_vector_store::*;
pub use pdf_text_extractor::*;
pub use placeholder_embedding::*;
pub use qdrant_rest_client::*;
pub use recursive_text_chunker::*;
