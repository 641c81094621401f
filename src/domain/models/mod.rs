mod collection;
mod document;
mod embedding;
mod point;
mod server;

pub use collection::*;
pub use document::*;
pub use embedding::*;
pub use point::*;
pub use server::*;
