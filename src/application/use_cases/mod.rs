mod create_collection;
mod delete_collection;
mod index_pdf;
mod list_collections;
mod test_connection;

pub use create_collection::*;
pub use delete_collection::*;
pub use index_pdf::*;
pub use list_collections::*;
pub use test_connection::*;
