pub mod connection_controller;
pub mod create_collection_controller;
pub mod delete_collection_controller;
pub mod index_controller;
pub mod list_collections_controller;

pub use connection_controller::ConnectionController;
pub use create_collection_controller::CreateCollectionController;
pub use delete_collection_controller::DeleteCollectionController;
pub use index_controller::IndexController;
pub use list_collections_controller::ListCollectionsController;
