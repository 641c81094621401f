use anyhow::{bail, Result};

use crate::Commands;

use super::container::Container;
use super::controller::{
    ConnectionController, CreateCollectionController, DeleteCollectionController,
    IndexController, ListCollectionsController,
};

pub struct Router<'a> {
    connection_controller: ConnectionController<'a>,
    create_collection_controller: CreateCollectionController<'a>,
    delete_collection_controller: DeleteCollectionController<'a>,
    index_controller: IndexController<'a>,
    list_collections_controller: ListCollectionsController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            connection_controller: ConnectionController::new(container),
            create_collection_controller: CreateCollectionController::new(container),
            delete_collection_controller: DeleteCollectionController::new(container),
            index_controller: IndexController::new(container),
            list_collections_controller: ListCollectionsController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Check => self.connection_controller.check().await,
            Commands::Create { name } => self.create_collection_controller.create(name).await,
            Commands::Delete { name } => self.delete_collection_controller.delete(name).await,
            Commands::Index {
                collection,
                pdf,
                ids,
            } => self.index_controller.index(collection, pdf, ids.into()).await,
            Commands::List => self.list_collections_controller.list().await,
            Commands::Info { name } => self.list_collections_controller.info(name).await,
            Commands::Shell => bail!("The shell is started from the command line, not routed"),
        }
    }
}
