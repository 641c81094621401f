use std::sync::Arc;

use tracing::{info, warn};

use crate::application::VectorStoreAdmin;
use crate::domain::ConnectionStatus;

/// Checks that the vector store answers. A failure is reported, never raised.
pub struct TestConnectionUseCase {
    store: Arc<dyn VectorStoreAdmin>,
}

impl TestConnectionUseCase {
    pub fn new(store: Arc<dyn VectorStoreAdmin>) -> Self {
        Self { store }
    }

    pub async fn execute(&self) -> ConnectionStatus {
        match self.store.server_info().await {
            Ok(server) => {
                info!("Connected to {} {}", server.title, server.version);
                ConnectionStatus::Connected(server)
            }
            Err(e) => {
                warn!("Connection check failed: {}", e);
                ConnectionStatus::Unreachable(e.to_string())
            }
        }
    }
}
