use anyhow::{bail, Result};

use crate::ConnectionStatus;

use super::super::Container;

pub struct ConnectionController<'a> {
    container: &'a Container,
}

impl<'a> ConnectionController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    /// An unreachable server is returned as an error so the CLI exits
    /// non-zero; the shell just prints it.
    pub async fn check(&self) -> Result<String> {
        let use_case = self.container.test_connection_use_case();

        match use_case.execute().await {
            ConnectionStatus::Connected(server) => Ok(format!(
                "Connected to {} ({}, version {})",
                self.container.target(),
                server.title,
                server.version
            )),
            ConnectionStatus::Unreachable(reason) => bail!(
                "Failed to connect to {}: {}",
                self.container.target(),
                reason
            ),
        }
    }
}
