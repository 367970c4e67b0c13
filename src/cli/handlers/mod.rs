mod init;
mod migrate;
mod mutate;
mod query;
mod schema;
mod serve;
mod utils;

pub use init::handle_init;
pub use migrate::handle_migrate;
pub use mutate::handle_mutate;
pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::handle_serve;

use crate::config::ServerConfig;
use crate::storage::UserRepository;
use anyhow::{Context, Result};
use std::path::Path;

/// Common context passed to all command handlers that touch the database
pub struct CommandContext {
    pub config: ServerConfig,
}

impl CommandContext {
    pub fn load(config_path: Option<&Path>, database_url: Option<String>) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let config = ServerConfig::load(config_path, &cwd)
            .context("Failed to load userql configuration")?
            .with_database_url(database_url);
        config.validate()?;
        Ok(Self { config })
    }

    /// Open the shared pool and bring the schema up to date.
    pub async fn connect(&self) -> Result<UserRepository> {
        let repo = UserRepository::connect(&self.config)
            .await
            .with_context(|| format!("Failed to connect to {}", self.config.database_url))?;
        repo.migrate().await.context("Failed to apply migrations")?;
        Ok(repo)
    }
}
