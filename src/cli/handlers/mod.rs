mod init;
mod mutate;
mod query;
mod schema;
mod serve;

pub use init::handle_init;
pub use mutate::handle_mutate;
pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::handle_serve;

use crate::config::LibrisConfig;
use crate::graphql::{LibrisSchema, build_schema};
use crate::storage::LibraryStore;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: LibrisConfig,
    pub config_path: Option<PathBuf>,
}

impl CommandContext {
    pub fn new(config: LibrisConfig, config_path: Option<PathBuf>) -> Self {
        Self {
            config,
            config_path,
        }
    }

    /// A schema over a freshly seeded store.
    pub fn schema(&self) -> Result<LibrisSchema> {
        let store = LibraryStore::catalogue(self.config.mutations.mode())
            .context("Failed to seed the catalogue")?;
        Ok(build_schema(store))
    }
}

pub(crate) fn parse_variables(variables: Option<String>) -> Result<async_graphql::Variables> {
    match variables {
        Some(v) => serde_json::from_str(&v).context("Invalid --variables JSON"),
        None => Ok(async_graphql::Variables::default()),
    }
}
