use crate::error::{LibrisError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".libris.yml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LibrisConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub mutations: MutationSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    4000
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Controls whether `addBook` writes the new book back into the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MutationSettings {
    #[serde(default)]
    pub persist: bool,
}

/// How the books collection reacts to `addBook`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MutationMode {
    /// The mutation returns the extended list but leaves the store untouched.
    #[default]
    Ephemeral,
    /// The new book is appended to the store and visible to later queries.
    Persist,
}

impl MutationSettings {
    pub fn mode(&self) -> MutationMode {
        if self.persist {
            MutationMode::Persist
        } else {
            MutationMode::Ephemeral
        }
    }
}

impl LibrisConfig {
    /// Resolves the configuration for a run.
    ///
    /// An explicit path must exist. Without one, the nearest `.libris.yml` above
    /// `start_path` is used, falling back to defaults when there is none.
    pub fn resolve(explicit: Option<&Path>, start_path: &Path) -> Result<(Self, Option<PathBuf>)> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(LibrisError::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            return Ok((Self::load_file(path)?, Some(path.to_path_buf())));
        }

        match Self::find_config_file(start_path) {
            Some(path) => Ok((Self::load_file(&path)?, Some(path))),
            None => Ok((Self::default(), None)),
        }
    }

    pub fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: LibrisConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = LibrisConfig::default();
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.mutations.mode(), MutationMode::Ephemeral);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: LibrisConfig = serde_yaml::from_str("server:\n  port: 8080\n").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert!(!config.mutations.persist);
    }

    #[test]
    fn test_persist_flag() {
        let config: LibrisConfig = serde_yaml::from_str("mutations:\n  persist: true\n").unwrap();
        assert_eq!(config.mutations.mode(), MutationMode::Persist);
    }

    #[test]
    fn test_resolve_searches_upward() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "server:\n  port: 5123\n",
        )
        .unwrap();

        let (config, path) = LibrisConfig::resolve(None, &nested).unwrap();
        assert_eq!(config.server.port, 5123);
        assert_eq!(path.unwrap(), temp_dir.path().join(CONFIG_FILE_NAME));
    }

    #[test]
    fn test_resolve_explicit_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope.yml");
        let result = LibrisConfig::resolve(Some(&missing), temp_dir.path());
        assert!(matches!(result, Err(LibrisError::Config(_))));
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        let mut config = LibrisConfig::default();
        config.server.port = 9000;
        config.mutations.persist = true;
        config.save(&path).unwrap();

        let loaded = LibrisConfig::load_file(&path).unwrap();
        assert_eq!(loaded.server.port, 9000);
        assert!(loaded.mutations.persist);
    }

    #[test]
    fn test_bind_address() {
        assert_eq!(LibrisConfig::default().bind_address(), "127.0.0.1:4000");
    }
}
