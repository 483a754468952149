use thiserror::Error;

#[derive(Error, Debug)]
pub enum LibrisError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Logging setup failed: {0}")]
    Logging(String),

    #[error("Duplicate author id in seed data: {0}")]
    DuplicateAuthorId(String),

    #[error("Config already exists at {0}")]
    AlreadyInitialized(String),
}

pub type Result<T> = std::result::Result<T, LibrisError>;
