use anyhow::{Result, bail};
use colored::Colorize;

use crate::config::{CONFIG_FILE_NAME, LibrisConfig};

pub fn handle_init(port: u16) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config_path = cwd.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        bail!(crate::error::LibrisError::AlreadyInitialized(
            config_path.display().to_string()
        ));
    }

    let mut config = LibrisConfig::default();
    config.server.port = port;
    config.save(&config_path)?;

    println!("{} {}", "Created".green(), config_path.display());
    Ok(())
}
