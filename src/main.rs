use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use libris::cli::handlers::{
    CommandContext, handle_init, handle_mutate, handle_query, handle_schema, handle_serve,
};
use libris::cli::{Cli, Commands};
use libris::config::LibrisConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    libris::logging::init(cli.verbose, cli.log_file.map(PathBuf::from))
        .context("Failed to initialize logging")?;

    match cli.command {
        Commands::Init { port } => handle_init(port),
        Commands::Serve {
            host,
            port,
            persist_mutations,
        } => {
            let ctx = load_context(cli.config)?;
            handle_serve(ctx, host, port, persist_mutations)
        }
        Commands::Query { query, variables } => {
            let ctx = load_context(cli.config)?;
            handle_query(ctx, query, variables)
        }
        Commands::Mutate {
            mutation,
            variables,
        } => {
            let ctx = load_context(cli.config)?;
            handle_mutate(ctx, mutation, variables)
        }
        Commands::Schema => {
            let ctx = load_context(cli.config)?;
            handle_schema(ctx)
        }
    }
}

fn load_context(config: Option<String>) -> Result<CommandContext> {
    let cwd = std::env::current_dir()?;
    let explicit = config.map(PathBuf::from);
    let (config, path) = LibrisConfig::resolve(explicit.as_deref(), &cwd)
        .context("Failed to load libris configuration")?;
    Ok(CommandContext::new(config, path))
}
