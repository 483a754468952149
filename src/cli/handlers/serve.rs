use anyhow::{Context, Result};
use colored::Colorize;
use tracing::info;

use crate::config::MutationMode;
use crate::graphql::{bind, run_server};

use super::CommandContext;

pub fn handle_serve(
    mut ctx: CommandContext,
    host: Option<String>,
    port: Option<u16>,
    persist_mutations: bool,
) -> Result<()> {
    if let Some(h) = host {
        ctx.config.server.host = h;
    }
    if let Some(p) = port {
        ctx.config.server.port = p;
    }
    if persist_mutations {
        ctx.config.mutations.persist = true;
    }

    let schema = ctx.schema()?;
    let addr = ctx.config.bind_address();
    let mode = ctx.config.mutations.mode();

    tokio::runtime::Runtime::new()?.block_on(async {
        let listener = bind(&addr).await?;
        let local = listener
            .local_addr()
            .context("Failed to read bound address")?;
        let url = format!("http://{}/", local);

        if let Some(ref path) = ctx.config_path {
            info!(config = %path.display(), "loaded config");
        }
        info!(%url, persist = (mode == MutationMode::Persist), "server ready");
        println!("{} {}", "Server ready at".green(), url.cyan());

        run_server(schema, listener).await?;
        Ok::<(), anyhow::Error>(())
    })
}
