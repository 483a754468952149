use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "libris")]
#[command(
    author,
    version,
    about = "A small GraphQL endpoint for books, authors and library branches"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for .libris.yml by default)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true)]
    pub log_file: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the GraphQL server
    Serve {
        /// Address to bind (overrides config)
        #[arg(long, env = "LIBRIS_HOST")]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(short, long, env = "LIBRIS_PORT")]
        port: Option<u16>,

        /// Keep books added through addBook for later queries
        #[arg(long)]
        persist_mutations: bool,
    },

    /// Execute a GraphQL query against a fresh in-memory catalogue
    Query {
        /// GraphQL query string
        query: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Execute a GraphQL mutation (automatically wraps in 'mutation { }')
    Mutate {
        /// Mutation body (without 'mutation' keyword)
        mutation: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Print the schema in SDL form
    Schema,

    /// Write a default .libris.yml to the current directory
    Init {
        /// Port to record in the new config
        #[arg(long, default_value_t = 4000)]
        port: u16,
    },
}
