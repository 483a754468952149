//! GraphQL schema, resolvers and HTTP server.
//!
//! ## Usage
//!
//! ```bash
//! # Start the server on the configured port (4000 by default)
//! libris serve
//!
//! # Execute a query from the CLI
//! libris query '{ libraries { branch booksNew { title author { name } } } }'
//!
//! # Execute a mutation from the CLI
//! libris mutate 'addBook(title: "New Title", author: "New Author") { title }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `books`, `authors`, `author`, `numberSix`, `numberSeven`, `libraries`
//! - **Mutations**: `addBook`

mod schema;
pub mod server;
mod types;

pub use schema::{LibrisSchema, MutationRoot, QueryRoot, build_schema};
pub use server::{bind, router, run_server};
pub use types::*;
