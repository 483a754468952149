//! # Libris - a small GraphQL endpoint over an in-memory catalogue
//!
//! Libris serves books, authors and library branches from collections seeded
//! at startup. Nothing is persisted to disk.
//!
//! ## Quick Start
//!
//! ```bash
//! # Start the server (GraphiQL on http://127.0.0.1:4000/)
//! libris serve
//!
//! # Run a one-off query
//! libris query '{ books { title author { name } } }'
//!
//! # Print the schema
//! libris schema
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP server
//! - [`model`]: Book, author and library records
//! - [`storage`]: The in-memory store and its seed data

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.libris.yml` files and upward discovery.
pub mod config;

/// Error types and result aliases.
///
/// Defines `LibrisError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema and resolvers.
///
/// Provides the async-graphql schema and the axum server that exposes it.
pub mod graphql;

pub mod logging;

/// Data models for the catalogue.
pub mod model;

/// In-memory storage.
pub mod storage;
