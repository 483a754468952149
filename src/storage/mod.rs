//! In-memory storage for the catalogue.
//!
//! Nothing is written to disk: every [`LibraryStore`] starts from a [`Seed`]
//! and lives as long as the schema that owns it.
//!
//! ## Components
//!
//! - [`LibraryStore`]: read access to all collections plus the `addBook` write path
//! - [`Seed`]: the initial collections, [`Seed::catalogue`] being the fixed default

mod library_store;
mod seed;

pub use library_store::LibraryStore;
pub use seed::Seed;
