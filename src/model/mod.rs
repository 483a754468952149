//! Plain in-memory records served by the GraphQL layer.
//!
//! - [`Book`]: a book with an embedded author snapshot
//! - [`Author`]: an author with a denormalized list of titles
//! - [`BookTitle`]: a bare title, the element type of [`Author::books`]
//! - [`Library`]: a library branch
//! - [`BranchBook`]: a book shelved at a specific branch

mod book;
mod library;

pub use book::{Author, Book, BookTitle};
pub use library::{BranchBook, Library};
