use std::collections::HashSet;

use tokio::sync::RwLock;
use tracing::debug;

use super::seed::Seed;
use crate::config::MutationMode;
use crate::error::{LibrisError, Result};
use crate::model::{Author, Book, BranchBook, Library};

/// Owns the catalogue for one schema instance.
///
/// Only the books collection can change, and only when the store was built
/// with [`MutationMode::Persist`]. Writes go through a single lock so readers
/// never see a half-applied `addBook`.
pub struct LibraryStore {
    books: RwLock<Vec<Book>>,
    authors: Vec<Author>,
    libraries: Vec<Library>,
    branch_books: Vec<BranchBook>,
    mode: MutationMode,
}

impl LibraryStore {
    pub fn new(seed: Seed, mode: MutationMode) -> Result<Self> {
        let mut seen = HashSet::new();
        for id in seed.authors.iter().filter_map(|a| a.id.as_deref()) {
            if !seen.insert(id) {
                return Err(LibrisError::DuplicateAuthorId(id.to_string()));
            }
        }

        Ok(Self {
            books: RwLock::new(seed.books),
            authors: seed.authors,
            libraries: seed.libraries,
            branch_books: seed.branch_books,
            mode,
        })
    }

    /// A store holding [`Seed::catalogue`].
    pub fn catalogue(mode: MutationMode) -> Result<Self> {
        Self::new(Seed::catalogue(), mode)
    }

    pub fn mode(&self) -> MutationMode {
        self.mode
    }

    /// Snapshot of the books collection at call time.
    pub async fn books(&self) -> Vec<Book> {
        self.books.read().await.clone()
    }

    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    /// First author whose id equals `id`.
    pub fn author(&self, id: &str) -> Option<&Author> {
        self.authors.iter().find(|a| a.id.as_deref() == Some(id))
    }

    pub fn libraries(&self) -> &[Library] {
        &self.libraries
    }

    /// Books shelved at `library`, in seed order.
    pub fn books_at(&self, library: &Library) -> Vec<&BranchBook> {
        let books: Vec<_> = self
            .branch_books
            .iter()
            .filter(|b| b.is_shelved_at(library))
            .collect();
        debug!(branch = %library.branch, count = books.len(), "filtered branch books");
        books
    }

    /// Returns the books collection with `book` appended.
    ///
    /// In [`MutationMode::Ephemeral`] the store is left unchanged, so the new
    /// book only exists in the returned list.
    pub async fn add_book(&self, book: Book) -> Vec<Book> {
        match self.mode {
            MutationMode::Ephemeral => {
                let mut books = self.books.read().await.clone();
                books.push(book);
                debug!(count = books.len(), "addBook computed without persisting");
                books
            }
            MutationMode::Persist => {
                let mut books = self.books.write().await;
                books.push(book);
                debug!(count = books.len(), "addBook persisted");
                books.clone()
            }
        }
    }
}
