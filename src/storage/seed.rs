use crate::model::{Author, Book, BranchBook, Library};

/// The collections a store starts out with.
#[derive(Debug, Clone, Default)]
pub struct Seed {
    pub books: Vec<Book>,
    pub authors: Vec<Author>,
    pub libraries: Vec<Library>,
    pub branch_books: Vec<BranchBook>,
}

impl Seed {
    /// The fixed catalogue every process starts with.
    pub fn catalogue() -> Self {
        Self {
            books: vec![
                Book::new("The Awakening", "Kate Chopin"),
                Book::new("City of Glass", "Paul Auster"),
            ],
            authors: vec![
                Author::named("Kate Chopin")
                    .with_id("1")
                    .with_titles(["The Awakening"]),
                Author::named("Paul Auster")
                    .with_id("2")
                    .with_titles(["City of Glass"]),
            ],
            libraries: vec![Library::new("downtown"), Library::new("riverside")],
            branch_books: vec![
                BranchBook::new("The Awakening", "Kate Chopin", "riverside"),
                BranchBook::new("City of Glass", "Paul Auster", "downtown"),
            ],
        }
    }
}
