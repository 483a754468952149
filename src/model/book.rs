/// A book as served by `Query.books`.
///
/// The author is an embedded copy, not a reference into the author collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub title: Option<String>,
    pub author: Option<Author>,
}

impl Book {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            author: Some(Author::named(author)),
        }
    }

    /// Builds a book from optional mutation arguments. The author object is
    /// always present, even when its name is not.
    pub fn from_parts(title: Option<String>, author: Option<String>) -> Self {
        Self {
            title,
            author: Some(Author {
                id: None,
                name: author,
                books: None,
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    /// Only entries of the author collection carry an id.
    pub id: Option<String>,
    pub name: Option<String>,
    pub books: Option<Vec<BookTitle>>,
}

impl Author {
    /// An embedded author snapshot carrying just a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            books: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_titles<I, S>(mut self, titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.books = Some(titles.into_iter().map(BookTitle::new).collect());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookTitle {
    pub title: Option<String>,
}

impl BookTitle {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
        }
    }
}
