use async_graphql::{Context, ID, Object, SimpleObject};

use crate::model;
use crate::storage::LibraryStore;

/// Wraps every item as a nullable list element, giving the `[T]` shape.
pub(crate) fn nullable_list<T, U>(items: impl IntoIterator<Item = T>) -> Option<Vec<Option<U>>>
where
    U: From<T>,
{
    Some(items.into_iter().map(|item| Some(U::from(item))).collect())
}

pub struct Book(model::Book);

impl From<model::Book> for Book {
    fn from(b: model::Book) -> Self {
        Self(b)
    }
}

#[Object]
impl Book {
    async fn title(&self) -> Option<&str> {
        self.0.title.as_deref()
    }

    /// The author snapshot stored with the book.
    async fn author(&self) -> Option<Author> {
        self.0.author.clone().map(Author::from)
    }
}

/// Bare title entry of an author's bibliography.
#[derive(SimpleObject)]
pub struct Books {
    pub title: Option<String>,
}

impl From<model::BookTitle> for Books {
    fn from(b: model::BookTitle) -> Self {
        Self { title: b.title }
    }
}

pub struct Author(model::Author);

impl From<model::Author> for Author {
    fn from(a: model::Author) -> Self {
        Self(a)
    }
}

#[Object]
impl Author {
    /// Errors when the author is an embedded snapshot without an id.
    async fn id(&self) -> async_graphql::Result<ID> {
        self.0
            .id
            .clone()
            .map(ID)
            .ok_or_else(|| {
                async_graphql::Error::new("Cannot return null for non-nullable field Author.id")
            })
    }

    async fn name(&self) -> Option<&str> {
        self.0.name.as_deref()
    }

    async fn books(&self) -> Option<Vec<Option<Books>>> {
        self.0
            .books
            .clone()
            .map(|books| books.into_iter().map(|b| Some(b.into())).collect())
    }
}

pub struct Library(model::Library);

impl From<model::Library> for Library {
    fn from(l: model::Library) -> Self {
        Self(l)
    }
}

#[Object]
impl Library {
    async fn branch(&self) -> &str {
        &self.0.branch
    }

    /// Books shelved at this branch, never null.
    async fn books_new(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Vec<BookNew>>> {
        let store = ctx.data::<LibraryStore>()?;
        let books = store
            .books_at(&self.0)
            .into_iter()
            .cloned()
            .map(BookNew::from)
            .collect();
        Ok(Some(books))
    }
}

pub struct BookNew(model::BranchBook);

impl From<model::BranchBook> for BookNew {
    fn from(b: model::BranchBook) -> Self {
        Self(b)
    }
}

#[Object]
impl BookNew {
    async fn title(&self) -> &str {
        &self.0.title
    }

    /// Built from the raw author name on every request.
    async fn author(&self) -> AuthorNew {
        AuthorNew {
            name: self.0.author.clone(),
        }
    }
}

#[derive(SimpleObject)]
pub struct AuthorNew {
    pub name: String,
}
