use async_graphql::{Context, EmptySubscription, ID, Object, Schema};
use tracing::debug;

use crate::model::Book as ModelBook;
use crate::storage::LibraryStore;

use super::types::*;

pub type LibrisSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Builds the schema around `store`, which becomes the data every resolver reads.
pub fn build_schema(store: LibraryStore) -> LibrisSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .register_output_type::<Books>()
        .data(store)
        .finish()
}

fn get_store<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a LibraryStore> {
    ctx.data::<LibraryStore>()
}

pub struct QueryRoot;

#[Object(name = "Query")]
impl QueryRoot {
    /// All books currently in the store
    async fn books(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Vec<Option<Book>>>> {
        let store = get_store(ctx)?;
        Ok(nullable_list(store.books().await))
    }

    /// All authors
    async fn authors(
        &self,
        ctx: &Context<'_>,
    ) -> async_graphql::Result<Option<Vec<Option<Author>>>> {
        let store = get_store(ctx)?;
        Ok(nullable_list(store.authors().iter().cloned()))
    }

    /// Look up an author by id; unknown ids resolve to null
    async fn author(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Option<Author>> {
        let store = get_store(ctx)?;
        let author = store.author(id.as_str()).cloned();
        debug!(id = %id.as_str(), found = author.is_some(), "author lookup");
        Ok(author.map(Author::from))
    }

    async fn number_six(&self) -> i32 {
        6
    }

    async fn number_seven(&self) -> i32 {
        7
    }

    /// All library branches
    async fn libraries(
        &self,
        ctx: &Context<'_>,
    ) -> async_graphql::Result<Option<Vec<Option<Library>>>> {
        let store = get_store(ctx)?;
        Ok(nullable_list(store.libraries().iter().cloned()))
    }
}

pub struct MutationRoot;

#[Object(name = "Mutation")]
impl MutationRoot {
    /// Returns the books list with a new book appended. The store only keeps
    /// the book when mutations are configured to persist.
    async fn add_book(
        &self,
        ctx: &Context<'_>,
        title: Option<String>,
        author: Option<String>,
    ) -> async_graphql::Result<Option<Vec<Option<Book>>>> {
        let store = get_store(ctx)?;
        let books = store.add_book(ModelBook::from_parts(title, author)).await;
        Ok(nullable_list(books))
    }
}
