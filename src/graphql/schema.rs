use async_graphql::{Context, EmptySubscription, Object, Schema};

use crate::storage::RecordStore;

use super::types::*;

pub type BookqlSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with `store` as the shared record store for every resolver.
pub fn build_schema(store: RecordStore) -> BookqlSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

fn get_store<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a RecordStore> {
    ctx.data::<RecordStore>()
}

pub struct QueryRoot;

/// Root Query
#[Object(name = "Query")]
impl QueryRoot {
    /// A single book
    async fn book(
        &self,
        ctx: &Context<'_>,
        id: Option<i32>,
    ) -> async_graphql::Result<Option<Book>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let store = get_store(ctx)?;
        Ok(store.find_book_by_id(id)?.map(Book::from))
    }

    /// A single author
    async fn author(
        &self,
        ctx: &Context<'_>,
        id: Option<i32>,
    ) -> async_graphql::Result<Option<Author>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let store = get_store(ctx)?;
        Ok(store.find_author_by_id(id)?.map(Author::from))
    }

    /// List of all books
    async fn books(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Book>> {
        let store = get_store(ctx)?;
        Ok(store.books()?.into_iter().map(Book::from).collect())
    }

    /// List of all Authors
    async fn authors(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Author>> {
        let store = get_store(ctx)?;
        Ok(store.authors()?.into_iter().map(Author::from).collect())
    }
}

pub struct MutationRoot;

/// Root Mutation
#[Object(name = "Mutation")]
impl MutationRoot {
    /// Add a book
    async fn add_book(
        &self,
        ctx: &Context<'_>,
        name: String,
        author_id: i32,
    ) -> async_graphql::Result<Book> {
        let store = get_store(ctx)?;
        Ok(store.add_book(name, author_id)?.into())
    }

    /// Add an author
    async fn add_author(&self, ctx: &Context<'_>, name: String) -> async_graphql::Result<Author> {
        let store = get_store(ctx)?;
        Ok(store.add_author(name)?.into())
    }
}
