//! In-process `BookApi` over a shared store.

use std::sync::Arc;

use super::error::RemoteError;
use super::BookApi;
use crate::book::{Book, BookId};
use crate::store::BookStore;

/// Calls the store directly. Never fails with a `RemoteError`.
#[derive(Debug, Clone)]
pub struct LocalApi {
    store: Arc<BookStore>,
}

impl LocalApi {
    pub fn new(store: Arc<BookStore>) -> Self {
        Self { store }
    }
}

impl BookApi for LocalApi {
    async fn get_books(&self) -> Result<Vec<Book>, RemoteError> {
        Ok(self.store.list_all())
    }

    async fn insert_book(&self, book: &Book) -> Result<BookId, RemoteError> {
        Ok(self.store.insert(book.clone()))
    }

    async fn delete_book(&self, id: BookId) -> Result<bool, RemoteError> {
        Ok(self.store.delete(id))
    }

    async fn update_book(&self, book: &Book) -> Result<bool, RemoteError> {
        Ok(self.store.update(book.clone()))
    }
}
