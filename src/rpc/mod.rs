//! rpc - the remote boundary between catalogue clients and the `BookStore`.
//!
//! The four operations are modelled by the `BookApi` trait. Every call is
//! a single request with a single response; nothing here retries.
//!
//! - `LocalApi` calls the store in-process.
//! - `Service` maps command names to JSON handlers and is what the HTTP
//!   router dispatches to.
//! - `HttpApi` (requires the `http` feature) is the client side of that
//!   router.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use book_catalogue::{rpc, BookStore};
//!
//! let store = Arc::new(BookStore::seeded());
//! let service = Arc::new(rpc::book_service(store));
//! rpc::serve(service, "127.0.0.1:8080").await?;
//!
//! // elsewhere
//! let api = rpc::HttpApi::new("http://127.0.0.1:8080");
//! let books = api.get_books().await?;
//! ```

mod context;
mod error;
mod local;
mod service;

#[cfg(feature = "http")]
mod client;
#[cfg(feature = "http")]
mod http;

use std::future::Future;

use crate::book::{Book, BookId};

pub use context::Context;
pub use error::{HandlerError, RemoteError};
pub use local::LocalApi;
pub use service::{book_service, Service};

#[cfg(feature = "http")]
pub use client::HttpApi;
#[cfg(feature = "http")]
pub use http::{router, serve};

/// Command names on the wire.
pub mod commands {
    pub const GET_BOOKS: &str = "getBooks";
    pub const INSERT_BOOK: &str = "insertBook";
    pub const DELETE_BOOK: &str = "deleteBook";
    pub const UPDATE_BOOK: &str = "updateBook";
}

/// The remote book operations, mirroring `BookStore` one to one.
///
/// Results are propagated unchanged: `false` from `delete_book` or
/// `update_book` means "no such record" and is not an error.
pub trait BookApi: Send + Sync {
    /// Every record currently in the store.
    fn get_books(&self) -> impl Future<Output = Result<Vec<Book>, RemoteError>> + Send;

    /// Store a new record; returns the id the store allocated.
    fn insert_book(&self, book: &Book) -> impl Future<Output = Result<BookId, RemoteError>> + Send;

    /// Remove a record; `true` if it existed.
    fn delete_book(&self, id: BookId) -> impl Future<Output = Result<bool, RemoteError>> + Send;

    /// Replace a record; `true` if it existed and was replaced.
    fn update_book(&self, book: &Book) -> impl Future<Output = Result<bool, RemoteError>> + Send;
}
