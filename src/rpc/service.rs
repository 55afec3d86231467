//! Service - command handler registry and dispatch.
//!
//! `Service<R>` holds a shared resource and a set of named command
//! handlers. Each handler receives a `Context<R>` and returns
//! `Result<Value, HandlerError>`. `book_service` wires the four book
//! commands over a shared `BookStore`.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use book_catalogue::{rpc, BookStore};
//! use serde_json::json;
//!
//! let service = rpc::book_service(Arc::new(BookStore::seeded()));
//! let removed = service.dispatch("deleteBook", json!(1))?;
//! assert_eq!(removed, json!(true));
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use super::commands;
use super::context::Context;
use super::error::HandlerError;
use crate::book::{Book, BookId};
use crate::store::BookStore;

type Handler<R> = Box<dyn Fn(&Context<R>) -> Result<Value, HandlerError> + Send + Sync>;

/// A service that routes named commands to handler functions.
pub struct Service<R> {
    resource: R,
    handlers: HashMap<String, Handler<R>>,
}

impl<R: Send + Sync + 'static> Service<R> {
    /// Create a new service over the given resource.
    pub fn new(resource: R) -> Self {
        Self {
            resource,
            handlers: HashMap::new(),
        }
    }

    /// Register a command handler.
    ///
    /// Uses builder pattern, returns `self` for chaining.
    pub fn command<F>(mut self, name: &str, handler: F) -> Self
    where
        F: Fn(&Context<R>) -> Result<Value, HandlerError> + Send + Sync + 'static,
    {
        self.handlers.insert(name.to_string(), Box::new(handler));
        self
    }

    /// Dispatch a command by name.
    pub fn dispatch(&self, command: &str, input: Value) -> Result<Value, HandlerError> {
        let handler = self
            .handlers
            .get(command)
            .ok_or_else(|| HandlerError::UnknownCommand(command.to_string()))?;

        let ctx = Context::new(input, &self.resource);
        let result = handler(&ctx);
        if let Err(e) = &result {
            tracing::warn!(command, error = %e, "command failed");
        } else {
            tracing::debug!(command, "command handled");
        }
        result
    }

    /// List registered command names.
    pub fn commands(&self) -> Vec<&str> {
        self.handlers.keys().map(|s| s.as_str()).collect()
    }
}

/// Build the service exposing `getBooks`, `insertBook`, `deleteBook` and
/// `updateBook` over a shared store.
pub fn book_service(store: Arc<BookStore>) -> Service<Arc<BookStore>> {
    Service::new(store)
        .command(commands::GET_BOOKS, |ctx| {
            Ok(serde_json::to_value(ctx.resource().list_all())?)
        })
        .command(commands::INSERT_BOOK, |ctx| {
            let book = ctx.input::<Book>()?;
            Ok(Value::from(ctx.resource().insert(book)))
        })
        .command(commands::DELETE_BOOK, |ctx| {
            let id = ctx.input::<BookId>()?;
            Ok(Value::Bool(ctx.resource().delete(id)))
        })
        .command(commands::UPDATE_BOOK, |ctx| {
            let book = ctx.input::<Book>()?;
            Ok(Value::Bool(ctx.resource().update(book)))
        })
}
