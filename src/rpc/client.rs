//! HTTP client side of the rpc router.
//!
//! Requires the `http` feature. Each `BookApi` call is a single
//! `POST {base_url}/{command}` with a JSON body.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::commands;
use super::error::RemoteError;
use super::BookApi;
use crate::book::{Book, BookId};

/// `BookApi` over HTTP, talking to `rpc::router`.
#[derive(Debug, Clone)]
pub struct HttpApi {
    base_url: String,
    http: reqwest::Client,
}

impl HttpApi {
    /// Create a client for a server at `base_url` (e.g. `"http://127.0.0.1:8080"`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Create a client reusing an existing `reqwest::Client`.
    pub fn with_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn call<I, O>(&self, command: &str, input: &I) -> Result<O, RemoteError>
    where
        I: Serialize + ?Sized,
        O: DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, command);
        let resp = self
            .http
            .post(&url)
            .json(input)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(command, error = %e, "rpc call did not complete");
                RemoteError::Transport(e.to_string())
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body: Value = resp.json().await.unwrap_or(Value::Null);
            let message = body["error"]
                .as_str()
                .map(str::to_string)
                .unwrap_or_else(|| status.to_string());
            return Err(RemoteError::Server {
                status: status.as_u16(),
                message,
            });
        }

        resp.json::<O>()
            .await
            .map_err(|e| RemoteError::Decode(e.to_string()))
    }
}

impl BookApi for HttpApi {
    async fn get_books(&self) -> Result<Vec<Book>, RemoteError> {
        self.call(commands::GET_BOOKS, &Value::Null).await
    }

    async fn insert_book(&self, book: &Book) -> Result<BookId, RemoteError> {
        self.call(commands::INSERT_BOOK, book).await
    }

    async fn delete_book(&self, id: BookId) -> Result<bool, RemoteError> {
        self.call(commands::DELETE_BOOK, &id).await
    }

    async fn update_book(&self, book: &Book) -> Result<bool, RemoteError> {
        self.call(commands::UPDATE_BOOK, book).await
    }
}
