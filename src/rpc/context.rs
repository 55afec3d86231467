//! Context passed to command handlers.
//!
//! Carries the JSON input and a reference to the resource the service was
//! built over.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::HandlerError;

/// The context passed to every command handler.
///
/// Generic over `R` so the same service machinery works for a shared
/// `BookStore` or for a stand-in in tests.
pub struct Context<'a, R> {
    input: Value,
    resource: &'a R,
}

impl<'a, R> Context<'a, R> {
    pub(crate) fn new(input: Value, resource: &'a R) -> Self {
        Self { input, resource }
    }

    /// Deserialize the input payload into a typed value.
    pub fn input<T: DeserializeOwned>(&self) -> Result<T, HandlerError> {
        serde_json::from_value(self.input.clone())
            .map_err(|e| HandlerError::DecodeFailed(e.to_string()))
    }

    /// Get a reference to the underlying resource.
    pub fn resource(&self) -> &R {
        self.resource
    }
}
