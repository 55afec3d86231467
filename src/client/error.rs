//! Error types for catalogue actions.

use std::error::Error;
use std::fmt;

use super::edit::EditError;
use crate::book::BookId;
use crate::rpc::RemoteError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogueError {
    /// The remote call did not settle to a result.
    Remote(RemoteError),
    /// The edit buffer or draft could not be turned into a book.
    Invalid(EditError),
    /// No row with this id is in the list.
    UnknownRow(BookId),
    /// The row is not in a state that allows the requested action.
    InvalidState { id: BookId, state: &'static str },
}

impl fmt::Display for CatalogueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogueError::Remote(e) => write!(f, "remote call failed: {}", e),
            CatalogueError::Invalid(e) => write!(f, "invalid input: {}", e),
            CatalogueError::UnknownRow(id) => write!(f, "no row for book {}", id),
            CatalogueError::InvalidState { id, state } => {
                write!(f, "book {} is {}, action not allowed", id, state)
            }
        }
    }
}

impl Error for CatalogueError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CatalogueError::Remote(e) => Some(e),
            CatalogueError::Invalid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RemoteError> for CatalogueError {
    fn from(err: RemoteError) -> Self {
        CatalogueError::Remote(err)
    }
}

impl From<EditError> for CatalogueError {
    fn from(err: EditError) -> Self {
        CatalogueError::Invalid(err)
    }
}
