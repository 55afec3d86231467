//! client - the catalogue as a browser-side view sees it.
//!
//! `Catalogue` keeps a `BookList` in step with the store behind a
//! `BookApi`, stages edits in `EditSession`s and reports every change to
//! its subscribers. Rendering is left to the caller: draw the edit form
//! for rows where `is_edited()` holds, the display row otherwise.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use book_catalogue::client::{Catalogue, Field};
//! use book_catalogue::rpc::LocalApi;
//! use book_catalogue::BookStore;
//!
//! let catalogue = Catalogue::new(LocalApi::new(Arc::new(BookStore::seeded())));
//! catalogue.refresh().await?;
//!
//! catalogue.edit(1)?;
//! catalogue.set_edit_field(1, Field::Title, "New Title")?;
//! catalogue.update(1).await?;
//! ```

mod catalogue;
mod edit;
mod error;
mod list;
mod listeners;

pub use catalogue::{Catalogue, Change, RemoveOutcome, UpdateOutcome};
pub use edit::{EditError, EditSession, Field};
pub use error::CatalogueError;
pub use list::{BookList, BookView, RowMode};
pub use listeners::{ListenerId, Listeners};
