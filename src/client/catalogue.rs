//! Catalogue - row lifecycle, new-book draft and status message.
//!
//! Each row moves through `Display -> Editing -> Submitting` and ends up
//! either back in `Display` or removed from the list. The server is never
//! assumed to agree: every action awaits its call and reconciles the list
//! with the result.
//!
//! State lives behind a mutex that is released before any call is awaited,
//! so different rows can be submitting at the same time. A refresh that
//! lands while another call is in flight may be followed by that call
//! re-inserting or removing its row; the last write per id wins.

use parking_lot::Mutex;

use super::edit::{EditSession, Field};
use super::error::CatalogueError;
use super::list::{BookList, BookView, RowMode};
use super::listeners::{ListenerId, Listeners};
use crate::book::BookId;
use crate::rpc::BookApi;

/// What part of the catalogue state changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Rows,
    Draft,
    Message,
}

/// Result of committing an edited row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The server replaced the record; the row is back in display mode.
    Updated,
    /// The record was gone server-side; the row has been dropped.
    NotFound,
}

/// Result of removing a row. The row is gone locally either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    AlreadyRemoved,
}

struct State {
    list: BookList,
    draft: EditSession,
    message: String,
}

/// Client-side catalogue bound to a `BookApi`.
pub struct Catalogue<A> {
    api: A,
    state: Mutex<State>,
    listeners: Listeners<Change>,
}

impl<A: BookApi> Catalogue<A> {
    /// Empty list, blank draft, no message. Call `refresh` to load rows.
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: Mutex::new(State {
                list: BookList::new(),
                draft: EditSession::default(),
                message: String::new(),
            }),
            listeners: Listeners::new(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Replace the whole list with what the server holds now.
    ///
    /// Rows that only existed locally, and any open edit sessions, are lost.
    pub async fn refresh(&self) -> Result<(), CatalogueError> {
        let books = match self.api.get_books().await {
            Ok(books) => books,
            Err(e) => {
                tracing::warn!(error = %e, "refresh failed");
                self.set_message("Failed to update collection".to_string());
                return Err(e.into());
            }
        };
        tracing::debug!(count = books.len(), "collection refreshed");
        {
            let mut state = self.state.lock();
            state.list.replace_all(books);
            state.message = "Collection updated".to_string();
        }
        self.notify(&[Change::Rows, Change::Message]);
        Ok(())
    }

    /// `Display -> Editing`, seeding a session from the row's current values.
    pub fn edit(&self, id: BookId) -> Result<(), CatalogueError> {
        {
            let mut state = self.state.lock();
            let row = state.list.get_mut(id).ok_or(CatalogueError::UnknownRow(id))?;
            if row.mode != RowMode::Display {
                return Err(invalid_state(row));
            }
            row.mode = RowMode::Editing(EditSession::from_book(&row.book));
        }
        self.notify(&[Change::Rows]);
        Ok(())
    }

    /// `Editing -> Display`, discarding the session.
    pub fn cancel(&self, id: BookId) -> Result<(), CatalogueError> {
        {
            let mut state = self.state.lock();
            let row = state.list.get_mut(id).ok_or(CatalogueError::UnknownRow(id))?;
            if !row.is_edited() {
                return Err(invalid_state(row));
            }
            row.mode = RowMode::Display;
        }
        self.notify(&[Change::Rows]);
        Ok(())
    }

    /// Current text of a field in a row's edit session.
    pub fn edit_field(&self, id: BookId, field: Field) -> Option<String> {
        let state = self.state.lock();
        state
            .list
            .get(id)
            .and_then(BookView::edit_session)
            .map(|session| session.get(field).to_string())
    }

    pub fn set_edit_field(
        &self,
        id: BookId,
        field: Field,
        value: impl Into<String>,
    ) -> Result<(), CatalogueError> {
        {
            let mut state = self.state.lock();
            let row = state.list.get_mut(id).ok_or(CatalogueError::UnknownRow(id))?;
            match &mut row.mode {
                RowMode::Editing(session) => session.set(field, value),
                _ => return Err(invalid_state(row)),
            }
        }
        self.notify(&[Change::Rows]);
        Ok(())
    }

    /// Commit a row's edit session through `update_book`.
    ///
    /// An unparseable session leaves the row in `Editing`. If the call
    /// itself fails the row goes back to `Editing` with its session intact.
    pub async fn update(&self, id: BookId) -> Result<UpdateOutcome, CatalogueError> {
        let (book, session) = {
            let mut state = self.state.lock();
            let row = state.list.get_mut(id).ok_or(CatalogueError::UnknownRow(id))?;
            let session = match &row.mode {
                RowMode::Editing(session) => session.clone(),
                _ => return Err(invalid_state(row)),
            };
            let book = session.to_book(id)?;
            row.mode = RowMode::Submitting;
            (book, session)
        };
        self.notify(&[Change::Rows]);

        match self.api.update_book(&book).await {
            Ok(true) => {
                tracing::debug!(id, "book updated");
                {
                    let mut state = self.state.lock();
                    state.message = format!("Updated book '{}'", book.title);
                    state.list.add_or_replace(BookView::display(book));
                }
                self.notify(&[Change::Rows, Change::Message]);
                Ok(UpdateOutcome::Updated)
            }
            Ok(false) => {
                tracing::debug!(id, "book vanished before update");
                {
                    let mut state = self.state.lock();
                    state.list.remove(id);
                    state.message = format!("Book '{}' has not been found, removed", book.title);
                }
                self.notify(&[Change::Rows, Change::Message]);
                Ok(UpdateOutcome::NotFound)
            }
            Err(e) => {
                tracing::warn!(id, error = %e, "update failed");
                {
                    let mut state = self.state.lock();
                    if let Some(row) = state.list.get_mut(id) {
                        if row.mode == RowMode::Submitting {
                            row.mode = RowMode::Editing(session);
                        }
                    }
                    state.message = format!("Failed to update book '{}'", book.title);
                }
                self.notify(&[Change::Rows, Change::Message]);
                Err(e.into())
            }
        }
    }

    /// Delete a row's record through `delete_book` and drop the row.
    ///
    /// The row is dropped whether or not the server still had the record.
    /// If the call fails the row goes back to `Display`.
    pub async fn remove(&self, id: BookId) -> Result<RemoveOutcome, CatalogueError> {
        let title = {
            let mut state = self.state.lock();
            let row = state.list.get_mut(id).ok_or(CatalogueError::UnknownRow(id))?;
            if row.mode != RowMode::Display {
                return Err(invalid_state(row));
            }
            row.mode = RowMode::Submitting;
            let title = row.book.title.clone();
            state.message = format!("Removing book '{}'", title);
            title
        };
        self.notify(&[Change::Rows, Change::Message]);

        match self.api.delete_book(id).await {
            Ok(removed) => {
                tracing::debug!(id, removed, "book removed locally");
                {
                    let mut state = self.state.lock();
                    state.list.remove(id);
                    state.message = if removed {
                        format!("Removed book '{}'", title)
                    } else {
                        format!("Book '{}' was already removed", title)
                    };
                }
                self.notify(&[Change::Rows, Change::Message]);
                Ok(if removed {
                    RemoveOutcome::Removed
                } else {
                    RemoveOutcome::AlreadyRemoved
                })
            }
            Err(e) => {
                tracing::warn!(id, error = %e, "remove failed");
                {
                    let mut state = self.state.lock();
                    if let Some(row) = state.list.get_mut(id) {
                        if row.mode == RowMode::Submitting {
                            row.mode = RowMode::Display;
                        }
                    }
                    state.message = format!("Failed to remove book '{}'", title);
                }
                self.notify(&[Change::Rows, Change::Message]);
                Err(e.into())
            }
        }
    }

    /// Submit the draft through `insert_book`.
    ///
    /// On success the new row is appended in display mode and the draft is
    /// reset to blank. On any failure the draft is kept as typed.
    pub async fn add(&self) -> Result<BookId, CatalogueError> {
        let mut book = {
            let mut state = self.state.lock();
            let book = state.draft.to_book(0)?;
            state.message = "Adding book".to_string();
            book
        };
        self.notify(&[Change::Message]);

        let id = match self.api.insert_book(&book).await {
            Ok(id) => id,
            Err(e) => {
                tracing::warn!(error = %e, "insert failed");
                self.set_message(format!("Failed to add book '{}'", book.title));
                return Err(e.into());
            }
        };
        tracing::debug!(id, "book added");

        book.id = id;
        {
            let mut state = self.state.lock();
            state.message = format!("Added {}", book.title);
            state.list.add_or_replace(BookView::display(book));
            state.draft = EditSession::default();
        }
        self.notify(&[Change::Rows, Change::Draft, Change::Message]);
        Ok(id)
    }

    pub fn draft_field(&self, field: Field) -> String {
        self.state.lock().draft.get(field).to_string()
    }

    pub fn set_draft_field(&self, field: Field, value: impl Into<String>) {
        self.state.lock().draft.set(field, value);
        self.notify(&[Change::Draft]);
    }

    /// Ordered snapshot of every row.
    pub fn rows(&self) -> Vec<BookView> {
        self.state.lock().list.snapshot()
    }

    pub fn row(&self, id: BookId) -> Option<BookView> {
        self.state.lock().list.get(id).cloned()
    }

    /// The latest status line for the user.
    pub fn message(&self) -> String {
        self.state.lock().message.clone()
    }

    /// Get notified after every state change.
    pub fn subscribe<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&Change) + Send + Sync + 'static,
    {
        self.listeners.on(listener)
    }

    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        self.listeners.off(id)
    }

    fn set_message(&self, message: String) {
        self.state.lock().message = message;
        self.notify(&[Change::Message]);
    }

    fn notify(&self, changes: &[Change]) {
        for change in changes {
            self.listeners.emit(change);
        }
    }
}

fn invalid_state(row: &BookView) -> CatalogueError {
    CatalogueError::InvalidState {
        id: row.id(),
        state: row.mode.name(),
    }
}
