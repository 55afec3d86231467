//! BookList - the client's keyed, ordered mirror of the store.
//!
//! Rows keep the order in which they arrived: a full refresh takes the
//! server's order, later upserts replace in place or append.

use std::fmt;

use super::edit::EditSession;
use crate::book::{Book, BookId};

/// Which of the row renderings is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowMode {
    Display,
    Editing(EditSession),
    /// A call for this row is in flight.
    Submitting,
}

impl RowMode {
    pub fn name(&self) -> &'static str {
        match self {
            RowMode::Display => "display",
            RowMode::Editing(_) => "editing",
            RowMode::Submitting => "submitting",
        }
    }
}

impl fmt::Display for RowMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A book as the client shows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookView {
    pub book: Book,
    pub mode: RowMode,
}

impl BookView {
    /// A row in display mode.
    pub fn display(book: Book) -> Self {
        Self {
            book,
            mode: RowMode::Display,
        }
    }

    pub fn id(&self) -> BookId {
        self.book.id
    }

    /// True while the edit form should be rendered for this row.
    pub fn is_edited(&self) -> bool {
        matches!(self.mode, RowMode::Editing(_))
    }

    pub fn edit_session(&self) -> Option<&EditSession> {
        match &self.mode {
            RowMode::Editing(session) => Some(session),
            _ => None,
        }
    }
}

/// Insertion-ordered collection of views, unique by book id.
#[derive(Debug, Clone, Default)]
pub struct BookList {
    rows: Vec<BookView>,
}

impl BookList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every row and take `books` as the new contents, all in display mode.
    pub fn replace_all(&mut self, books: impl IntoIterator<Item = Book>) {
        self.rows.clear();
        for book in books {
            self.add_or_replace(BookView::display(book));
        }
    }

    /// Upsert by id: replace the row in place if present, otherwise append.
    pub fn add_or_replace(&mut self, view: BookView) {
        match self.position(view.id()) {
            Some(index) => self.rows[index] = view,
            None => self.rows.push(view),
        }
    }

    /// Remove the row with this id, if any.
    pub fn remove(&mut self, id: BookId) -> Option<BookView> {
        self.position(id).map(|index| self.rows.remove(index))
    }

    pub fn get(&self, id: BookId) -> Option<&BookView> {
        self.rows.iter().find(|row| row.id() == id)
    }

    pub fn get_mut(&mut self, id: BookId) -> Option<&mut BookView> {
        self.rows.iter_mut().find(|row| row.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BookView> {
        self.rows.iter()
    }

    pub fn ids(&self) -> Vec<BookId> {
        self.rows.iter().map(BookView::id).collect()
    }

    pub fn snapshot(&self) -> Vec<BookView> {
        self.rows.clone()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn position(&self, id: BookId) -> Option<usize> {
        self.rows.iter().position(|row| row.id() == id)
    }
}
