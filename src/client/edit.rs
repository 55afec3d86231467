//! Per-row editing buffer.

use std::fmt;

use crate::book::{format_date, parse_date, Book, BookId};

/// One of the four editable fields of a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Author,
    PublishDate,
    Isbn,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Title, Field::Author, Field::PublishDate, Field::Isbn];
}

/// Staged text for the editable fields of a book.
///
/// Nothing is validated until `to_book`, so the buffer can hold whatever
/// the user has typed so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    title: String,
    author: String,
    publish_date: String,
    isbn: String,
}

impl EditSession {
    /// Seed a session from the current field values of `book`.
    pub fn from_book(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            publish_date: format_date(book.publish_date),
            isbn: book.isbn.clone(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Author => &self.author,
            Field::PublishDate => &self.publish_date,
            Field::Isbn => &self.isbn,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Title => self.title = value,
            Field::Author => self.author = value,
            Field::PublishDate => self.publish_date = value,
            Field::Isbn => self.isbn = value,
        }
    }

    /// Build the book this session describes, under the given id.
    pub fn to_book(&self, id: BookId) -> Result<Book, EditError> {
        let publish_date = parse_date(&self.publish_date).map_err(|e| EditError::InvalidDate {
            value: self.publish_date.clone(),
            reason: e.to_string(),
        })?;
        Ok(Book {
            id,
            title: self.title.clone(),
            author: self.author.clone(),
            publish_date,
            isbn: self.isbn.clone(),
        })
    }
}

impl Default for EditSession {
    fn default() -> Self {
        Self::from_book(&Book::empty())
    }
}

/// The edit buffer does not describe a valid book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    InvalidDate { value: String, reason: String },
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditError::InvalidDate { value, reason } => {
                write!(f, "invalid publish date '{}': {}", value, reason)
            }
        }
    }
}

impl std::error::Error for EditError {}
