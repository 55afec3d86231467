//! BookStore - the authoritative, process-lifetime collection of books.
//!
//! Backed by a sharded `DashMap` so reads never block and writes only lock
//! the shard holding the target id. Ids come from an `AtomicU64` counter,
//! so concurrent inserts can never receive the same id.
//!
//! ## Seed policy
//!
//! `BookStore::seeded()` reserves id 1 for the seed record and leaves the
//! counter at 1; the first insert therefore yields id 2.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::NaiveDate;
use dashmap::DashMap;

use crate::book::{Book, BookId};

/// Concurrent in-memory book store.
#[derive(Debug, Default)]
pub struct BookStore {
    books: DashMap<BookId, Book>,
    next_id: AtomicU64,
}

impl BookStore {
    /// Create an empty store. The first insert yields id 1.
    pub fn new() -> Self {
        Self {
            books: DashMap::new(),
            next_id: AtomicU64::new(0),
        }
    }

    /// Create a store holding the seed record under id 1.
    pub fn seeded() -> Self {
        let store = Self::new();
        store.insert(seed_book());
        store
    }

    /// Snapshot of every record, ordered by id.
    pub fn list_all(&self) -> Vec<Book> {
        let mut books: Vec<Book> = self.books.iter().map(|entry| entry.value().clone()).collect();
        books.sort_by_key(|book| book.id);
        books
    }

    /// Store a new record and return its freshly allocated id.
    ///
    /// Whatever id the caller put on `book` is ignored.
    pub fn insert(&self, mut book: Book) -> BookId {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        book.id = id;
        self.books.insert(id, book);
        tracing::debug!(id, "book inserted");
        id
    }

    /// Remove a record. Returns `false` if it was already gone.
    pub fn delete(&self, id: BookId) -> bool {
        let removed = self.books.remove(&id).is_some();
        tracing::debug!(id, removed, "book delete");
        removed
    }

    /// Replace an existing record wholesale. Returns `false` and leaves the
    /// store untouched if `book.id` is not present.
    pub fn update(&self, book: Book) -> bool {
        let id = book.id;
        let replaced = match self.books.get_mut(&id) {
            Some(mut entry) => {
                *entry = book;
                true
            }
            None => false,
        };
        tracing::debug!(id, replaced, "book update");
        replaced
    }

    /// Look up a single record.
    pub fn get(&self, id: BookId) -> Option<Book> {
        self.books.get(&id).map(|entry| entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

/// The record every seeded store starts with.
pub fn seed_book() -> Book {
    Book::new(
        "Expert F# 4.0",
        "Don Syme, Adam Granicz, Antonio Cisternino",
        NaiveDate::from_ymd_opt(2015, 12, 28).expect("seed publish date is a valid calendar date"),
        "978-1-484207-41-3",
    )
}
