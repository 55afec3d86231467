//! Book record and its wire format.
//!
//! A `Book` travels over the RPC surface as:
//!
//! ```json
//! {
//!   "id": 1,
//!   "title": "Expert F# 4.0",
//!   "author": "Don Syme, Adam Granicz, Antonio Cisternino",
//!   "publishDate": "2015-12-28",
//!   "isbn": "978-1-484207-41-3"
//! }
//! ```
//!
//! Dates are always written zero-padded as `YYYY-MM-DD` and parsed back
//! into the same calendar date on either side.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Store-assigned identifier. `0` means the record has not been persisted yet.
pub type BookId = u64;

/// Wire format for publish dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single catalogue entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    #[serde(default)]
    pub id: BookId,
    pub title: String,
    pub author: String,
    #[serde(with = "wire_date")]
    pub publish_date: NaiveDate,
    pub isbn: String,
}

impl Book {
    /// Create an unpersisted book (id 0).
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        publish_date: NaiveDate,
        isbn: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            title: title.into(),
            author: author.into(),
            publish_date,
            isbn: isbn.into(),
        }
    }

    /// Blank record used to seed the "new book" form: empty text, today's date.
    pub fn empty() -> Self {
        Self::new("", "", today(), "")
    }

    /// Builder-style id assignment.
    pub fn with_id(mut self, id: BookId) -> Self {
        self.id = id;
        self
    }
}

/// Current local calendar date.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Format a date as zero-padded `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` date. Surrounding whitespace is ignored.
pub fn parse_date(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
}

mod wire_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_date(*date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_date(&raw).map_err(serde::de::Error::custom)
    }
}
