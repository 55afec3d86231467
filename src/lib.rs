mod book;
pub mod client;
pub mod rpc;
mod store;

pub use book::{format_date, parse_date, today, Book, BookId, DATE_FORMAT};
pub use rpc::{BookApi, RemoteError};
pub use store::{seed_book, BookStore};
