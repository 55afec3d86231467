//! The catalogue scenarios, end to end over HTTP.

use std::sync::Arc;

use book_catalogue::client::{Catalogue, Field, RemoveOutcome, RowMode, UpdateOutcome};
use book_catalogue::rpc::HttpApi;
use book_catalogue::BookStore;
use chrono::NaiveDate;

use crate::start_server;

#[tokio::test]
async fn edit_update_and_vanish() {
    let store = Arc::new(BookStore::seeded());
    let catalogue = Catalogue::new(HttpApi::new(start_server(store.clone()).await));

    catalogue.refresh().await.unwrap();
    assert_eq!(catalogue.rows().len(), 1);
    assert_eq!(catalogue.row(1).unwrap().mode, RowMode::Display);

    catalogue.edit(1).unwrap();
    catalogue.set_edit_field(1, Field::Title, "New Title").unwrap();
    assert_eq!(catalogue.update(1).await.unwrap(), UpdateOutcome::Updated);
    assert_eq!(catalogue.row(1).unwrap().book.title, "New Title");
    assert_eq!(store.get(1).unwrap().title, "New Title");

    // a second client removes the book while we edit it again
    let other = Catalogue::new(HttpApi::new(catalogue.api().base_url()));
    other.refresh().await.unwrap();

    catalogue.edit(1).unwrap();
    assert_eq!(other.remove(1).await.unwrap(), RemoveOutcome::Removed);

    assert_eq!(catalogue.update(1).await.unwrap(), UpdateOutcome::NotFound);
    assert!(catalogue.rows().is_empty());
}

#[tokio::test]
async fn add_over_http() {
    let store = Arc::new(BookStore::seeded());
    let catalogue = Catalogue::new(HttpApi::new(start_server(store.clone()).await));

    catalogue.set_draft_field(Field::Title, "T");
    catalogue.set_draft_field(Field::Author, "A");
    catalogue.set_draft_field(Field::PublishDate, "2020-01-02");
    catalogue.set_draft_field(Field::Isbn, "X");
    let id = catalogue.add().await.unwrap();

    let books = store.list_all();
    let added = books.iter().find(|b| b.id == id).unwrap();
    assert_eq!(added.title, "T");
    assert_eq!(added.author, "A");
    assert_eq!(added.publish_date, NaiveDate::from_ymd_opt(2020, 1, 2).unwrap());
    assert_eq!(added.isbn, "X");
    assert_eq!(catalogue.draft_field(Field::Title), "");

    catalogue.refresh().await.unwrap();
    assert_eq!(catalogue.rows().len(), 2);
}
