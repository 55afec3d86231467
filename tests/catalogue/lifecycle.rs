//! Row lifecycle over an in-process store.

use std::sync::{Arc, Mutex};

use book_catalogue::client::{
    Catalogue, CatalogueError, Change, EditError, Field, RemoveOutcome, RowMode, UpdateOutcome,
};
use book_catalogue::rpc::LocalApi;
use book_catalogue::{parse_date, BookStore};

use crate::support::date;

fn seeded() -> (Arc<BookStore>, Catalogue<LocalApi>) {
    let store = Arc::new(BookStore::seeded());
    let catalogue = Catalogue::new(LocalApi::new(store.clone()));
    (store, catalogue)
}

#[tokio::test]
async fn refresh_loads_seed_in_display_mode() {
    let (_store, catalogue) = seeded();
    assert!(catalogue.rows().is_empty());

    catalogue.refresh().await.unwrap();

    let rows = catalogue.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id(), 1);
    assert_eq!(rows[0].book.title, "Expert F# 4.0");
    assert_eq!(rows[0].book.publish_date, date(2015, 12, 28));
    assert_eq!(rows[0].book.isbn, "978-1-484207-41-3");
    assert_eq!(rows[0].mode, RowMode::Display);
    assert_eq!(catalogue.message(), "Collection updated");
}

#[tokio::test]
async fn edit_then_cancel_keeps_fields() {
    let (_store, catalogue) = seeded();
    catalogue.refresh().await.unwrap();
    let before = catalogue.row(1).unwrap().book;

    catalogue.edit(1).unwrap();
    assert!(catalogue.row(1).unwrap().is_edited());
    assert_eq!(catalogue.edit_field(1, Field::PublishDate).unwrap(), "2015-12-28");

    catalogue.set_edit_field(1, Field::Title, "Scratch").unwrap();
    catalogue.cancel(1).unwrap();

    let row = catalogue.row(1).unwrap();
    assert!(!row.is_edited());
    assert_eq!(row.mode, RowMode::Display);
    assert_eq!(row.book, before);
    assert!(catalogue.edit_field(1, Field::Title).is_none());
}

#[tokio::test]
async fn update_commits_edit() {
    let (store, catalogue) = seeded();
    catalogue.refresh().await.unwrap();

    catalogue.edit(1).unwrap();
    catalogue.set_edit_field(1, Field::Title, "New Title").unwrap();
    let outcome = catalogue.update(1).await.unwrap();

    assert_eq!(outcome, UpdateOutcome::Updated);
    let row = catalogue.row(1).unwrap();
    assert_eq!(row.mode, RowMode::Display);
    assert_eq!(row.book.title, "New Title");
    assert_eq!(store.get(1).unwrap().title, "New Title");
    assert_eq!(catalogue.message(), "Updated book 'New Title'");
}

#[tokio::test]
async fn update_after_remote_delete_drops_row() {
    let (store, catalogue) = seeded();
    catalogue.refresh().await.unwrap();

    catalogue.edit(1).unwrap();
    catalogue.set_edit_field(1, Field::Title, "New Title").unwrap();

    // someone else removes the book first
    assert!(store.delete(1));

    let outcome = catalogue.update(1).await.unwrap();
    assert_eq!(outcome, UpdateOutcome::NotFound);
    assert!(catalogue.row(1).is_none());
    assert!(catalogue.rows().is_empty());
    assert!(store.is_empty());
    assert_eq!(catalogue.message(), "Book 'New Title' has not been found, removed");
}

#[tokio::test]
async fn invalid_date_keeps_row_editing() {
    let (store, catalogue) = seeded();
    catalogue.refresh().await.unwrap();

    catalogue.edit(1).unwrap();
    catalogue.set_edit_field(1, Field::PublishDate, "28/12/2015").unwrap();

    let err = catalogue.update(1).await.unwrap_err();
    assert!(matches!(err, CatalogueError::Invalid(EditError::InvalidDate { .. })));

    let row = catalogue.row(1).unwrap();
    assert!(row.is_edited());
    assert_eq!(catalogue.edit_field(1, Field::PublishDate).unwrap(), "28/12/2015");
    assert_eq!(store.get(1).unwrap().publish_date, date(2015, 12, 28));
}

#[tokio::test]
async fn remove_reports_both_outcomes() {
    let (store, catalogue) = seeded();
    let second = store.insert(book_catalogue::seed_book());
    catalogue.refresh().await.unwrap();
    assert_eq!(catalogue.rows().len(), 2);

    let outcome = catalogue.remove(1).await.unwrap();
    assert_eq!(outcome, RemoveOutcome::Removed);
    assert_eq!(catalogue.message(), "Removed book 'Expert F# 4.0'");

    assert!(store.delete(second));
    let outcome = catalogue.remove(second).await.unwrap();
    assert_eq!(outcome, RemoveOutcome::AlreadyRemoved);
    assert_eq!(catalogue.message(), "Book 'Expert F# 4.0' was already removed");

    assert!(catalogue.rows().is_empty());
}

#[tokio::test]
async fn add_inserts_row_and_resets_draft() {
    let (store, catalogue) = seeded();
    catalogue.refresh().await.unwrap();

    catalogue.set_draft_field(Field::Title, "T");
    catalogue.set_draft_field(Field::Author, "A");
    catalogue.set_draft_field(Field::PublishDate, "2020-01-02");
    catalogue.set_draft_field(Field::Isbn, "X");

    let id = catalogue.add().await.unwrap();
    assert_eq!(id, 2);
    assert_eq!(catalogue.message(), "Added T");

    let stored = store.get(id).unwrap();
    assert_eq!(stored.title, "T");
    assert_eq!(stored.author, "A");
    assert_eq!(stored.publish_date, date(2020, 1, 2));
    assert_eq!(stored.isbn, "X");

    let row = catalogue.row(id).unwrap();
    assert_eq!(row.mode, RowMode::Display);
    assert_eq!(row.book, stored);
    assert_eq!(catalogue.rows().len(), 2);

    assert_eq!(catalogue.draft_field(Field::Title), "");
    assert_eq!(catalogue.draft_field(Field::Author), "");
    assert_eq!(catalogue.draft_field(Field::Isbn), "");
    assert!(parse_date(&catalogue.draft_field(Field::PublishDate)).is_ok());
}

#[tokio::test]
async fn add_with_bad_date_keeps_draft() {
    let (store, catalogue) = seeded();
    catalogue.set_draft_field(Field::Title, "T");
    catalogue.set_draft_field(Field::PublishDate, "soon");

    assert!(matches!(catalogue.add().await, Err(CatalogueError::Invalid(_))));
    assert_eq!(catalogue.draft_field(Field::Title), "T");
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn actions_check_row_state() {
    let (_store, catalogue) = seeded();
    assert_eq!(catalogue.edit(1), Err(CatalogueError::UnknownRow(1)));

    catalogue.refresh().await.unwrap();
    assert!(matches!(
        catalogue.cancel(1),
        Err(CatalogueError::InvalidState { id: 1, state: "display" })
    ));
    assert!(matches!(
        catalogue.update(1).await,
        Err(CatalogueError::InvalidState { id: 1, state: "display" })
    ));
    assert!(catalogue.set_edit_field(1, Field::Title, "x").is_err());

    catalogue.edit(1).unwrap();
    assert!(matches!(
        catalogue.edit(1),
        Err(CatalogueError::InvalidState { id: 1, state: "editing" })
    ));
    assert!(matches!(
        catalogue.remove(1).await,
        Err(CatalogueError::InvalidState { id: 1, state: "editing" })
    ));
}

#[tokio::test]
async fn subscribers_see_changes() {
    let (_store, catalogue) = seeded();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let id = catalogue.subscribe(move |change| sink.lock().unwrap().push(*change));

    catalogue.refresh().await.unwrap();
    catalogue.edit(1).unwrap();
    catalogue.set_draft_field(Field::Title, "T");

    assert_eq!(
        *seen.lock().unwrap(),
        vec![Change::Rows, Change::Message, Change::Rows, Change::Draft]
    );

    assert!(catalogue.unsubscribe(id));
    catalogue.cancel(1).unwrap();
    assert_eq!(seen.lock().unwrap().len(), 4);
}
