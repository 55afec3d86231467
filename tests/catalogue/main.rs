//! Catalogue integration tests.

mod lifecycle;
