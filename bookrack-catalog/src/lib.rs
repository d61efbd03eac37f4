//! Book catalog data model, library management, and purchases persistence.
//!
//! This crate holds everything stateful and algorithmic: the [`Shelf`]
//! manager that owns the catalog and the user's library, its search and
//! ranking operations, and the flat-file purchases store. The CLI crate is
//! presentation only — it forwards user input here and formats the results.

pub mod shelf;
pub mod store;
pub mod types;

pub use shelf::{BuyOutcome, ReadOutcome, Shelf};
pub use store::StoreError;
pub use types::{Book, LibraryEntry};
