// Public fallible APIs in this crate share one concrete error contract (`CinedexError`).
#![allow(
    clippy::missing_errors_doc,
    reason = "crate-wide fallible API uses one explicit error type; per-item boilerplate would duplicate contract"
)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod loader;
pub mod models;
pub mod query;

pub use catalog::Catalog;
pub use config::CinedexConfig;
pub use error::{CinedexError, Result};
pub use loader::{load_catalog, parse_catalog_document};
pub use models::{BrowseView, MovieRecord, SearchCriteria, SearchResponse};
pub use query::QueryEngine;
