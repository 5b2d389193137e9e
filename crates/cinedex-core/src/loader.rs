use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::catalog::Catalog;
use crate::error::{CinedexError, Result};
use crate::models::MovieRecord;

#[derive(Debug, Deserialize)]
struct WrappedCatalogDocument {
    movies: Vec<MovieRecord>,
}

/// Parses a JSON catalog, either a bare array of movies or `{"movies": [...]}`.
///
/// The shape is picked from the first significant byte so serde reports
/// per-record errors with their field name and position.
pub fn parse_catalog_document(raw: &str) -> Result<Catalog> {
    let records = match raw.trim_start().as_bytes().first() {
        Some(b'{') => serde_json::from_str::<WrappedCatalogDocument>(raw)?.movies,
        _ => serde_json::from_str::<Vec<MovieRecord>>(raw)?,
    };
    Catalog::try_new(records)
}

pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let raw = fs::read_to_string(path).map_err(|err| {
        if err.kind() == std::io::ErrorKind::NotFound {
            CinedexError::NotFound(format!("catalog file {}", path.display()))
        } else {
            CinedexError::Io(err)
        }
    })?;
    let catalog = parse_catalog_document(&raw)?;
    info!(path = %path.display(), movies = catalog.len(), "catalog loaded");
    Ok(catalog)
}
