use std::collections::{HashMap, HashSet};

use crate::error::{CinedexError, Result};
use crate::models::MovieRecord;

/// Immutable, load-ordered collection of movies.
///
/// There is no mutation path once a catalog is built, so it can be shared
/// freely across threads behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<MovieRecord>,
    positions: HashMap<i64, usize>,
}

impl Catalog {
    /// Builds a catalog without validating record invariants.
    ///
    /// Callers must supply unique, positive ids. When an id repeats, lookups
    /// resolve to its first occurrence.
    #[must_use]
    pub fn new(records: Vec<MovieRecord>) -> Self {
        let mut positions = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            positions.entry(record.id).or_insert(position);
        }
        Self { records, positions }
    }

    pub fn try_new(records: Vec<MovieRecord>) -> Result<Self> {
        validate_records(&records)?;
        Ok(Self::new(records))
    }

    #[must_use]
    pub fn all(&self) -> &[MovieRecord] {
        &self.records
    }

    /// `None` for a missing, non-positive or unknown id.
    #[must_use]
    pub fn by_id(&self, id: Option<i64>) -> Option<&MovieRecord> {
        let id = id.filter(|id| *id > 0)?;
        self.positions
            .get(&id)
            .and_then(|position| self.records.get(*position))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MovieRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a MovieRecord;
    type IntoIter = std::slice::Iter<'a, MovieRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

fn validate_records(records: &[MovieRecord]) -> Result<()> {
    let mut seen = HashSet::with_capacity(records.len());
    for (position, record) in records.iter().enumerate() {
        let reason = if record.id <= 0 {
            Some("non-positive id")
        } else if !seen.insert(record.id) {
            Some("duplicate id")
        } else if record.name.trim().is_empty() {
            Some("blank name")
        } else if record.runtime_minutes == 0 {
            Some("zero runtime")
        } else {
            None
        };
        if let Some(reason) = reason {
            return Err(CinedexError::InvalidRecord {
                position,
                id: record.id,
                reason: reason.to_string(),
            });
        }
    }
    Ok(())
}
