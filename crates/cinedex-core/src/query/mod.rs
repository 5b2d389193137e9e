use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::debug;

use crate::catalog::Catalog;
use crate::filter::{EffectiveCriteria, normalize_criteria, record_matches};
use crate::models::{BrowseView, MovieRecord, SearchCriteria};

#[cfg(test)]
mod tests;

/// Read-only query surface over a [`Catalog`].
///
/// Every operation is a pure function of the catalog contents and never
/// fails; malformed criteria degrade to "no constraint".
#[derive(Debug, Clone)]
pub struct QueryEngine {
    catalog: Arc<Catalog>,
}

impl QueryEngine {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn list_all(&self) -> &[MovieRecord] {
        self.catalog.all()
    }

    #[must_use]
    pub fn find_by_id(&self, id: Option<i64>) -> Option<&MovieRecord> {
        self.catalog.by_id(id)
    }

    #[must_use]
    pub fn search(
        &self,
        name: Option<&str>,
        id: Option<i64>,
        genre: Option<&str>,
    ) -> Vec<&MovieRecord> {
        self.search_with(&SearchCriteria::new(name, id, genre))
    }

    /// Catalog-ordered records satisfying every effective criterion.
    #[must_use]
    pub fn search_with(&self, criteria: &SearchCriteria) -> Vec<&MovieRecord> {
        let Some(effective) = normalize_criteria(criteria) else {
            debug!(total = self.catalog.len(), "search without effective criteria");
            return self.catalog.iter().collect();
        };
        let hits = self.filter_records(&effective);
        debug!(
            name = effective.name.as_deref(),
            id = effective.id,
            genre = effective.genre.as_deref(),
            hits = hits.len(),
            "search completed"
        );
        hits
    }

    fn filter_records(&self, criteria: &EffectiveCriteria) -> Vec<&MovieRecord> {
        // Ids are unique, so an id criterion leaves at most one candidate.
        if let Some(id) = criteria.id {
            return self
                .catalog
                .by_id(Some(id))
                .filter(|record| record_matches(record, criteria))
                .into_iter()
                .collect();
        }
        self.catalog
            .iter()
            .filter(|record| record_matches(record, criteria))
            .collect()
    }

    /// Distinct raw genre strings in code-point order.
    #[must_use]
    pub fn distinct_genres_sorted(&self) -> Vec<String> {
        self.catalog
            .iter()
            .map(|record| record.genre.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(ToString::to_string)
            .collect()
    }

    #[must_use]
    pub fn browse(&self, criteria: &SearchCriteria) -> BrowseView {
        let (search_performed, movies) = match normalize_criteria(criteria) {
            Some(effective) => (
                true,
                self.filter_records(&effective)
                    .into_iter()
                    .cloned()
                    .collect::<Vec<_>>(),
            ),
            None => (false, self.list_all().to_vec()),
        };
        BrowseView {
            search_performed,
            no_results: search_performed && movies.is_empty(),
            criteria: criteria.clone(),
            movies,
            all_genres: self.distinct_genres_sorted(),
        }
    }
}

impl From<Catalog> for QueryEngine {
    fn from(catalog: Catalog) -> Self {
        Self::new(Arc::new(catalog))
    }
}
