use serde::{Deserialize, Serialize};

use super::{MovieRecord, SearchCriteria};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub success: bool,
    pub total_results: usize,
    pub criteria: SearchCriteria,
    pub movies: Vec<MovieRecord>,
    pub message: String,
}

impl SearchResponse {
    #[must_use]
    pub fn from_results(criteria: SearchCriteria, movies: Vec<MovieRecord>) -> Self {
        let message = match movies.len() {
            0 => "no movies matched the search criteria".to_string(),
            1 => "found 1 movie".to_string(),
            count => format!("found {count} movies"),
        };
        Self {
            success: true,
            total_results: movies.len(),
            criteria,
            movies,
            message,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowseView {
    pub search_performed: bool,
    /// Set only when a search ran and matched nothing.
    pub no_results: bool,
    pub criteria: SearchCriteria,
    pub movies: Vec<MovieRecord>,
    pub all_genres: Vec<String>,
}
