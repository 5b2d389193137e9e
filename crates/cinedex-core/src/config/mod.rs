use std::path::PathBuf;

mod env;

pub const ENV_CATALOG_PATH: &str = "CINEDEX_CATALOG";
pub const ENV_LOG_FILTER: &str = "CINEDEX_LOG";

pub const DEFAULT_CATALOG_PATH: &str = "movies.json";
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CinedexConfig {
    pub catalog_path: PathBuf,
    pub log_filter: String,
}

impl Default for CinedexConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl CinedexConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self::resolve(
            env::read_non_empty_env(ENV_CATALOG_PATH),
            env::read_non_empty_env(ENV_LOG_FILTER),
        )
    }

    fn resolve(catalog_path: Option<String>, log_filter: Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            catalog_path: catalog_path.map_or(defaults.catalog_path, PathBuf::from),
            log_filter: log_filter.unwrap_or(defaults.log_filter),
        }
    }

    /// Explicit catalog path wins over the environment.
    #[must_use]
    pub fn with_catalog_override(mut self, catalog_path: Option<PathBuf>) -> Self {
        if let Some(path) = catalog_path {
            self.catalog_path = path;
        }
        self
    }
}
