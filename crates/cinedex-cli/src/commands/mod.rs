use anyhow::{Context, Result};
use cinedex_core::{CinedexConfig, CinedexError, QueryEngine, SearchResponse, load_catalog};
use serde_json::Value;
use tracing::warn;

use crate::cli::Commands;

mod support;


use self::support::{failure_payload, print_failure, print_json};

pub(crate) fn run(config: &CinedexConfig, command: Commands) -> Result<()> {
    let catalog = load_catalog(&config.catalog_path).with_context(|| {
        format!(
            "failed to load catalog from {}",
            config.catalog_path.display()
        )
    })?;
    let engine = QueryEngine::from(catalog);
    let output = execute(&engine, command)?;
    print_json(&output)
}

pub(crate) fn report_failure(operation: &str, err: &anyhow::Error) {
    print_failure(&failure_payload(operation, err));
}

fn execute(engine: &QueryEngine, command: Commands) -> Result<Value> {
    let value = match command {
        Commands::List => serde_json::to_value(engine.list_all())?,
        Commands::Get(args) => {
            let Some(movie) = engine.find_by_id(Some(args.id)) else {
                warn!(id = args.id, "movie not found");
                let missing = format!("movie with id {}", args.id);
                return Err(CinedexError::NotFound(missing).into());
            };
            serde_json::to_value(movie)?
        }
        Commands::Search(args) => {
            let criteria = args.to_criteria();
            if !criteria.has_effective_criteria() {
                return Err(CinedexError::Validation(
                    "at least one search criterion is required (name, id or genre)".to_string(),
                )
                .into());
            }
            let movies = engine
                .search_with(&criteria)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>();
            serde_json::to_value(SearchResponse::from_results(criteria, movies))?
        }
        Commands::Browse(args) => serde_json::to_value(engine.browse(&args.to_criteria()))?,
        Commands::Genres => serde_json::to_value(engine.distinct_genres_sorted())?,
    };
    Ok(value)
}
