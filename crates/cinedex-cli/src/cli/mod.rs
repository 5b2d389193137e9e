use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod args;


pub use args::{GetArgs, SearchArgs};

#[derive(Debug, Parser)]
#[command(name = "cinedex")]
#[command(about = "Query a read-only movie catalog", version)]
pub struct Cli {
    /// Catalog JSON file. Overrides `CINEDEX_CATALOG`.
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print every movie in catalog order.
    List,
    /// Print one movie by id.
    Get(GetArgs),
    /// Search by name, id and genre. At least one criterion is required.
    Search(SearchArgs),
    /// Search when criteria are given, otherwise list everything, plus all genres.
    Browse(SearchArgs),
    /// Print the distinct genres in sorted order.
    Genres,
}

impl Commands {
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Get(_) => "get",
            Self::Search(_) => "search",
            Self::Browse(_) => "browse",
            Self::Genres => "genres",
        }
    }
}
