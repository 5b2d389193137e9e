use cinedex_core::SearchCriteria;
use clap::Args;

#[derive(Debug, Args)]
pub struct GetArgs {
    #[arg(allow_negative_numbers = true)]
    pub id: i64,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Case-insensitive substring of the movie name.
    #[arg(long, allow_hyphen_values = true)]
    pub name: Option<String>,
    /// Exact movie id. Zero or negative means no id constraint.
    #[arg(long, allow_negative_numbers = true)]
    pub id: Option<i64>,
    /// Case-insensitive substring of the raw genre label.
    #[arg(long, allow_hyphen_values = true)]
    pub genre: Option<String>,
}

impl SearchArgs {
    #[must_use]
    pub fn to_criteria(&self) -> SearchCriteria {
        SearchCriteria {
            name: self.name.clone(),
            id: self.id,
            genre: self.genre.clone(),
        }
    }
}
