use serde::{Deserialize, Serialize};

/// One catalog entry.
///
/// `genre` is kept as the raw stored string. Composite labels such as
/// `"Action/Sci-Fi"` are never split.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieRecord {
    pub id: i64,
    #[serde(rename = "movieName", alias = "name")]
    pub name: String,
    #[serde(default)]
    pub director: String,
    #[serde(rename = "year", alias = "release_year")]
    pub release_year: i32,
    pub genre: String,
    #[serde(rename = "description", alias = "synopsis", default)]
    pub synopsis: String,
    #[serde(rename = "duration", alias = "runtime_minutes")]
    pub runtime_minutes: u32,
    #[serde(rename = "imdbRating", alias = "rating", default)]
    pub rating: f64,
}
