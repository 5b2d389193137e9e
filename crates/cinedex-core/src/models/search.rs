use serde::{Deserialize, Serialize};

/// Raw search parameters as received from a caller.
///
/// Nothing here is validated. Blank text and non-positive ids are legal and
/// simply mean "no constraint"; see [`crate::filter::normalize_criteria`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub genre: Option<String>,
}

impl SearchCriteria {
    #[must_use]
    pub fn new(name: Option<&str>, id: Option<i64>, genre: Option<&str>) -> Self {
        Self {
            name: name.map(ToString::to_string),
            id,
            genre: genre.map(ToString::to_string),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    /// True when at least one field survives normalization.
    #[must_use]
    pub fn has_effective_criteria(&self) -> bool {
        crate::filter::normalize_criteria(self).is_some()
    }
}
