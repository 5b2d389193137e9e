use crate::models::{MovieRecord, SearchCriteria};

/// Search criteria after normalization.
///
/// Every field that is present constrains the result. Text needles are
/// already trimmed and lowercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveCriteria {
    pub name: Option<String>,
    pub id: Option<i64>,
    pub genre: Option<String>,
}

/// Returns `None` when no field of `criteria` constrains the result.
pub fn normalize_criteria(criteria: &SearchCriteria) -> Option<EffectiveCriteria> {
    let name = normalize_text(criteria.name.as_deref());
    let id = criteria.id.filter(|id| *id > 0);
    let genre = normalize_text(criteria.genre.as_deref());
    if name.is_none() && id.is_none() && genre.is_none() {
        return None;
    }
    Some(EffectiveCriteria { name, id, genre })
}

fn normalize_text(raw: Option<&str>) -> Option<String> {
    raw.map(|value| value.trim().to_lowercase())
        .filter(|value| !value.is_empty())
}

pub(crate) fn record_matches(record: &MovieRecord, criteria: &EffectiveCriteria) -> bool {
    if let Some(wanted_id) = criteria.id
        && record.id != wanted_id
    {
        return false;
    }

    if let Some(needle) = &criteria.name
        && !contains_folded(&record.name, needle)
    {
        return false;
    }

    if let Some(needle) = &criteria.genre
        && !contains_folded(&record.genre, needle)
    {
        return false;
    }

    true
}

fn contains_folded(haystack: &str, folded_needle: &str) -> bool {
    haystack.to_lowercase().contains(folded_needle)
}
