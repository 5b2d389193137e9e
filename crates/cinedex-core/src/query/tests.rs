use std::sync::Arc;

use crate::catalog::Catalog;
use crate::models::{MovieRecord, SearchCriteria};
use crate::query::QueryEngine;

fn movie(id: i64, name: &str, genre: &str) -> MovieRecord {
    MovieRecord {
        id,
        name: name.to_string(),
        director: "Director".to_string(),
        release_year: 1990,
        genre: genre.to_string(),
        synopsis: String::new(),
        runtime_minutes: 120,
        rating: 4.0,
    }
}

fn sample_engine() -> QueryEngine {
    QueryEngine::from(Catalog::new(vec![
        movie(1, "The Prison Escape", "Drama"),
        movie(2, "The Family Boss", "Crime/Drama"),
        movie(3, "The Masked Hero", "Action/Crime"),
    ]))
}

fn ids(records: &[&MovieRecord]) -> Vec<i64> {
    records.iter().map(|record| record.id).collect()
}

#[test]
fn search_without_criteria_equals_list_all() {
    let engine = sample_engine();
    let all = engine.list_all().iter().collect::<Vec<_>>();
    assert_eq!(engine.search(None, None, None), all);
}

#[test]
fn search_with_blank_criteria_equals_list_all() {
    let engine = sample_engine();
    let all = engine.list_all().iter().collect::<Vec<_>>();
    assert_eq!(engine.search(Some(""), None, Some("   ")), all);
    assert_eq!(engine.search(Some("   "), None, Some("   ")), all);
}

#[test]
fn search_with_non_positive_id_equals_list_all() {
    let engine = sample_engine();
    assert_eq!(ids(&engine.search(None, Some(0), None)), vec![1, 2, 3]);
    assert_eq!(ids(&engine.search(None, Some(-5), None)), vec![1, 2, 3]);
}

#[test]
fn search_by_name_substring() {
    let engine = sample_engine();
    assert_eq!(ids(&engine.search(Some("Prison"), None, None)), vec![1]);
}

#[test]
fn search_by_name_is_case_insensitive() {
    let engine = sample_engine();
    assert_eq!(
        engine.search(Some("prison"), None, None),
        engine.search(Some("PRISON"), None, None)
    );
    assert_eq!(ids(&engine.search(Some("prison"), None, None)), vec![1]);
}

#[test]
fn search_by_genre_matches_composite_labels_in_catalog_order() {
    let engine = sample_engine();
    assert_eq!(ids(&engine.search(None, None, Some("Drama"))), vec![1, 2]);
}

#[test]
fn search_keeps_load_order_instead_of_id_order() {
    let engine = QueryEngine::from(Catalog::new(vec![
        movie(9, "Late Arrival", "Drama"),
        movie(2, "Early Bird", "Crime/Drama"),
        movie(5, "Middle Ground", "Action"),
    ]));
    assert_eq!(ids(&engine.search(None, None, Some("drama"))), vec![9, 2]);
    assert_eq!(ids(&engine.search(Some("l"), None, None)), vec![9, 2, 5]);
    assert_eq!(ids(&engine.search(None, None, None)), vec![9, 2, 5]);
}

#[test]
fn search_by_partial_genre() {
    let engine = sample_engine();
    assert_eq!(ids(&engine.search(None, None, Some("rim"))), vec![2, 3]);
}

#[test]
fn search_ands_name_and_genre() {
    let engine = sample_engine();
    assert_eq!(
        ids(&engine.search(Some("Family"), None, Some("Crime"))),
        vec![2]
    );
}

#[test]
fn search_by_id_is_exact() {
    let engine = sample_engine();
    assert_eq!(ids(&engine.search(None, Some(2), None)), vec![2]);
    let criteria = SearchCriteria::default().with_id(3);
    assert_eq!(ids(&engine.search_with(&criteria)), vec![3]);
}

#[test]
fn search_with_no_match_is_empty() {
    let engine = sample_engine();
    assert!(engine.search(Some("NoSuchMovie"), None, None).is_empty());
}

#[test]
fn unknown_id_yields_empty_regardless_of_other_criteria() {
    let engine = sample_engine();
    assert!(engine.search(None, Some(99), None).is_empty());
    assert!(engine.search(Some("Prison"), Some(99), None).is_empty());
    assert!(engine.search(Some("Prison"), Some(99), Some("Drama")).is_empty());
}

#[test]
fn matching_id_still_requires_text_criteria() {
    let engine = sample_engine();
    assert!(engine.search(Some("Family"), Some(1), None).is_empty());
    assert_eq!(ids(&engine.search(Some("prison"), Some(1), Some("dra"))), vec![1]);
}

#[test]
fn search_trims_text_criteria() {
    let engine = sample_engine();
    assert_eq!(ids(&engine.search(Some("  masked  "), None, None)), vec![3]);
}

#[test]
fn find_by_id_handles_invalid_and_unknown_ids() {
    let engine = sample_engine();
    assert!(engine.find_by_id(Some(0)).is_none());
    assert!(engine.find_by_id(Some(-5)).is_none());
    assert!(engine.find_by_id(None).is_none());
    assert!(engine.find_by_id(Some(42)).is_none());
    assert_eq!(
        engine.find_by_id(Some(1)).map(|m| m.name.as_str()),
        Some("The Prison Escape")
    );
}

#[test]
fn distinct_genres_sorted_collapses_duplicates() {
    let engine = sample_engine();
    assert_eq!(
        engine.distinct_genres_sorted(),
        vec!["Action/Crime", "Crime/Drama", "Drama"]
    );

    let engine = QueryEngine::from(Catalog::new(vec![
        movie(1, "a", "Drama"),
        movie(2, "b", "Comedy"),
        movie(3, "c", "Drama"),
        movie(4, "d", "comedy"),
    ]));
    assert_eq!(
        engine.distinct_genres_sorted(),
        vec!["Comedy", "Drama", "comedy"]
    );
}

#[test]
fn distinct_genres_ignore_catalog_order() {
    let forward = QueryEngine::from(Catalog::new(vec![
        movie(1, "a", "Western"),
        movie(2, "b", "Action/Sci-Fi"),
        movie(3, "c", "Drama"),
    ]));
    let reversed = QueryEngine::from(Catalog::new(vec![
        movie(3, "c", "Drama"),
        movie(2, "b", "Action/Sci-Fi"),
        movie(1, "a", "Western"),
    ]));
    let genres = forward.distinct_genres_sorted();
    assert_eq!(genres, reversed.distinct_genres_sorted());
    assert!(genres.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn repeated_calls_are_identical() {
    let engine = sample_engine();
    let criteria = SearchCriteria::default().with_genre("crime");
    assert_eq!(engine.search_with(&criteria), engine.search_with(&criteria));
    assert_eq!(engine.distinct_genres_sorted(), engine.distinct_genres_sorted());
    assert_eq!(engine.find_by_id(Some(3)), engine.find_by_id(Some(3)));
    assert_eq!(engine.list_all(), engine.list_all());
}

#[test]
fn empty_catalog_answers_every_query() {
    let engine = QueryEngine::from(Catalog::default());
    assert!(engine.list_all().is_empty());
    assert!(engine.search(Some("x"), Some(1), Some("y")).is_empty());
    assert!(engine.search(None, None, None).is_empty());
    assert!(engine.distinct_genres_sorted().is_empty());
}

#[test]
fn browse_lists_everything_without_criteria() {
    let engine = sample_engine();
    let view = engine.browse(&SearchCriteria::new(Some(" "), Some(0), None));
    assert!(!view.search_performed);
    assert!(!view.no_results);
    assert_eq!(view.movies.len(), 3);
    assert_eq!(view.all_genres.len(), 3);
}

#[test]
fn browse_runs_search_with_effective_criteria() {
    let engine = sample_engine();
    let view = engine.browse(&SearchCriteria::default().with_name("boss"));
    assert!(view.search_performed);
    assert!(!view.no_results);
    assert_eq!(view.movies.len(), 1);
    assert_eq!(view.movies[0].id, 2);
    assert_eq!(view.all_genres.len(), 3);
}

#[test]
fn browse_flags_search_without_matches() {
    let engine = sample_engine();
    let view = engine.browse(&SearchCriteria::default().with_name("NoSuchMovie"));
    assert!(view.search_performed);
    assert!(view.no_results);
    assert!(view.movies.is_empty());
    assert_eq!(view.all_genres.len(), 3);
}

#[test]
fn browse_on_empty_catalog_without_criteria_is_not_a_failed_search() {
    let engine = QueryEngine::from(Catalog::default());
    let view = engine.browse(&SearchCriteria::default());
    assert!(!view.search_performed);
    assert!(!view.no_results);
}

#[test]
fn engine_exposes_its_catalog() {
    let engine = sample_engine();
    assert_eq!(engine.catalog().len(), 3);
    assert_eq!(engine.catalog().all(), engine.list_all());
}

#[test]
fn engine_is_shareable_across_threads() {
    let engine = Arc::new(sample_engine());
    let handles = (0..4)
        .map(|_| {
            let engine = Arc::clone(&engine);
            std::thread::spawn(move || {
                engine
                    .search(None, None, Some("drama"))
                    .into_iter()
                    .map(|m| m.id)
                    .collect::<Vec<_>>()
            })
        })
        .collect::<Vec<_>>();
    for handle in handles {
        assert_eq!(handle.join().expect("join"), vec![1, 2]);
    }
}
