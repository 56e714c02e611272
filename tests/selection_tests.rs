//! Selector availability and ranking checks against the public library API.

use std::sync::Arc;

use musegen_server::{Catalog, ImageFilters, Selector, TrackFilters};

fn make_selector() -> Selector {
    Selector::new(Arc::new(Catalog::build().unwrap()))
}

#[test]
fn any_query_yields_exactly_one_best_track() {
    let selector = make_selector();
    let queries = [
        "",
        "   ",
        "upbeat punjabi wedding song",
        "qqqqzzzz no such thing",
        "dog eating food",
    ];
    for query in queries {
        let ranked = selector.pick_tracks(query, &TrackFilters::default());
        assert!(!ranked.is_empty(), "query {:?} returned nothing", query);
    }
}

#[test]
fn any_query_yields_exactly_one_best_image() {
    let selector = make_selector();
    for query in ["", "fractal dreams", "complete gibberish zxcv"] {
        let ranked = selector.pick_images(query, &ImageFilters::default());
        assert!(!ranked.is_empty(), "query {:?} returned nothing", query);
    }
}

#[test]
fn cumulative_tag_scoring_prefers_multi_tag_matches() {
    let selector = make_selector();
    let ranked = selector.pick_images("dog eating food", &ImageFilters::default());

    let best = ranked[0].image;
    assert!(best.tags.contains(&"dog".to_string()));
    assert!(best.tags.contains(&"food".to_string()));
}

#[test]
fn ranked_order_is_stable_across_calls() {
    let selector = make_selector();
    let filters = TrackFilters {
        genre: Some("Pop".to_string()),
        language: Some("English".to_string()),
    };

    let reference: Vec<(String, String)> = selector
        .pick_tracks("summer night", &filters)
        .iter()
        .map(|r| (r.track.id.clone(), format!("{:.3}", r.score)))
        .collect();
    assert!(!reference.is_empty());

    for _ in 0..10 {
        let again: Vec<(String, String)> = selector
            .pick_tracks("summer night", &filters)
            .iter()
            .map(|r| (r.track.id.clone(), format!("{:.3}", r.score)))
            .collect();
        assert_eq!(reference, again);
    }
}

#[test]
fn impossible_filters_still_resolve_via_cascade() {
    let selector = make_selector();
    let filters = TrackFilters {
        genre: Some("Gregorian Chant".to_string()),
        language: Some("Latin".to_string()),
    };
    let ranked = selector.pick_tracks("", &filters);
    assert!(!ranked.is_empty());
}

#[test]
fn category_filter_narrows_image_results() {
    let selector = make_selector();
    let filters = ImageFilters {
        category: Some("painterly".to_string()),
        style: None,
        mood: None,
    };
    let results = selector.search_images("", &filters);
    assert!(!results.is_empty());
    assert!(results.iter().all(|i| i.category == "painterly"));
}

#[test]
fn selection_feeds_synthesis() {
    // The full data flow: pick a track, then render audio from its metadata.
    let selector = make_selector();
    let filters = TrackFilters {
        genre: Some("Punjabi".to_string()),
        language: None,
    };
    let ranked = selector.pick_tracks("bhangra party", &filters);
    let track = ranked[0].track;

    let audio = musegen_server::synthesize(&musegen_server::SynthesisRequest {
        genre: track.genre.clone(),
        mood: track.mood.clone(),
        tempo: track.tempo,
        key: track.key.clone(),
        duration: 2,
        language: track.language.clone(),
    });
    assert_eq!(audio.wav.len(), 44 + 44_100 * 2 * 2);
}
