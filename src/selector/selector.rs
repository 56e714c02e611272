//! Catalog entry selection.
//!
//! Search never fails to produce something when the catalog is non-empty:
//! the pick entry points walk a cascade of progressively looser filter
//! combinations, and `best_match_*` falls back to a uniform random pick over
//! the whole pool when handed an empty candidate set.

use std::sync::Arc;

use serde::Deserialize;

use super::score::{score_image, score_track, tokenize};
use crate::catalog::{Catalog, ImageEntry, Track};

/// Categorical hints for track selection. All fields are optional; tests use
/// substring containment, not equality, so "Bollywood Pop" satisfies a
/// genre hint of "Pop".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrackFilters {
    pub genre: Option<String>,
    pub language: Option<String>,
}

/// Categorical hints for image selection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageFilters {
    pub category: Option<String>,
    pub style: Option<String>,
    pub mood: Option<String>,
}

#[derive(Debug)]
pub struct RankedTrack<'a> {
    pub track: &'a Track,
    pub score: f64,
}

#[derive(Debug)]
pub struct RankedImage<'a> {
    pub image: &'a ImageEntry,
    pub score: f64,
}

pub struct Selector {
    catalog: Arc<Catalog>,
}

fn field_matches(field: &str, hint: &Option<String>) -> bool {
    match hint {
        Some(hint) => field.to_lowercase().contains(&hint.to_lowercase()),
        None => true,
    }
}

/// OR semantics across tokens: a single token hit anywhere in the searchable
/// text is enough. No tokens means match everything.
fn text_matches(text: &str, tokens: &[String]) -> bool {
    tokens.is_empty() || tokens.iter().any(|token| text.contains(token))
}

impl Selector {
    pub fn new(catalog: Arc<Catalog>) -> Selector {
        Selector { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Tracks matching the query and filters, in catalog order.
    pub fn search_tracks(&self, query: &str, filters: &TrackFilters) -> Vec<&Track> {
        let tokens = tokenize(query);
        self.catalog
            .tracks()
            .iter()
            .filter(|track| field_matches(&track.genre, &filters.genre))
            .filter(|track| field_matches(&track.language, &filters.language))
            .filter(|track| text_matches(&track.searchable_text(), &tokens))
            .collect()
    }

    /// Images matching the query and filters, ordered by popularity
    /// descending (stable, so catalog order breaks ties).
    pub fn search_images(&self, query: &str, filters: &ImageFilters) -> Vec<&ImageEntry> {
        let tokens = tokenize(query);
        let mut results: Vec<&ImageEntry> = self
            .catalog
            .images()
            .iter()
            .filter(|image| field_matches(&image.category, &filters.category))
            .filter(|image| field_matches(&image.style, &filters.style))
            .filter(|image| field_matches(&image.mood, &filters.mood))
            .filter(|image| text_matches(&image.searchable_text(), &tokens))
            .collect();
        results.sort_by(|a, b| b.popularity.cmp(&a.popularity));
        results
    }

    /// Rank candidates by score descending. The sort is stable, ties keep
    /// candidate (catalog) order.
    pub fn rank_tracks<'a>(
        &self,
        candidates: Vec<&'a Track>,
        query: &str,
        filters: &TrackFilters,
    ) -> Vec<RankedTrack<'a>> {
        let tokens = tokenize(query);
        let mut ranked: Vec<RankedTrack> = candidates
            .into_iter()
            .map(|track| RankedTrack {
                score: score_track(
                    track,
                    &tokens,
                    filters.genre.as_deref(),
                    filters.language.as_deref(),
                ),
                track,
            })
            .collect();
        ranked.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked
    }

    pub fn rank_images<'a>(
        &self,
        candidates: Vec<&'a ImageEntry>,
        query: &str,
        style: Option<&str>,
    ) -> Vec<RankedImage<'a>> {
        let tokens = tokenize(query);
        let mut ranked: Vec<RankedImage> = candidates
            .into_iter()
            .map(|image| RankedImage {
                score: score_image(image, &tokens, style),
                image,
            })
            .collect();
        ranked.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked
    }

    /// Best-scoring candidate, or a uniform random pick from the whole pool
    /// when the candidate set is empty. Never returns nothing.
    pub fn best_match_track<'a>(
        &'a self,
        candidates: Vec<&'a Track>,
        query: &str,
        filters: &TrackFilters,
    ) -> &'a Track {
        match self.rank_tracks(candidates, query, filters).first() {
            Some(ranked) => ranked.track,
            None => self.catalog.random_track(),
        }
    }

    pub fn best_match_image<'a>(
        &'a self,
        candidates: Vec<&'a ImageEntry>,
        query: &str,
        style: Option<&str>,
    ) -> &'a ImageEntry {
        match self.rank_images(candidates, query, style).first() {
            Some(ranked) => ranked.image,
            None => self.catalog.random_image(),
        }
    }

    /// Fallback cascade for tracks: each stage runs only when the previous
    /// one came back empty, and the last stage is the unfiltered pool, so a
    /// non-empty catalog always yields at least one ranked result.
    pub fn pick_tracks(&self, query: &str, filters: &TrackFilters) -> Vec<RankedTrack<'_>> {
        let language_only = TrackFilters {
            genre: None,
            language: filters.language.clone(),
        };

        let mut candidates = self.search_tracks(query, filters);
        if candidates.is_empty() {
            candidates = self.search_tracks("", filters);
        }
        if candidates.is_empty() {
            candidates = self.search_tracks("", &language_only);
        }
        if candidates.is_empty() {
            candidates = self.search_tracks(query, &TrackFilters::default());
        }
        if candidates.is_empty() {
            candidates = self.catalog.tracks().iter().collect();
        }

        self.rank_tracks(candidates, query, filters)
    }

    /// Fallback cascade for images, ending with the full popularity-sorted
    /// pool.
    pub fn pick_images(&self, query: &str, filters: &ImageFilters) -> Vec<RankedImage<'_>> {
        let mut candidates = self.search_images(query, filters);
        if candidates.is_empty() {
            candidates = self.search_images("", filters);
        }
        if candidates.is_empty() {
            candidates = self.search_images(query, &ImageFilters::default());
        }
        if candidates.is_empty() {
            candidates = self.search_images("", &ImageFilters::default());
        }

        let style = filters.style.as_deref().or(filters.category.as_deref());
        self.rank_images(candidates, query, style)
    }
}
