//! Relevance scoring for catalog entries.
//!
//! The weights below are behavioral constants carried over from the original
//! content-matching tables. They were tuned by hand; changing any of them
//! changes ranking behavior and needs explicit sign-off.

use unicode_segmentation::UnicodeSegmentation;

use crate::catalog::{ImageEntry, Track};

// Image weights.
const IMAGE_STYLE_MATCH: f64 = 50.0;
const IMAGE_TOKEN_IN_TAGS: f64 = 20.0;
const IMAGE_TOKEN_IN_TITLE: f64 = 15.0;
const IMAGE_TOKEN_IN_DESCRIPTION: f64 = 10.0;
const IMAGE_POPULARITY_FACTOR: f64 = 0.1;
const IMAGE_COMPLEXITY_FACTOR: f64 = 0.1;
/// Queries longer than this many tokens count as "detailed" and earn the
/// complexity bonus.
const DETAILED_QUERY_TOKENS: usize = 5;

// Track weights.
const TRACK_LANGUAGE_MATCH: f64 = 50.0;
const TRACK_GENRE_MATCH: f64 = 40.0;
const TRACK_TOKEN_IN_TITLE: f64 = 30.0;
const TRACK_TOKEN_IN_ARTIST: f64 = 20.0;
const TRACK_TOKEN_IN_TAGS: f64 = 15.0;
const TRACK_TOKEN_IN_MOOD: f64 = 10.0;
const TRACK_RECENT_YEAR_BONUS: f64 = 10.0;
const TRACK_RECENT_YEAR_THRESHOLD: i32 = 2015;
const TRACK_NORMAL_TEMPO_BONUS: f64 = 5.0;
const TRACK_NORMAL_TEMPO_RANGE: std::ops::RangeInclusive<u32> = 100..=140;

/// Split a query into lowercase word tokens. Blank input yields no tokens,
/// which downstream treats as "match everything".
pub fn tokenize(query: &str) -> Vec<String> {
    query
        .unicode_words()
        .map(|word| word.to_lowercase())
        .collect()
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn any_tag_contains(tags: &[String], token: &str) -> bool {
    tags.iter().any(|tag| contains_ci(tag, token))
}

/// Additive relevance score of an image against query tokens and an optional
/// style hint.
pub fn score_image(image: &ImageEntry, tokens: &[String], style: Option<&str>) -> f64 {
    let mut score = 0.0;

    if let Some(style) = style {
        let style = style.to_lowercase();
        if image.style.to_lowercase() == style || image.category.to_lowercase() == style {
            score += IMAGE_STYLE_MATCH;
        }
    }

    for token in tokens {
        if any_tag_contains(&image.tags, token) {
            score += IMAGE_TOKEN_IN_TAGS;
        }
        if contains_ci(&image.title, token) {
            score += IMAGE_TOKEN_IN_TITLE;
        }
        if contains_ci(&image.description, token) {
            score += IMAGE_TOKEN_IN_DESCRIPTION;
        }
    }

    score += image.popularity as f64 * IMAGE_POPULARITY_FACTOR;
    if tokens.len() > DETAILED_QUERY_TOKENS {
        score += image.complexity as f64 * IMAGE_COMPLEXITY_FACTOR;
    }

    score
}

/// Additive relevance score of a track against query tokens and optional
/// genre/language hints.
pub fn score_track(
    track: &Track,
    tokens: &[String],
    genre: Option<&str>,
    language: Option<&str>,
) -> f64 {
    let mut score = 0.0;

    if let Some(language) = language {
        if contains_ci(&track.language, language) {
            score += TRACK_LANGUAGE_MATCH;
        }
    }

    if let Some(genre) = genre {
        if contains_ci(&track.genre, genre) || any_tag_contains(&track.tags, genre) {
            score += TRACK_GENRE_MATCH;
        }
    }

    for token in tokens {
        if contains_ci(&track.title, token) {
            score += TRACK_TOKEN_IN_TITLE;
        }
        if contains_ci(&track.artist, token) {
            score += TRACK_TOKEN_IN_ARTIST;
        }
        if any_tag_contains(&track.tags, token) {
            score += TRACK_TOKEN_IN_TAGS;
        }
        if contains_ci(&track.mood, token) {
            score += TRACK_TOKEN_IN_MOOD;
        }
    }

    if track.year.is_some_and(|y| y >= TRACK_RECENT_YEAR_THRESHOLD) {
        score += TRACK_RECENT_YEAR_BONUS;
    }
    if TRACK_NORMAL_TEMPO_RANGE.contains(&track.tempo) {
        score += TRACK_NORMAL_TEMPO_BONUS;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_image(tags: &[&str], popularity: u32, complexity: u32) -> ImageEntry {
        ImageEntry {
            id: "img".to_string(),
            title: "Untitled".to_string(),
            description: "no description".to_string(),
            image_url: "https://example.com/img.jpg".to_string(),
            category: "digital".to_string(),
            style: "concept-art".to_string(),
            mood: "calm".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            colors: vec![],
            resolution: "1024x1024".to_string(),
            complexity,
            popularity,
        }
    }

    fn make_track(genre: &str, language: &str, year: Option<i32>, tempo: u32) -> Track {
        Track {
            id: "trk".to_string(),
            title: "Untitled".to_string(),
            artist: "Nobody".to_string(),
            genre: genre.to_string(),
            language: language.to_string(),
            duration: 180,
            mood: "neutral".to_string(),
            tempo,
            key: "C".to_string(),
            year,
            album: None,
            tags: vec![],
        }
    }

    // ==========================================================================
    // Tokenization
    // ==========================================================================

    #[test]
    fn tokenize_splits_and_lowercases() {
        assert_eq!(tokenize("Dog Eating FOOD"), vec!["dog", "eating", "food"]);
    }

    #[test]
    fn tokenize_blank_is_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t ").is_empty());
    }

    // ==========================================================================
    // Image scoring
    // ==========================================================================

    #[test]
    fn image_style_match_adds_fifty() {
        let image = make_image(&[], 0, 0);
        let base = score_image(&image, &[], None);
        let styled = score_image(&image, &[], Some("concept-art"));
        assert_eq!(styled - base, 50.0);

        // Category counts as a style match too.
        let by_category = score_image(&image, &[], Some("digital"));
        assert_eq!(by_category - base, 50.0);
    }

    #[test]
    fn image_tag_hits_accumulate_per_token() {
        let image = make_image(&["dog", "food"], 0, 0);
        let tokens = tokenize("dog food");
        // Two tag hits at 20 each.
        assert_eq!(score_image(&image, &tokens, None), 40.0);
    }

    #[test]
    fn image_popularity_contributes_tenth() {
        let image = make_image(&[], 90, 0);
        assert_eq!(score_image(&image, &[], None), 9.0);
    }

    #[test]
    fn image_complexity_bonus_needs_detailed_query() {
        let image = make_image(&[], 0, 80);
        let short = tokenize("one two three four five");
        assert_eq!(score_image(&image, &short, None), 0.0);

        let long = tokenize("one two three four five six");
        assert_eq!(score_image(&image, &long, None), 8.0);
    }

    // ==========================================================================
    // Track scoring
    // ==========================================================================

    #[test]
    fn track_language_match_is_substring_tolerant() {
        let track = make_track("Pop", "Hindi", None, 90);
        let score = score_track(&track, &[], None, Some("hindi"));
        assert_eq!(score, 50.0);
    }

    #[test]
    fn track_genre_match_tolerates_supersets() {
        // "Bollywood Pop" should match a "Pop" genre hint.
        let track = make_track("Bollywood Pop", "Hindi", None, 90);
        let score = score_track(&track, &[], Some("pop"), None);
        assert_eq!(score, 40.0);
    }

    #[test]
    fn track_recency_and_tempo_bonuses() {
        let plain = make_track("Pop", "English", Some(2014), 90);
        assert_eq!(score_track(&plain, &[], None, None), 0.0);

        let recent = make_track("Pop", "English", Some(2015), 90);
        assert_eq!(score_track(&recent, &[], None, None), 10.0);

        let groovy = make_track("Pop", "English", Some(2020), 120);
        assert_eq!(score_track(&groovy, &[], None, None), 15.0);
    }

    #[test]
    fn track_token_weights() {
        let mut track = make_track("Pop", "English", None, 90);
        track.title = "Midnight Sun".to_string();
        track.artist = "Sun Club".to_string();
        track.tags = vec!["sunset".to_string()];
        track.mood = "sunny".to_string();

        // "sun" hits title (30), artist (20), tags (15) and mood (10).
        let tokens = tokenize("sun");
        assert_eq!(score_track(&track, &tokens, None, None), 75.0);
    }
}
