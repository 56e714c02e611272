use anyhow::Result;
use std::time::Duration;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalog::{Catalog, ImageEntry, Track};
use crate::selector::{ImageFilters, TrackFilters};
use crate::synth::{fallback_tone, synthesize, SynthesisRequest};

use super::state::*;
use super::ServerConfig;

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub tracks: usize,
    pub images: usize,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

async fn home(State(state): State<ServerState>) -> impl IntoResponse {
    let stats = ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        tracks: state.catalog.get_tracks_count(),
        images: state.catalog.get_images_count(),
    };
    Json(stats)
}

#[derive(Deserialize)]
struct TrackSearchBody {
    #[serde(default)]
    query: String,
    #[serde(flatten)]
    filters: TrackFilters,
}

#[derive(Serialize)]
struct ScoredTrack {
    score: f64,
    #[serde(flatten)]
    track: Track,
}

#[derive(Serialize)]
struct TrackSearchResponse {
    best: Track,
    results: Vec<ScoredTrack>,
}

async fn search_tracks(
    State(selector): State<SharedSelector>,
    Json(body): Json<TrackSearchBody>,
) -> Response {
    let ranked = selector.pick_tracks(&body.query, &body.filters);
    let results: Vec<ScoredTrack> = ranked
        .iter()
        .map(|r| ScoredTrack {
            score: r.score,
            track: r.track.clone(),
        })
        .collect();
    match results.first() {
        Some(best) => Json(TrackSearchResponse {
            best: best.track.clone(),
            results,
        })
        .into_response(),
        // The cascade guarantees a result for a non-empty catalog; an empty
        // catalog cannot get past startup.
        None => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

#[derive(Deserialize)]
struct ImageSearchBody {
    #[serde(default)]
    query: String,
    #[serde(flatten)]
    filters: ImageFilters,
}

#[derive(Serialize)]
struct ScoredImage {
    score: f64,
    #[serde(flatten)]
    image: ImageEntry,
}

#[derive(Serialize)]
struct ImageSearchResponse {
    best: ImageEntry,
    results: Vec<ScoredImage>,
}

async fn search_images(
    State(selector): State<SharedSelector>,
    Json(body): Json<ImageSearchBody>,
) -> Response {
    let ranked = selector.pick_images(&body.query, &body.filters);
    let results: Vec<ScoredImage> = ranked
        .iter()
        .map(|r| ScoredImage {
            score: r.score,
            image: r.image.clone(),
        })
        .collect();
    match results.first() {
        Some(best) => Json(ImageSearchResponse {
            best: best.image.clone(),
            results,
        })
        .into_response(),
        None => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

#[derive(Deserialize)]
struct GenerateMusicBody {
    #[serde(default)]
    prompt: String,
    #[serde(flatten)]
    filters: TrackFilters,
    /// Overrides the selected track's own duration when set.
    duration: Option<u32>,
}

/// Select the best-matching track for the prompt, then render audio from its
/// metadata. The WAV bytes go in the body; the sidecar metadata travels as
/// response headers so the payload stays a plain playable stream.
async fn generate_music(
    State(selector): State<SharedSelector>,
    Json(body): Json<GenerateMusicBody>,
) -> Response {
    let ranked = selector.pick_tracks(&body.prompt, &body.filters);
    let track = match ranked.first() {
        Some(ranked) => ranked.track,
        None => return StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    };

    let request = SynthesisRequest {
        genre: track.genre.clone(),
        mood: track.mood.clone(),
        tempo: track.tempo,
        key: track.key.clone(),
        duration: body.duration.unwrap_or(track.duration),
        language: track.language.clone(),
    };
    let audio = synthesize(&request);

    wav_response(audio.wav, &audio.metadata, Some(track))
}

#[derive(Deserialize)]
struct FallbackToneBody {
    duration: u32,
}

/// The guaranteed-playable substitute clip, exposed so clients can swap it
/// in when their player rejects the generated stream.
async fn generate_fallback(Json(body): Json<FallbackToneBody>) -> Response {
    let audio = fallback_tone(body.duration);
    wav_response(audio.wav, &audio.metadata, None)
}

fn wav_response(
    wav: Vec<u8>,
    metadata: &crate::synth::AudioMetadata,
    track: Option<&Track>,
) -> Response {
    let mut response = (
        [
            (header::CONTENT_TYPE.as_str(), "audio/wav".to_string()),
            ("x-audio-sample-rate", metadata.sample_rate.to_string()),
            ("x-audio-bit-depth", metadata.bit_depth.to_string()),
            ("x-audio-channels", metadata.channels.to_string()),
            ("x-audio-duration", metadata.duration.to_string()),
        ],
        wav,
    )
        .into_response();

    if let Some(track) = track {
        if let Ok(value) = track.id.parse() {
            response.headers_mut().insert("x-track-id", value);
        }
    }
    response
}

pub fn make_app(catalog: Catalog, config: ServerConfig) -> Router {
    let state = ServerState::new(config, catalog);

    let search_routes: Router = Router::new()
        .route("/tracks", post(search_tracks))
        .route("/images", post(search_images))
        .with_state(state.clone());

    let generate_routes: Router = Router::new()
        .route("/music", post(generate_music))
        .route("/fallback-tone", post(generate_fallback))
        .with_state(state.clone());

    Router::new()
        .route("/", get(home))
        .with_state(state)
        .nest("/v1/search", search_routes)
        .nest("/v1/generate", generate_routes)
}

pub async fn run_server(catalog: Catalog, config: ServerConfig) -> Result<()> {
    let port = config.port;
    let app = make_app(catalog, config);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;
    info!("Listening on port {}", port);

    Ok(axum::serve(listener, app).await?)
}
