//! Musegen server library.
//!
//! A demo backend for "AI-generated" art: prompts are matched against
//! static catalogs of tracks and images by a scoring selector, and audio is
//! procedurally synthesized into a WAV stream. Nothing here performs real
//! generative inference.

pub mod catalog;
pub mod selector;
pub mod server;
pub mod synth;

// Re-export commonly used types for convenience
pub use catalog::{load_catalog, Catalog, ImageEntry, Track};
pub use selector::{ImageFilters, Selector, TrackFilters};
pub use server::{make_app, run_server, ServerConfig};
pub use synth::{fallback_tone, synthesize, SynthesisRequest};
