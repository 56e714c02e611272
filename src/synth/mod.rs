mod engine;
mod genre;
mod key;
mod mood;
pub mod wav;

pub use engine::{
    fallback_tone, synthesize, AudioMetadata, SynthesisRequest, SynthesizedAudio,
    MAX_DURATION_SECS, SAMPLE_RATE,
};
pub use genre::Genre;
pub use key::base_frequency;
pub use mood::MoodEffect;
