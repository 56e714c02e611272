//! The waveform rendering pipeline.
//!
//! Synthesis is a pure function over a bounded buffer: clamp the duration,
//! render one sample per index through the genre formula, shape the
//! boundaries with a linear envelope, run the mood post-filter, quantize to
//! 16-bit PCM and wrap in a WAV container. There is no state between calls
//! and no error path for expected inputs.

use serde::{Deserialize, Serialize};

use super::genre::Genre;
use super::key::base_frequency;
use super::mood::MoodEffect;
use super::wav::{self, WavSpec};

pub const SAMPLE_RATE: u32 = 44_100;
/// Hard ceiling on requested duration, bounds memory and CPU per call.
pub const MAX_DURATION_SECS: u32 = 180;
/// Fades never exceed this many seconds, nor 10% of the clip.
const MAX_FADE_SECS: f64 = 2.0;
const FADE_FRACTION: f64 = 0.1;

#[derive(Debug, Clone, Deserialize)]
pub struct SynthesisRequest {
    pub genre: String,
    pub mood: String,
    /// Beats per minute.
    pub tempo: u32,
    pub key: String,
    /// Requested duration in seconds, clamped to [`MAX_DURATION_SECS`].
    pub duration: u32,
    /// Carried through to metadata only, does not shape the audio.
    pub language: String,
}

/// Sidecar description of the produced WAV stream.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AudioMetadata {
    pub sample_rate: u32,
    pub bit_depth: u16,
    pub channels: u16,
    pub format: String,
    /// Effective duration in seconds after clamping.
    pub duration: u32,
}

impl AudioMetadata {
    fn mono_wav(duration: u32) -> AudioMetadata {
        AudioMetadata {
            sample_rate: SAMPLE_RATE,
            bit_depth: 16,
            channels: 1,
            format: "WAV".to_string(),
            duration,
        }
    }
}

pub struct SynthesizedAudio {
    pub wav: Vec<u8>,
    pub metadata: AudioMetadata,
}

/// Render the request into a complete WAV byte stream plus metadata.
pub fn synthesize(request: &SynthesisRequest) -> SynthesizedAudio {
    let duration = request.duration.min(MAX_DURATION_SECS);
    let genre = Genre::from_label(&request.genre);
    let mood = MoodEffect::from_label(&request.mood);
    let base = base_frequency(&request.key);
    let bps = request.tempo.max(1) as f64 / 60.0;

    let num_samples = (SAMPLE_RATE * duration) as usize;
    let mut samples = Vec::with_capacity(num_samples);
    for i in 0..num_samples {
        let t = i as f64 / SAMPLE_RATE as f64;
        samples.push(genre.sample(t, base, bps));
    }

    apply_envelope(&mut samples, duration);

    for (i, sample) in samples.iter_mut().enumerate() {
        let t = i as f64 / SAMPLE_RATE as f64;
        *sample = mood.apply(*sample, t);
    }

    SynthesizedAudio {
        wav: wav::encode(&quantize(&samples), WavSpec::mono_16bit(SAMPLE_RATE)),
        metadata: AudioMetadata::mono_wav(duration),
    }
}

/// Minimal guaranteed-playable clip: a single enveloped A4 sine, through the
/// same container assembly as the full pipeline. Callers substitute this
/// when anything downstream of `synthesize` goes wrong.
pub fn fallback_tone(requested_duration: u32) -> SynthesizedAudio {
    let duration = requested_duration.min(MAX_DURATION_SECS);
    let num_samples = (SAMPLE_RATE * duration) as usize;
    let mut samples = Vec::with_capacity(num_samples);
    for i in 0..num_samples {
        let t = i as f64 / SAMPLE_RATE as f64;
        samples.push(0.5 * (std::f64::consts::TAU * 440.0 * t).sin());
    }

    apply_envelope(&mut samples, duration);

    SynthesizedAudio {
        wav: wav::encode(&quantize(&samples), WavSpec::mono_16bit(SAMPLE_RATE)),
        metadata: AudioMetadata::mono_wav(duration),
    }
}

/// Linear fade-in over the head and fade-out over the tail, both
/// `min(2s, 10% of duration)` long. Kills the clicks at clip boundaries.
fn apply_envelope(samples: &mut [f64], duration: u32) {
    if samples.is_empty() {
        return;
    }
    let fade_secs = MAX_FADE_SECS.min(duration as f64 * FADE_FRACTION);
    let fade_samples = (fade_secs * SAMPLE_RATE as f64) as usize;
    if fade_samples == 0 {
        return;
    }

    let len = samples.len();
    for i in 0..fade_samples.min(len) {
        samples[i] *= i as f64 / fade_samples as f64;
    }
    for i in 0..fade_samples.min(len) {
        let j = len - 1 - i;
        samples[j] *= i as f64 / fade_samples as f64;
    }
}

/// Clamp to [-1, 1] and scale into the signed 16-bit range.
fn quantize(samples: &[f64]) -> Vec<i16> {
    samples
        .iter()
        .map(|s| (s.clamp(-1.0, 1.0) * i16::MAX as f64).round() as i16)
        .collect()
}
