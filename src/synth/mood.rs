//! Mood post-filter applied after genre synthesis.

use std::f64::consts::TAU;

const TREMOLO_RATE_HZ: f64 = 5.0;
const TREMOLO_DEPTH: f64 = 0.2;
const ATTENUATION: f64 = 0.7;
const CLIP_DRIVE: f64 = 1.5;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MoodEffect {
    /// Amplitude modulation for energetic/party moods.
    Tremolo,
    /// Quieter rendition for soft moods.
    Attenuate,
    /// Hyperbolic-tangent saturation for aggressive moods.
    SoftClip,
    Identity,
}

impl MoodEffect {
    pub fn from_label(label: &str) -> MoodEffect {
        let label = label.to_lowercase();
        let has = |needle: &str| label.contains(needle);

        if has("energetic") || has("party") {
            MoodEffect::Tremolo
        } else if has("romantic") || has("peaceful") || has("sad") || has("melancholic") {
            MoodEffect::Attenuate
        } else if has("aggressive") || has("powerful") {
            MoodEffect::SoftClip
        } else {
            MoodEffect::Identity
        }
    }

    /// Transform one sample at time `t` seconds.
    pub fn apply(self, sample: f64, t: f64) -> f64 {
        match self {
            MoodEffect::Tremolo => {
                sample * (1.0 - TREMOLO_DEPTH + TREMOLO_DEPTH * (TAU * TREMOLO_RATE_HZ * t).sin())
            }
            MoodEffect::Attenuate => sample * ATTENUATION,
            MoodEffect::SoftClip => (sample * CLIP_DRIVE).tanh(),
            MoodEffect::Identity => sample,
        }
    }
}
