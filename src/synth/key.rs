//! Musical key to base frequency mapping.

/// Fallback when the key cannot be parsed: A4.
pub const DEFAULT_FREQUENCY: f64 = 440.0;

/// Equal-tempered fourth-octave frequencies for the 12 pitch classes,
/// indexed in semitones from C.
const PITCH_CLASS_FREQUENCIES: [f64; 12] = [
    261.63, // C
    277.18, // C#
    293.66, // D
    311.13, // D#
    329.63, // E
    349.23, // F
    369.99, // F#
    392.00, // G
    415.30, // G#
    440.00, // A
    466.16, // A#
    493.88, // B
];

/// Base frequency in Hz for a key name like "C", "C Major", "Am", "F#m" or
/// "Bb". Major and minor spellings share the same root, flats map to their
/// sharp equivalents, anything unparseable is 440 Hz.
pub fn base_frequency(key: &str) -> f64 {
    let mut chars = key.trim().chars();

    let letter = match chars.next() {
        Some(c) => c.to_ascii_uppercase(),
        None => return DEFAULT_FREQUENCY,
    };
    let natural = match letter {
        'C' => 0,
        'D' => 2,
        'E' => 4,
        'F' => 5,
        'G' => 7,
        'A' => 9,
        'B' => 11,
        _ => return DEFAULT_FREQUENCY,
    };

    let semitone = match chars.next() {
        Some('#') => (natural + 1) % 12,
        Some('b') => (natural + 11) % 12,
        _ => natural,
    };

    PITCH_CLASS_FREQUENCIES[semitone]
}
