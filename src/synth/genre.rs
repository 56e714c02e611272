//! Genre dispatch for the additive synthesis formulas.
//!
//! Free-text genre names map onto a closed set of variants, each with one
//! pure sample function: a fixed sum of sine components at harmonic ratios
//! of the base frequency plus a beat-gated percussive term. The beat index
//! is `floor(time * beats_per_second * k) mod m` with k and m fixed per
//! genre, which gates a short sine burst on and off like a drum pattern.

use std::f64::consts::TAU;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Genre {
    Bollywood,
    Punjabi,
    SouthIndian,
    Pop,
    Rock,
    Electronic,
    Classical,
    Jazz,
    Latin,
    Arabic,
    KPop,
    JPop,
    Generic,
}

impl Genre {
    /// Case-insensitive, substring-tolerant mapping from free text. The
    /// K-Pop/J-Pop checks run before the plain "pop" check so "K-Pop" does
    /// not collapse into Pop. Unrecognized text is Generic.
    pub fn from_label(label: &str) -> Genre {
        let label = label.to_lowercase();
        let has = |needle: &str| label.contains(needle);

        if has("bollywood") || has("hindi") {
            Genre::Bollywood
        } else if has("punjabi") || has("bhangra") {
            Genre::Punjabi
        } else if has("tamil") || has("telugu") || has("south indian") {
            Genre::SouthIndian
        } else if has("k-pop") || has("kpop") || has("korean") {
            Genre::KPop
        } else if has("j-pop") || has("jpop") || has("japanese") {
            Genre::JPop
        } else if has("rock") {
            Genre::Rock
        } else if has("electronic") || has("edm") || has("techno") || has("house") {
            Genre::Electronic
        } else if has("classical") || has("orchestral") {
            Genre::Classical
        } else if has("jazz") {
            Genre::Jazz
        } else if has("latin") || has("spanish") || has("reggaeton") {
            Genre::Latin
        } else if has("arabic") || has("arab") {
            Genre::Arabic
        } else if has("pop") || has("english") {
            Genre::Pop
        } else {
            Genre::Generic
        }
    }

    /// One sample of the genre formula at time `t` seconds.
    pub fn sample(self, t: f64, base: f64, bps: f64) -> f64 {
        match self {
            Genre::Bollywood => bollywood(t, base, bps),
            Genre::Punjabi => punjabi(t, base, bps),
            Genre::SouthIndian => south_indian(t, base, bps),
            Genre::Pop => pop(t, base, bps),
            Genre::Rock => rock(t, base, bps),
            Genre::Electronic => electronic(t, base, bps),
            Genre::Classical => classical(t, base, bps),
            Genre::Jazz => jazz(t, base, bps),
            Genre::Latin => latin(t, base, bps),
            Genre::Arabic => arabic(t, base, bps),
            Genre::KPop => kpop(t, base, bps),
            Genre::JPop => jpop(t, base, bps),
            Genre::Generic => generic(t, base, bps),
        }
    }
}

fn sine(freq: f64, t: f64) -> f64 {
    (TAU * freq * t).sin()
}

/// Beat index `floor(t * bps * k) mod m`.
fn beat(t: f64, bps: f64, k: f64, m: u32) -> u32 {
    ((t * bps * k).floor() as i64).rem_euclid(m as i64) as u32
}

fn bollywood(t: f64, base: f64, bps: f64) -> f64 {
    let melody = 0.35 * sine(base, t) + 0.2 * sine(base * 1.25, t) + 0.15 * sine(base * 1.5, t);
    // Tabla-like hits on beats 0 and 2 of a 4-count at double time.
    let tabla = match beat(t, bps, 2.0, 4) {
        0 | 2 => 0.2 * sine(95.0, t),
        _ => 0.0,
    };
    melody + tabla
}

fn punjabi(t: f64, base: f64, bps: f64) -> f64 {
    let melody = 0.3 * sine(base, t) + 0.25 * sine(base * 1.5, t);
    // Dhol pattern: heavy downbeat, lighter off-beats.
    let dhol = match beat(t, bps, 4.0, 8) {
        0 => 0.3 * sine(70.0, t),
        2 | 5 => 0.18 * sine(140.0, t),
        _ => 0.0,
    };
    melody + dhol
}

fn south_indian(t: f64, base: f64, bps: f64) -> f64 {
    let melody = 0.35 * sine(base, t) + 0.2 * sine(base * 1.2, t) + 0.1 * sine(base * 2.0, t);
    let mridangam = match beat(t, bps, 2.0, 8) {
        0 | 3 | 6 => 0.2 * sine(110.0, t),
        _ => 0.0,
    };
    melody + mridangam
}

fn pop(t: f64, base: f64, bps: f64) -> f64 {
    let melody = 0.4 * sine(base, t) + 0.2 * sine(base * 2.0, t);
    let kick = match beat(t, bps, 1.0, 2) {
        0 => 0.25 * sine(60.0, t),
        _ => 0.0,
    };
    melody + kick
}

fn rock(t: f64, base: f64, bps: f64) -> f64 {
    // Power-chord voicing: root, fifth, octave.
    let chord = 0.3 * sine(base, t) + 0.25 * sine(base * 1.5, t) + 0.15 * sine(base * 2.0, t);
    let drums = match beat(t, bps, 2.0, 4) {
        0 => 0.25 * sine(55.0, t),
        2 => 0.2 * sine(180.0, t),
        _ => 0.0,
    };
    chord + drums
}

fn electronic(t: f64, base: f64, bps: f64) -> f64 {
    let lead = 0.3 * sine(base, t) + 0.2 * sine(base * 0.5, t);
    // Four-on-the-floor: every beat gets a kick.
    let kick = match beat(t, bps, 1.0, 1) {
        0 => 0.35 * sine(50.0, t),
        _ => 0.0,
    };
    let hat = match beat(t, bps, 4.0, 4) {
        2 => 0.1 * sine(800.0, t),
        _ => 0.0,
    };
    lead + kick + hat
}

fn classical(t: f64, base: f64, _bps: f64) -> f64 {
    // No percussion, just a soft harmonic stack.
    0.35 * sine(base, t) + 0.25 * sine(base * 1.25, t) + 0.15 * sine(base * 1.5, t)
        + 0.08 * sine(base * 2.0, t)
}

fn jazz(t: f64, base: f64, bps: f64) -> f64 {
    // Major seventh color tone over a walking low end.
    let chord = 0.3 * sine(base, t) + 0.2 * sine(base * 1.25, t) + 0.12 * sine(base * 1.875, t);
    let ride = match beat(t, bps, 3.0, 6) {
        0 | 3 | 5 => 0.08 * sine(600.0, t),
        _ => 0.0,
    };
    let bass = 0.15 * sine(base * 0.5, t);
    chord + ride + bass
}

fn latin(t: f64, base: f64, bps: f64) -> f64 {
    let melody = 0.35 * sine(base, t) + 0.2 * sine(base * 1.5, t);
    // Clave-flavored gate over an 8-count.
    let clave = match beat(t, bps, 2.0, 8) {
        0 | 3 | 6 => 0.2 * sine(220.0, t),
        _ => 0.0,
    };
    melody + clave
}

fn arabic(t: f64, base: f64, bps: f64) -> f64 {
    // Quarter-tone flavored second step at 1.06x.
    let melody = 0.35 * sine(base, t) + 0.25 * sine(base * 1.06, t) + 0.12 * sine(base * 1.5, t);
    let darbuka = match beat(t, bps, 2.0, 8) {
        0 | 4 => 0.22 * sine(85.0, t),
        2 | 7 => 0.12 * sine(170.0, t),
        _ => 0.0,
    };
    melody + darbuka
}

fn kpop(t: f64, base: f64, bps: f64) -> f64 {
    let lead = 0.35 * sine(base, t) + 0.2 * sine(base * 2.0, t) + 0.1 * sine(base * 3.0, t);
    let kick = match beat(t, bps, 2.0, 4) {
        0 | 1 => 0.25 * sine(58.0, t),
        _ => 0.0,
    };
    lead + kick
}

fn jpop(t: f64, base: f64, bps: f64) -> f64 {
    let lead = 0.35 * sine(base, t) + 0.25 * sine(base * 1.25, t) + 0.1 * sine(base * 2.5, t);
    let kick = match beat(t, bps, 1.0, 2) {
        0 => 0.2 * sine(65.0, t),
        _ => 0.0,
    };
    lead + kick
}

fn generic(t: f64, base: f64, bps: f64) -> f64 {
    let melody = 0.4 * sine(base, t) + 0.2 * sine(base * 2.0, t);
    let pulse = match beat(t, bps, 1.0, 4) {
        0 => 0.15 * sine(80.0, t),
        _ => 0.0,
    };
    melody + pulse
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // Label mapping
    // ==========================================================================

    #[test]
    fn maps_documented_aliases() {
        assert_eq!(Genre::from_label("Bollywood"), Genre::Bollywood);
        assert_eq!(Genre::from_label("hindi film"), Genre::Bollywood);
        assert_eq!(Genre::from_label("Punjabi"), Genre::Punjabi);
        assert_eq!(Genre::from_label("Tamil"), Genre::SouthIndian);
        assert_eq!(Genre::from_label("telugu"), Genre::SouthIndian);
        assert_eq!(Genre::from_label("Pop"), Genre::Pop);
        assert_eq!(Genre::from_label("english pop"), Genre::Pop);
        assert_eq!(Genre::from_label("ROCK"), Genre::Rock);
        assert_eq!(Genre::from_label("edm"), Genre::Electronic);
        assert_eq!(Genre::from_label("Electronic Dance"), Genre::Electronic);
        assert_eq!(Genre::from_label("classical"), Genre::Classical);
        assert_eq!(Genre::from_label("Jazz"), Genre::Jazz);
        assert_eq!(Genre::from_label("latin"), Genre::Latin);
        assert_eq!(Genre::from_label("spanish"), Genre::Latin);
        assert_eq!(Genre::from_label("arabic"), Genre::Arabic);
        assert_eq!(Genre::from_label("korean"), Genre::KPop);
        assert_eq!(Genre::from_label("japanese"), Genre::JPop);
    }

    #[test]
    fn kpop_and_jpop_win_over_plain_pop() {
        assert_eq!(Genre::from_label("K-Pop"), Genre::KPop);
        assert_eq!(Genre::from_label("kpop"), Genre::KPop);
        assert_eq!(Genre::from_label("J-Pop"), Genre::JPop);
    }

    #[test]
    fn substring_tolerance() {
        assert_eq!(Genre::from_label("Bollywood Pop"), Genre::Bollywood);
        assert_eq!(Genre::from_label("indie rock revival"), Genre::Rock);
    }

    #[test]
    fn unknown_maps_to_generic() {
        assert_eq!(Genre::from_label(""), Genre::Generic);
        assert_eq!(Genre::from_label("polka"), Genre::Generic);
        assert_eq!(Genre::from_label("whale song"), Genre::Generic);
    }

    // ==========================================================================
    // Sample functions
    // ==========================================================================

    const ALL_GENRES: [Genre; 13] = [
        Genre::Bollywood,
        Genre::Punjabi,
        Genre::SouthIndian,
        Genre::Pop,
        Genre::Rock,
        Genre::Electronic,
        Genre::Classical,
        Genre::Jazz,
        Genre::Latin,
        Genre::Arabic,
        Genre::KPop,
        Genre::JPop,
        Genre::Generic,
    ];

    #[test]
    fn samples_stay_within_unit_range() {
        for genre in ALL_GENRES {
            for i in 0..4410 {
                let t = i as f64 / 44_100.0;
                let s = genre.sample(t, 440.0, 2.0);
                assert!(
                    s.abs() <= 1.0,
                    "{:?} produced out-of-range sample {} at t={}",
                    genre,
                    s,
                    t
                );
            }
        }
    }

    #[test]
    fn sample_functions_are_pure() {
        for genre in ALL_GENRES {
            let a = genre.sample(0.123, 329.63, 2.4);
            let b = genre.sample(0.123, 329.63, 2.4);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn beat_index_wraps() {
        // bps=2, k=2 -> four gate steps per second.
        assert_eq!(beat(0.0, 2.0, 2.0, 4), 0);
        assert_eq!(beat(0.3, 2.0, 2.0, 4), 1);
        assert_eq!(beat(0.6, 2.0, 2.0, 4), 2);
        assert_eq!(beat(1.1, 2.0, 2.0, 4), 0);
    }
}
