//! Static catalog content.
//!
//! A hand-written base set of tracks and images plus deterministically
//! generated filler entries to reach the target pool sizes. Generation uses
//! no randomness so catalog order is stable across runs and tests can rely
//! on it for tie-breaking.

use super::{ImageEntry, Track};

const TARGET_TRACKS: usize = 36;
const TARGET_IMAGES: usize = 30;

fn track(
    id: &str,
    title: &str,
    artist: &str,
    genre: &str,
    language: &str,
    duration: u32,
    mood: &str,
    tempo: u32,
    key: &str,
    year: Option<i32>,
    album: Option<&str>,
    tags: &[&str],
) -> Track {
    Track {
        id: id.to_string(),
        title: title.to_string(),
        artist: artist.to_string(),
        genre: genre.to_string(),
        language: language.to_string(),
        duration,
        mood: mood.to_string(),
        tempo,
        key: key.to_string(),
        year,
        album: album.map(str::to_string),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

pub fn tracks() -> Vec<Track> {
    let mut out = vec![
        track(
            "trk-001",
            "Dil Ki Dhun",
            "Asha Verma",
            "Bollywood Pop",
            "Hindi",
            214,
            "Romantic",
            96,
            "C Major",
            Some(2021),
            Some("Mumbai Nights"),
            &["bollywood", "love", "duet", "strings"],
        ),
        track(
            "trk-002",
            "Chandigarh Drive",
            "Gurpreet Sandhu",
            "Punjabi",
            "Punjabi",
            198,
            "Energetic",
            128,
            "G",
            Some(2022),
            None,
            &["bhangra", "dhol", "party", "car"],
        ),
        track(
            "trk-003",
            "Kadal Alai",
            "S. Priyanka",
            "Tamil Film",
            "Tamil",
            241,
            "Melancholic",
            82,
            "Am",
            Some(2019),
            Some("Chennai Stories"),
            &["tamil", "waves", "cinematic"],
        ),
        track(
            "trk-004",
            "Neon Hearts",
            "The Arcadium",
            "Pop",
            "English",
            187,
            "Happy",
            118,
            "F",
            Some(2023),
            Some("Neon Hearts"),
            &["synth", "summer", "radio"],
        ),
        track(
            "trk-005",
            "Granite Sky",
            "Iron Meridian",
            "Rock",
            "English",
            253,
            "Aggressive",
            140,
            "E",
            Some(2018),
            Some("Fault Lines"),
            &["guitar", "anthem", "stadium"],
        ),
        track(
            "trk-006",
            "Midnight Circuit",
            "Velvet Modula",
            "Electronic",
            "English",
            302,
            "Party",
            126,
            "F#m",
            Some(2024),
            None,
            &["edm", "club", "bass", "night"],
        ),
        track(
            "trk-007",
            "Nocturne for a Quiet Room",
            "Elena Petrova",
            "Classical",
            "Instrumental",
            345,
            "Peaceful",
            66,
            "Eb",
            Some(2015),
            Some("Quiet Rooms"),
            &["piano", "nocturne", "calm"],
        ),
        track(
            "trk-008",
            "Blue Umbrella",
            "Marcus Cole Trio",
            "Jazz",
            "English",
            276,
            "Smooth",
            104,
            "Bb",
            Some(2016),
            Some("Rainy Sessions"),
            &["trio", "saxophone", "rain"],
        ),
        track(
            "trk-009",
            "Corazon de Fuego",
            "Lucia Morales",
            "Latin Pop",
            "Spanish",
            205,
            "Energetic",
            102,
            "D",
            Some(2022),
            None,
            &["latin", "dance", "fiesta"],
        ),
        track(
            "trk-010",
            "Layali Beirut",
            "Omar Khalil",
            "Arabic Pop",
            "Arabic",
            228,
            "Romantic",
            94,
            "Dm",
            Some(2020),
            Some("Layali"),
            &["oud", "beirut", "night"],
        ),
        track(
            "trk-011",
            "Starlight Run",
            "HANEUL",
            "K-Pop",
            "Korean",
            192,
            "Powerful",
            132,
            "A",
            Some(2023),
            Some("Orbit"),
            &["kpop", "dance", "chorus"],
        ),
        track(
            "trk-012",
            "Sakura Static",
            "Mirai Waves",
            "J-Pop",
            "Japanese",
            211,
            "Happy",
            122,
            "G Major",
            Some(2021),
            None,
            &["jpop", "spring", "city"],
        ),
    ];
    out.extend(filler_tracks(TARGET_TRACKS - out.len()));
    out
}

// Rotating value pools for filler generation. Indexing is by entry number so
// the combinations drift against each other and no two fillers are equal.
const FILLER_GENRES: [(&str, &str); 6] = [
    ("Bollywood", "Hindi"),
    ("Punjabi", "Punjabi"),
    ("Pop", "English"),
    ("Electronic", "English"),
    ("Classical", "Instrumental"),
    ("Telugu Film", "Telugu"),
];
const FILLER_MOODS: [&str; 5] = ["Happy", "Sad", "Energetic", "Peaceful", "Romantic"];
const FILLER_KEYS: [&str; 7] = ["C", "D", "E", "F", "G", "A", "B"];

fn filler_tracks(count: usize) -> Vec<Track> {
    (0..count)
        .map(|i| {
            let (genre, language) = FILLER_GENRES[i % FILLER_GENRES.len()];
            let mood = FILLER_MOODS[i % FILLER_MOODS.len()];
            let key = FILLER_KEYS[i % FILLER_KEYS.len()];
            track(
                &format!("trk-f{:03}", i + 1),
                &format!("{} Sketch No. {}", genre, i + 1),
                &format!("Studio Ensemble {}", (i % 4) + 1),
                genre,
                language,
                150 + (i as u32 % 6) * 20,
                mood,
                80 + (i as u32 % 7) * 10,
                key,
                Some(2010 + (i as i32 % 14)),
                None,
                &["generated", "instrumental"],
            )
        })
        .collect()
}

fn image(
    id: &str,
    title: &str,
    description: &str,
    category: &str,
    style: &str,
    mood: &str,
    tags: &[&str],
    colors: &[&str],
    complexity: u32,
    popularity: u32,
) -> ImageEntry {
    ImageEntry {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        image_url: format!("https://images.musegen.example/{}.jpg", id),
        category: category.to_string(),
        style: style.to_string(),
        mood: mood.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        colors: colors.iter().map(|c| c.to_string()).collect(),
        resolution: "1024x1024".to_string(),
        complexity,
        popularity,
    }
}

pub fn images() -> Vec<ImageEntry> {
    let mut out = vec![
        image(
            "img-001",
            "Golden Hour Dog",
            "A retriever sitting in a sunlit meadow at dusk",
            "realistic",
            "photography",
            "peaceful",
            &["dog", "golden", "meadow", "sunset"],
            &["gold", "green"],
            45,
            92,
        ),
        image(
            "img-002",
            "Dinner Time",
            "A happy dog eating from a bowl in a bright kitchen",
            "realistic",
            "photography",
            "happy",
            &["dog", "food", "eating", "kitchen"],
            &["brown", "white"],
            40,
            74,
        ),
        image(
            "img-003",
            "Fractured Light",
            "Overlapping translucent planes of refracted color",
            "abstract",
            "geometric",
            "energetic",
            &["prism", "light", "shapes"],
            &["cyan", "magenta", "yellow"],
            78,
            81,
        ),
        image(
            "img-004",
            "Neon Alley",
            "A rain-soaked cyberpunk alley lit by holographic signs",
            "digital",
            "cyberpunk",
            "moody",
            &["city", "neon", "rain", "night"],
            &["purple", "blue"],
            88,
            95,
        ),
        image(
            "img-005",
            "Harbor at Dawn",
            "Fishing boats in soft morning haze, loose brushwork",
            "painterly",
            "impressionist",
            "peaceful",
            &["harbor", "boats", "dawn", "sea"],
            &["blue", "orange"],
            62,
            67,
        ),
        image(
            "img-006",
            "Mountain Mirror",
            "A still alpine lake reflecting snowcapped peaks",
            "realistic",
            "landscape",
            "peaceful",
            &["mountain", "lake", "reflection", "snow"],
            &["white", "blue"],
            55,
            89,
        ),
        image(
            "img-007",
            "Circuit Bloom",
            "Flowers growing out of a glowing motherboard",
            "digital",
            "surreal",
            "curious",
            &["flowers", "technology", "glow"],
            &["green", "pink"],
            83,
            72,
        ),
        image(
            "img-008",
            "Storm Study IV",
            "Violent charcoal sweeps over a pale field",
            "abstract",
            "expressionist",
            "aggressive",
            &["storm", "charcoal", "motion"],
            &["black", "grey"],
            70,
            58,
        ),
        image(
            "img-009",
            "Venetian Market",
            "A crowded canal-side market in warm oils",
            "painterly",
            "baroque",
            "lively",
            &["market", "canal", "crowd", "food"],
            &["red", "gold"],
            91,
            63,
        ),
        image(
            "img-010",
            "Desert Wanderer",
            "A lone figure crossing rippled dunes under a huge sun",
            "realistic",
            "photography",
            "melancholic",
            &["desert", "dunes", "sun", "journey"],
            &["orange", "red"],
            48,
            85,
        ),
    ];
    out.extend(filler_images(TARGET_IMAGES - out.len()));
    out
}

const FILLER_CATEGORIES: [&str; 4] = ["realistic", "abstract", "digital", "painterly"];
const FILLER_STYLES: [&str; 5] = [
    "minimalist",
    "geometric",
    "concept-art",
    "watercolor",
    "collage",
];
const FILLER_SUBJECTS: [&str; 6] = ["forest", "ocean", "city", "portrait", "still-life", "sky"];

fn filler_images(count: usize) -> Vec<ImageEntry> {
    (0..count)
        .map(|i| {
            let category = FILLER_CATEGORIES[i % FILLER_CATEGORIES.len()];
            let style = FILLER_STYLES[i % FILLER_STYLES.len()];
            let subject = FILLER_SUBJECTS[i % FILLER_SUBJECTS.len()];
            image(
                &format!("img-f{:03}", i + 1),
                &format!("{} Study No. {}", capitalize(subject), i + 1),
                &format!("A {} {} rendering of a {}", category, style, subject),
                category,
                style,
                FILLER_MOODS[i % FILLER_MOODS.len()],
                &[subject, style],
                &["grey"],
                20 + (i as u32 * 7) % 80,
                10 + (i as u32 * 13) % 80,
            )
        })
        .collect()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_pools_reach_target_sizes() {
        assert_eq!(tracks().len(), TARGET_TRACKS);
        assert_eq!(images().len(), TARGET_IMAGES);
    }

    #[test]
    fn ids_are_unique() {
        let track_ids: HashSet<String> = tracks().into_iter().map(|t| t.id).collect();
        assert_eq!(track_ids.len(), TARGET_TRACKS);

        let image_ids: HashSet<String> = images().into_iter().map(|i| i.id).collect();
        assert_eq!(image_ids.len(), TARGET_IMAGES);
    }

    #[test]
    fn generation_is_deterministic() {
        let first: Vec<String> = tracks().into_iter().map(|t| t.title).collect();
        let second: Vec<String> = tracks().into_iter().map(|t| t.title).collect();
        assert_eq!(first, second);
    }
}
