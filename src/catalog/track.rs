use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct Track {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub genre: String,
    pub language: String,
    /// Duration in seconds, always positive.
    pub duration: u32,
    pub mood: String,
    /// Beats per minute, typically 60-200.
    pub tempo: u32,
    /// Musical key name, e.g. "C Major" or "Am".
    pub key: String,
    pub year: Option<i32>,
    pub album: Option<String>,
    pub tags: Vec<String>,
}

impl Track {
    /// Concatenated lowercase text used for substring matching.
    pub fn searchable_text(&self) -> String {
        let mut text = format!(
            "{} {} {} {} {}",
            self.title, self.artist, self.genre, self.mood, self.language
        );
        for tag in &self.tags {
            text.push(' ');
            text.push_str(tag);
        }
        text.to_lowercase()
    }
}
