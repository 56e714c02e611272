use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct ImageEntry {
    pub id: String,
    pub title: String,
    pub description: String,
    /// External URL, not owned by this system.
    pub image_url: String,
    /// One of realistic/abstract/digital/painterly, stored as free text.
    pub category: String,
    pub style: String,
    pub mood: String,
    pub tags: Vec<String>,
    pub colors: Vec<String>,
    pub resolution: String,
    /// 0-100.
    pub complexity: u32,
    /// 0-100, drives the default result ordering.
    pub popularity: u32,
}

impl ImageEntry {
    /// Concatenated lowercase text used for substring matching.
    pub fn searchable_text(&self) -> String {
        let mut text = format!(
            "{} {} {} {} {}",
            self.title, self.description, self.category, self.style, self.mood
        );
        for tag in &self.tags {
            text.push(' ');
            text.push_str(tag);
        }
        text.to_lowercase()
    }
}
