mod score;
mod selector;

pub use score::{score_image, score_track, tokenize};
pub use selector::{ImageFilters, RankedImage, RankedTrack, Selector, TrackFilters};
