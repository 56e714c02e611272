use anyhow::{bail, Result};
use rand::Rng;

use super::{seed, ImageEntry, Track};

/// The static, read-only content pools. Built exactly once at process start
/// and never mutated afterwards, so it can be shared across tasks without
/// synchronization.
#[derive(Debug)]
pub struct Catalog {
    tracks: Vec<Track>,
    images: Vec<ImageEntry>,
}

fn check_tracks(tracks: &[Track]) -> Result<()> {
    if tracks.is_empty() {
        bail!("Track pool is empty, refusing to serve requests.");
    }
    for track in tracks {
        if track.id.is_empty() || track.title.is_empty() {
            bail!("Track with empty id or title: {:?}", track);
        }
        if track.tempo == 0 {
            bail!("Track {} has zero tempo.", track.id);
        }
        if track.duration == 0 {
            bail!("Track {} has zero duration.", track.id);
        }
    }
    Ok(())
}

fn check_images(images: &[ImageEntry]) -> Result<()> {
    if images.is_empty() {
        bail!("Image pool is empty, refusing to serve requests.");
    }
    for image in images {
        if image.id.is_empty() || image.title.is_empty() {
            bail!("Image with empty id or title: {:?}", image);
        }
    }
    Ok(())
}

impl Catalog {
    pub fn build() -> Result<Catalog> {
        let tracks = seed::tracks();
        let images = seed::images();

        check_tracks(&tracks)?;
        check_images(&images)?;

        Ok(Catalog { tracks, images })
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn images(&self) -> &[ImageEntry] {
        &self.images
    }

    pub fn get_track(&self, id: &str) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == id)
    }

    pub fn get_image(&self, id: &str) -> Option<&ImageEntry> {
        self.images.iter().find(|i| i.id == id)
    }

    pub fn get_tracks_count(&self) -> usize {
        self.tracks.len()
    }

    pub fn get_images_count(&self) -> usize {
        self.images.len()
    }

    /// Uniform random pick over the whole track pool. The pool is non-empty,
    /// `build` rejects empty catalogs.
    pub fn random_track(&self) -> &Track {
        let index = rand::rng().random_range(0..self.tracks.len());
        &self.tracks[index]
    }

    /// Uniform random pick over the whole image pool.
    pub fn random_image(&self) -> &ImageEntry {
        let index = rand::rng().random_range(0..self.images.len());
        &self.images[index]
    }
}
