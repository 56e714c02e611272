use anyhow::Result;
use tracing::info;

use super::Catalog;

/// Build the catalog and log a summary, the startup entry point.
pub fn load_catalog() -> Result<Catalog> {
    let catalog = Catalog::build()?;
    info!(
        "Catalog has:\n{} tracks\n{} images",
        catalog.get_tracks_count(),
        catalog.get_images_count()
    );
    Ok(catalog)
}
