mod catalog;
mod image;
mod load;
mod seed;
mod track;

pub use catalog::Catalog;
pub use image::ImageEntry;
pub use load::load_catalog;
pub use track::Track;
