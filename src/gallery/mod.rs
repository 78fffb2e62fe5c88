// Gallery module - facet derivation and combined style/tag filtering
mod core;
mod debounce;
mod types;


pub use core::{GalleryFilterEngine, popular_tags, unique_styles, unique_tags};
pub use debounce::Debouncer;
pub use types::*;
