// Image loader module - network-aware progressive loading with bounded
// retry and ordered fallback strategies
mod core;
mod error;
mod fetch;
mod tracker;
mod types;

#[cfg(test)]
mod tests;

pub use core::ImageLoader;
pub use error::LoaderError;
pub use fetch::{FetchError, FileFetcher, ImageFetcher};
pub use tracker::{ErrorTracker, LoadErrorKind, TrackedError};
pub use types::*;
