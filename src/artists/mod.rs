// Artist data module - validation and read-only repository
mod core;
mod error;
mod types;
mod validator;

#[cfg(test)]
mod tests;

pub use core::ArtistRepository;
pub use error::ArtistsError;
pub use types::*;
pub use validator::{validate_artist, validate_portfolio_image};
