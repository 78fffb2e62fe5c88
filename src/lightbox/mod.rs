// Lightbox module - modal viewer state machine over one artist's portfolio
mod core;
mod types;


pub use core::LightboxController;
pub use types::*;
