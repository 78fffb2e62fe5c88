pub mod mailerlite;
pub mod null;
