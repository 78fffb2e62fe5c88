use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub mod artists;
pub mod gallery;
pub mod handoff;
pub mod lightbox;
pub mod loader;
pub mod newsletter;
pub mod routing;
pub mod startup_checks;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub app: AppConfig,
    pub studio: StudioConfig,
    #[serde(default)]
    pub loader: LoaderConfig,
    #[serde(default)]
    pub gallery: GalleryConfig,
    #[serde(default)]
    pub newsletter: Option<newsletter::NewsletterConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub name: String,
    pub log_level: String,
    #[serde(default)]
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StudioConfig {
    /// Directory of per-artist TOML files; the file stem is the artist slug.
    pub data_directory: PathBuf,
    /// Root below which portfolio images live as
    /// `images/portfolio/<slug>/<filename>`.
    pub image_root: PathBuf,
    pub placeholder_filename: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoaderConfig {
    pub max_retries: u32,
    pub base_delay_ms: u64,
    pub stagger_ms: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GalleryConfig {
    pub popular_tag_limit: usize,
    /// Style filter controls render only above this many distinct styles.
    pub style_control_threshold: usize,
    /// Tag filter controls render only above this many distinct tags.
    pub tag_control_threshold: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app: AppConfig {
                name: "Valhalla Tattoo".to_string(),
                log_level: "info".to_string(),
                base_url: None,
            },
            studio: StudioConfig {
                data_directory: PathBuf::from("data"),
                image_root: PathBuf::from("site"),
                placeholder_filename: "placeholder.jpg".to_string(),
            },
            loader: LoaderConfig::default(),
            gallery: GalleryConfig::default(),
            newsletter: None,
        }
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay_ms: 1000,
            stagger_ms: 200,
        }
    }
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            popular_tag_limit: 8,
            style_control_threshold: 1,
            tag_control_threshold: 3,
        }
    }
}
