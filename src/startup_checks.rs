use crate::Config;
use thiserror::Error;
use tracing::{error, info, warn};

#[derive(Debug, Error)]
pub enum StartupCheckError {
    #[error("Artist data directory does not exist: {0}")]
    DataDirectoryMissing(String),

    #[error("Artist data directory contains no artist files")]
    NoArtistFiles,

    #[error("Image root directory does not exist: {0}")]
    ImageRootMissing(String),

    #[error("Portfolio image directory missing for artist '{0}'")]
    PortfolioDirectoryMissing(String),

    #[error("Placeholder image missing for artist '{0}'")]
    PlaceholderMissing(String),
}

impl StartupCheckError {
    /// Critical failures abort startup; the rest only degrade image
    /// serving and are reported as warnings.
    pub fn is_critical(&self) -> bool {
        matches!(
            self,
            StartupCheckError::DataDirectoryMissing(_) | StartupCheckError::ImageRootMissing(_)
        )
    }
}

pub async fn perform_startup_checks(config: &Config) -> Result<(), Vec<StartupCheckError>> {
    let mut errors = Vec::new();

    info!("Performing startup checks...");

    // Check artist data directory
    let data_dir = &config.studio.data_directory;
    if !data_dir.exists() {
        error!("Artist data directory does not exist: {:?}", data_dir);
        errors.push(StartupCheckError::DataDirectoryMissing(
            data_dir.display().to_string(),
        ));
    } else {
        info!("Artist data directory exists: {:?}", data_dir);

        let mut artist_slugs = Vec::new();
        match tokio::fs::read_dir(data_dir).await {
            Ok(mut entries) => {
                while let Ok(Some(entry)) = entries.next_entry().await {
                    let path = entry.path();
                    if path.extension().is_some_and(|ext| ext == "toml") {
                        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                            artist_slugs.push(stem.to_lowercase());
                        }
                    }
                }
            }
            Err(e) => {
                error!("Artist data directory is not accessible: {}", e);
                errors.push(StartupCheckError::DataDirectoryMissing(
                    data_dir.display().to_string(),
                ));
            }
        }

        if artist_slugs.is_empty() {
            warn!("No artist files found in {:?}", data_dir);
            errors.push(StartupCheckError::NoArtistFiles);
        } else {
            info!("Found {} artist files", artist_slugs.len());
        }

        // Check per-artist image directories under the image root
        let image_root = &config.studio.image_root;
        if !image_root.exists() {
            error!("Image root directory does not exist: {:?}", image_root);
            errors.push(StartupCheckError::ImageRootMissing(
                image_root.display().to_string(),
            ));
        } else {
            info!("Image root directory exists: {:?}", image_root);

            for slug in &artist_slugs {
                let portfolio_dir = image_root.join("images").join("portfolio").join(slug);
                if !portfolio_dir.exists() {
                    warn!(
                        "Portfolio image directory missing for artist '{}': {:?}",
                        slug, portfolio_dir
                    );
                    errors.push(StartupCheckError::PortfolioDirectoryMissing(slug.clone()));
                    continue;
                }

                let placeholder = portfolio_dir.join(&config.studio.placeholder_filename);
                if !placeholder.exists() {
                    warn!(
                        "Placeholder image missing for artist '{}': {:?}",
                        slug, placeholder
                    );
                    errors.push(StartupCheckError::PlaceholderMissing(slug.clone()));
                }
            }
        }
    }

    if errors.is_empty() {
        info!("All startup checks passed");
        Ok(())
    } else {
        Err(errors)
    }
}
