use super::{error::ArtistsError, types::*, validator};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use tracing::{debug, info, warn};

/// Read-only facade over the studio's artist collection, keyed by slug.
///
/// Data is loaded once from a directory of per-artist TOML files and never
/// mutated afterwards. An artist file that fails validation is logged and
/// skipped; its valid siblings are still served.
pub struct ArtistRepository {
    artists: HashMap<String, Artist>,
    /// Slugs in listing order (explicit `position`, then slug).
    order: Vec<String>,
    reports: BTreeMap<String, ValidationReport>,
}

impl ArtistRepository {
    pub async fn load_from_directory(dir: &Path) -> Result<Self, ArtistsError> {
        if !dir.is_dir() {
            return Err(ArtistsError::DataDirectoryMissing(
                dir.display().to_string(),
            ));
        }

        info!("Loading artist data from directory: {:?}", dir);

        let mut artists = Vec::new();
        let mut reports = BTreeMap::new();

        let mut entries = tokio::fs::read_dir(dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().is_none_or(|ext| ext != "toml") {
                continue;
            }

            let slug = slug_from_file_name(&path)?;
            let content = tokio::fs::read_to_string(&path).await?;

            let record: serde_json::Value = match toml_edit::de::from_str(&content) {
                Ok(record) => record,
                Err(e) => {
                    // A file that is not even valid TOML gets a synthetic
                    // report so `check` output still covers it.
                    warn!("Failed to parse artist file {:?}: {}", path, e);
                    reports.insert(
                        slug,
                        ValidationReport::from_errors(vec![format!("TOML parse error: {e}")]),
                    );
                    continue;
                }
            };

            let report = validator::validate_artist(&record);
            if !report.is_valid {
                for error in &report.errors {
                    warn!("Artist '{}' data invalid: {}", slug, error);
                }
                reports.insert(slug, report);
                continue;
            }

            let mut artist: Artist = match serde_json::from_value(record) {
                Ok(artist) => artist,
                Err(e) => {
                    warn!("Failed to decode artist file {:?}: {}", path, e);
                    reports.insert(
                        slug,
                        ValidationReport::from_errors(vec![format!("decode error: {e}")]),
                    );
                    continue;
                }
            };

            if artist.slug != slug {
                warn!(
                    "Artist file {:?} declares slug '{}', using file stem '{}'",
                    path, artist.slug, slug
                );
                artist.slug = slug.clone();
            }

            debug!(
                "Loaded artist '{}' with {} portfolio images",
                slug,
                artist.portfolio.len()
            );
            reports.insert(slug, report);
            artists.push(artist);
        }

        info!("Loaded {} artists", artists.len());
        Ok(Self::build(artists, reports))
    }

    /// Construct directly from already-typed artists. Used by tests and by
    /// the minimal-functionality fallback path.
    pub fn from_artists(artists: Vec<Artist>) -> Self {
        Self::build(artists, BTreeMap::new())
    }

    fn build(mut artists: Vec<Artist>, reports: BTreeMap<String, ValidationReport>) -> Self {
        artists.sort_by(|a, b| {
            let pos_a = a.position.unwrap_or(u32::MAX);
            let pos_b = b.position.unwrap_or(u32::MAX);
            pos_a.cmp(&pos_b).then_with(|| a.slug.cmp(&b.slug))
        });

        let order: Vec<String> = artists.iter().map(|a| a.slug.clone()).collect();
        let artists = artists.into_iter().map(|a| (a.slug.clone(), a)).collect();

        Self {
            artists,
            order,
            reports,
        }
    }

    pub fn artist_by_slug(&self, slug: &str) -> Option<&Artist> {
        self.artists.get(slug)
    }

    pub fn portfolio(&self, slug: &str) -> Option<&[PortfolioImage]> {
        self.artist_by_slug(slug).map(|a| a.portfolio.as_slice())
    }

    pub fn image(&self, slug: &str, id: u32) -> Option<&PortfolioImage> {
        self.portfolio(slug)?.iter().find(|image| image.id == id)
    }

    /// Exact style match. Missing slug yields an empty result, not an error.
    pub fn filter_by_style(&self, slug: &str, style: TattooStyle) -> Vec<&PortfolioImage> {
        self.portfolio(slug)
            .map(|portfolio| {
                portfolio
                    .iter()
                    .filter(|image| image.style == style)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// OR semantics: an image is included when its tag set intersects the
    /// given set at all.
    pub fn filter_by_tags(&self, slug: &str, tags: &[&str]) -> Vec<&PortfolioImage> {
        self.portfolio(slug)
            .map(|portfolio| {
                portfolio
                    .iter()
                    .filter(|image| tags.iter().any(|tag| image.has_tag(tag)))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Sorted set of styles used anywhere across all artists.
    pub fn all_styles(&self) -> Vec<TattooStyle> {
        let mut styles: Vec<TattooStyle> = Vec::new();
        for artist in self.artists.values() {
            for image in &artist.portfolio {
                if !styles.contains(&image.style) {
                    styles.push(image.style);
                }
            }
        }
        styles.sort_by_key(|s| s.as_str());
        styles
    }

    /// Sorted set of tags used anywhere across all artists.
    pub fn all_tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = Vec::new();
        for artist in self.artists.values() {
            for image in &artist.portfolio {
                for tag in &image.tags {
                    if !tags.contains(tag) {
                        tags.push(tag.clone());
                    }
                }
            }
        }
        tags.sort();
        tags
    }

    pub fn slugs(&self) -> &[String] {
        &self.order
    }

    pub fn artists(&self) -> impl Iterator<Item = &Artist> {
        self.order.iter().filter_map(|slug| self.artists.get(slug))
    }

    pub fn len(&self) -> usize {
        self.artists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artists.is_empty()
    }

    /// Validation reports for every data file seen at load time, including
    /// the ones that were rejected.
    pub fn validation_reports(&self) -> &BTreeMap<String, ValidationReport> {
        &self.reports
    }
}

fn slug_from_file_name(path: &Path) -> Result<String, ArtistsError> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .map(|stem| stem.to_lowercase())
        .ok_or_else(|| ArtistsError::InvalidFileName(path.display().to_string()))
}
