use tracing::debug;
use url::Url;

/// Derive an artist slug from a page path: the last path segment with any
/// `.html` suffix removed. Returns `None` when the path has no usable
/// segment.
pub fn artist_slug_from_path(path: &str) -> Option<String> {
    let segment = path
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|s| !s.is_empty())?;
    let slug = segment.strip_suffix(".html").unwrap_or(segment);
    if slug.is_empty() {
        None
    } else {
        Some(slug.to_lowercase())
    }
}

/// Build the canonical URL for one portfolio image. Filenames come straight
/// from artist data and may contain spaces or parentheses, so the segment
/// is percent-encoded.
pub fn portfolio_image_url(base: &Url, slug: &str, filename: &str) -> Result<Url, url::ParseError> {
    let path = format!(
        "images/portfolio/{}/{}",
        urlencoding::encode(slug),
        urlencoding::encode(filename)
    );
    let url = base.join(&path)?;
    debug!("Resolved portfolio image URL: {}", url);
    Ok(url)
}
