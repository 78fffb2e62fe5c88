use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("not an image resource: {0}")]
    NotAnImage(String),

    #[error("transport error: {0}")]
    Transport(String),
}

/// One attempt to materialize the bytes behind an image URL. The loader
/// owns timeouts and retries; implementations just try once.
#[async_trait]
pub trait ImageFetcher: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>, FetchError>;
    fn name(&self) -> &str;
}

/// Resolves image URLs against a local site root, the same layout the
/// published site serves from (`<root>/images/portfolio/<slug>/<file>`).
pub struct FileFetcher {
    root: PathBuf,
}

impl FileFetcher {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn resolve(&self, url: &Url) -> Result<PathBuf, FetchError> {
        let mut path = self.root.clone();
        let segments = url
            .path_segments()
            .ok_or_else(|| FetchError::NotFound(url.to_string()))?;
        for segment in segments {
            if segment.is_empty() {
                continue;
            }
            let decoded = urlencoding::decode(segment)
                .map_err(|e| FetchError::Transport(e.to_string()))?;
            // Reject traversal rather than resolving outside the root.
            if decoded == ".." || decoded.contains('/') || decoded.contains('\\') {
                return Err(FetchError::NotFound(url.to_string()));
            }
            path.push(decoded.as_ref());
        }
        Ok(path)
    }
}

#[async_trait]
impl ImageFetcher for FileFetcher {
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>, FetchError> {
        let path = self.resolve(url)?;

        let is_image = mime_guess::from_path(&path)
            .first()
            .is_some_and(|mime| mime.type_() == mime_guess::mime::IMAGE);
        if !is_image {
            return Err(FetchError::NotAnImage(path.display().to_string()));
        }

        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(FetchError::NotFound(path.display().to_string()))
            }
            Err(e) => Err(FetchError::Transport(e.to_string())),
        }
    }

    fn name(&self) -> &str {
        "local site root"
    }
}
