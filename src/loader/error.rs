use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum LoaderError {
    /// Permanent failure: retry budget exhausted and every fallback
    /// strategy failed. The owning slot has been moved to its terminal
    /// error-displayed state.
    #[error("image loading failed after {attempts} attempts and all fallbacks: {url}")]
    AllFallbacksFailed { url: Url, attempts: u32 },
}
