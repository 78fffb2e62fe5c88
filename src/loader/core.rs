use super::{
    error::LoaderError,
    fetch::{FetchError, ImageFetcher},
    tracker::{ErrorTracker, LoadErrorKind},
    types::*,
};
use crate::LoaderConfig;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

/// Loads a single image resource with an adaptive timeout, bounded
/// sequential retries, and ordered fallback strategies. Retries for one
/// image never overlap: the next attempt is only scheduled after the
/// previous one has timed out or errored.
pub struct ImageLoader {
    fetcher: Arc<dyn ImageFetcher>,
    policy: RetryPolicy,
    placeholder_filename: String,
    stagger: Duration,
    tracker: ErrorTracker,
}

enum AttemptError {
    Timeout,
    Fetch(FetchError),
}

impl ImageLoader {
    pub fn new(fetcher: Arc<dyn ImageFetcher>, config: &LoaderConfig, placeholder: &str) -> Self {
        Self {
            fetcher,
            policy: RetryPolicy::from(config),
            placeholder_filename: placeholder.to_string(),
            stagger: Duration::from_millis(config.stagger_ms),
            tracker: ErrorTracker::new(),
        }
    }

    pub fn tracker(&self) -> &ErrorTracker {
        &self.tracker
    }

    /// Drive one slot to a terminal state: `Loaded` on success (original or
    /// fallback), `ErrorDisplayed` once the retry budget and every fallback
    /// are exhausted. In the terminal case the slot's accessibility text is
    /// rewritten to acknowledge the failure.
    pub async fn load(
        &self,
        slot: &mut ImageSlot,
        quality: ConnectionQuality,
    ) -> Result<LoadedImage, LoaderError> {
        let timeout = quality.timeout();
        let mut attempt = 0u32;

        loop {
            match self.attempt(&slot.url, timeout).await {
                Ok(bytes) => {
                    debug!("Image loaded: {}", slot.url);
                    slot.state = ContainerState::Loaded;
                    return Ok(LoadedImage {
                        url: slot.url.clone(),
                        bytes,
                        via: LoadRoute::Original,
                    });
                }
                Err(e) => {
                    self.track_attempt(&e, &slot.url, attempt, quality);
                    if attempt < self.policy.max_retries {
                        tokio::time::sleep(self.policy.delay(attempt)).await;
                        attempt += 1;
                    } else {
                        break;
                    }
                }
            }
        }

        // Retry budget exhausted: this is now a permanent failure for the
        // original URL. Fallbacks are single best-effort attempts in fixed
        // order, no retry.
        warn!(
            "Image loading failed after {} attempts, trying fallbacks: {}",
            self.policy.total_attempts(),
            slot.url
        );

        for strategy in FallbackStrategy::ORDER {
            let Some(candidate) = strategy.rewrite(&slot.url, &self.placeholder_filename) else {
                continue;
            };
            if candidate == slot.url {
                continue;
            }

            match self.attempt(&candidate, timeout).await {
                Ok(bytes) => {
                    info!("Fallback image loaded via {:?}: {}", strategy, candidate);
                    slot.state = ContainerState::Loaded;
                    return Ok(LoadedImage {
                        url: candidate,
                        bytes,
                        via: LoadRoute::Fallback(strategy),
                    });
                }
                Err(e) => {
                    let message = match e {
                        AttemptError::Timeout => "timeout".to_string(),
                        AttemptError::Fetch(err) => err.to_string(),
                    };
                    debug!("Fallback {:?} failed for {}: {}", strategy, candidate, message);
                    self.tracker.record(
                        LoadErrorKind::Fallback,
                        message,
                        candidate.path().to_string(),
                        quality,
                    );
                }
            }
        }

        warn!("All fallback strategies failed for image: {}", slot.url);
        slot.state = ContainerState::ErrorDisplayed {
            placeholder_text: "Image unavailable".to_string(),
        };
        slot.alt_text = "Image failed to load - please try refreshing the page".to_string();

        Err(LoaderError::AllFallbacksFailed {
            url: slot.url.clone(),
            attempts: self.policy.total_attempts(),
        })
    }

    /// Conservative recovery path: plain sequential loads with a short
    /// stagger between starts and no retries. Returns how many slots ended
    /// up loaded.
    pub async fn load_all_staggered(
        &self,
        slots: &mut [ImageSlot],
        quality: ConnectionQuality,
    ) -> usize {
        let mut loaded = 0;
        for (index, slot) in slots.iter_mut().enumerate() {
            if index > 0 {
                tokio::time::sleep(self.stagger).await;
            }
            match self.attempt(&slot.url, quality.timeout()).await {
                Ok(_) => {
                    slot.state = ContainerState::Loaded;
                    loaded += 1;
                }
                Err(e) => {
                    self.track_attempt(&e, &slot.url, 0, quality);
                    slot.state = ContainerState::ErrorDisplayed {
                        placeholder_text: "Image unavailable".to_string(),
                    };
                    slot.alt_text =
                        "Image failed to load - please try refreshing the page".to_string();
                }
            }
        }
        loaded
    }

    async fn attempt(&self, url: &Url, timeout: Duration) -> Result<Vec<u8>, AttemptError> {
        match tokio::time::timeout(timeout, self.fetcher.fetch(url)).await {
            Ok(Ok(bytes)) => Ok(bytes),
            Ok(Err(e)) => Err(AttemptError::Fetch(e)),
            Err(_) => Err(AttemptError::Timeout),
        }
    }

    fn track_attempt(
        &self,
        error: &AttemptError,
        url: &Url,
        attempt: u32,
        quality: ConnectionQuality,
    ) {
        match error {
            AttemptError::Timeout => {
                warn!("Image loading timeout (attempt {}): {}", attempt + 1, url);
                self.tracker.record(
                    LoadErrorKind::Timeout,
                    format!("timeout on attempt {}", attempt + 1),
                    url.path().to_string(),
                    quality,
                );
            }
            AttemptError::Fetch(e) => {
                warn!(
                    "Image loading error (attempt {}): {}: {}",
                    attempt + 1,
                    url,
                    e
                );
                self.tracker.record(
                    LoadErrorKind::Transport,
                    e.to_string(),
                    url.path().to_string(),
                    quality,
                );
            }
        }
    }
}
