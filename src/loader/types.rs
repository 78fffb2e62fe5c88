use crate::LoaderConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// Effective connection type as reported by the client, used to pick an
/// attempt timeout. Unknown connections get the fast-path timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConnectionQuality {
    #[serde(rename = "slow-2g")]
    Slow2g,
    #[serde(rename = "2g")]
    TwoG,
    #[serde(rename = "3g")]
    ThreeG,
    #[serde(rename = "4g")]
    FourG,
    #[default]
    #[serde(rename = "unknown")]
    Unknown,
}

impl ConnectionQuality {
    pub fn timeout(&self) -> Duration {
        match self {
            ConnectionQuality::Slow2g | ConnectionQuality::TwoG => Duration::from_secs(30),
            ConnectionQuality::ThreeG => Duration::from_secs(15),
            ConnectionQuality::FourG | ConnectionQuality::Unknown => Duration::from_secs(10),
        }
    }

    pub fn from_effective_type(effective_type: &str) -> Self {
        match effective_type {
            "slow-2g" => ConnectionQuality::Slow2g,
            "2g" => ConnectionQuality::TwoG,
            "3g" => ConnectionQuality::ThreeG,
            "4g" => ConnectionQuality::FourG,
            _ => ConnectionQuality::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionQuality::Slow2g => "slow-2g",
            ConnectionQuality::TwoG => "2g",
            ConnectionQuality::ThreeG => "3g",
            ConnectionQuality::FourG => "4g",
            ConnectionQuality::Unknown => "unknown",
        }
    }
}

/// Bounded exponential backoff: delay before retry `attempt` (counted from
/// zero) is `base_delay * 2^attempt`.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub base_delay: Duration,
}

impl RetryPolicy {
    pub fn delay(&self, attempt: u32) -> Duration {
        self.base_delay * 2u32.saturating_pow(attempt)
    }

    /// Total tries including the initial attempt.
    pub fn total_attempts(&self) -> u32 {
        self.max_retries + 1
    }
}

impl From<&LoaderConfig> for RetryPolicy {
    fn from(config: &LoaderConfig) -> Self {
        Self {
            max_retries: config.max_retries,
            base_delay: Duration::from_millis(config.base_delay_ms),
        }
    }
}

/// Fallback strategies tried in this fixed order once the retry budget is
/// exhausted. Each is a single best-effort attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FallbackStrategy {
    SwapExtension,
    StripQuery,
    Placeholder,
}

impl FallbackStrategy {
    pub const ORDER: [FallbackStrategy; 3] = [
        FallbackStrategy::SwapExtension,
        FallbackStrategy::StripQuery,
        FallbackStrategy::Placeholder,
    ];

    /// Candidate URL for this strategy, or None when it does not apply.
    pub fn rewrite(&self, url: &Url, placeholder_filename: &str) -> Option<Url> {
        match self {
            FallbackStrategy::SwapExtension => {
                let path = url.path();
                let new_path = if let Some(stem) = path.strip_suffix(".jpg") {
                    format!("{stem}.png")
                } else if let Some(stem) = path.strip_suffix(".png") {
                    format!("{stem}.jpg")
                } else {
                    return None;
                };
                let mut candidate = url.clone();
                candidate.set_path(&new_path);
                Some(candidate)
            }
            FallbackStrategy::StripQuery => {
                url.query()?;
                let mut candidate = url.clone();
                candidate.set_query(None);
                Some(candidate)
            }
            FallbackStrategy::Placeholder => {
                let mut candidate = url.clone();
                {
                    let mut segments = candidate.path_segments_mut().ok()?;
                    segments.pop();
                    segments.push(placeholder_filename);
                }
                Some(candidate)
            }
        }
    }
}

/// How a successful load was satisfied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadRoute {
    Original,
    Fallback(FallbackStrategy),
}

#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub url: Url,
    pub bytes: Vec<u8>,
    pub via: LoadRoute,
}

/// Visual state of the element owning an image resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerState {
    Loading,
    Loaded,
    /// Terminal: the image is hidden and a textual placeholder is shown.
    ErrorDisplayed { placeholder_text: String },
}

/// The `<img>`-equivalent the loader fills in: target URL, accessibility
/// text, and the container's visual state.
#[derive(Debug, Clone)]
pub struct ImageSlot {
    pub url: Url,
    pub alt_text: String,
    pub state: ContainerState,
}

impl ImageSlot {
    pub fn new(url: Url, alt_text: impl Into<String>) -> Self {
        Self {
            url,
            alt_text: alt_text.into(),
            state: ContainerState::Loading,
        }
    }
}
