use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of tattoo styles the studio advertises. Portfolio data
/// naming any other style is rejected by validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TattooStyle {
    Traditional,
    Realism,
    #[serde(rename = "Black & Grey")]
    BlackAndGrey,
    #[serde(rename = "Neo-Traditional")]
    NeoTraditional,
    Illustrative,
    Fineline,
    Minimalist,
    Watercolor,
    Blackwork,
    Norse,
}

impl TattooStyle {
    pub const ALL: [TattooStyle; 10] = [
        TattooStyle::Traditional,
        TattooStyle::Realism,
        TattooStyle::BlackAndGrey,
        TattooStyle::NeoTraditional,
        TattooStyle::Illustrative,
        TattooStyle::Fineline,
        TattooStyle::Minimalist,
        TattooStyle::Watercolor,
        TattooStyle::Blackwork,
        TattooStyle::Norse,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TattooStyle::Traditional => "Traditional",
            TattooStyle::Realism => "Realism",
            TattooStyle::BlackAndGrey => "Black & Grey",
            TattooStyle::NeoTraditional => "Neo-Traditional",
            TattooStyle::Illustrative => "Illustrative",
            TattooStyle::Fineline => "Fineline",
            TattooStyle::Minimalist => "Minimalist",
            TattooStyle::Watercolor => "Watercolor",
            TattooStyle::Blackwork => "Blackwork",
            TattooStyle::Norse => "Norse",
        }
    }

    pub fn from_name(name: &str) -> Option<TattooStyle> {
        Self::ALL.iter().find(|s| s.as_str() == name).copied()
    }
}

impl fmt::Display for TattooStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioImage {
    /// Unique within one artist's portfolio, not globally.
    pub id: u32,
    /// Relative path under `images/portfolio/<slug>/`.
    pub filename: String,
    pub title: String,
    pub style: TattooStyle,
    pub placement: String,
    pub session_time: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Ordered as authored; consumers treat it as a set but popular-tag
    /// display depends on first-encountered order.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Presence activates the before/after toggle in the lightbox.
    #[serde(default)]
    pub before_image: Option<String>,
    /// Absent means unknown, never coerced to fresh or healed.
    #[serde(default)]
    pub is_healed: Option<bool>,
}

impl PortfolioImage {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn healed_label(&self) -> Option<&'static str> {
        self.is_healed.map(|h| if h { "Healed" } else { "Fresh" })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialMedia {
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub facebook: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    pub slug: String,
    pub name: String,
    pub specialty: String,
    pub experience: String,
    pub description: String,
    #[serde(default)]
    pub extended_bio: Option<String>,
    #[serde(default)]
    pub philosophy: Option<String>,
    #[serde(default)]
    pub rating: Option<String>,
    #[serde(default)]
    pub social_media: Option<SocialMedia>,
    /// Listing position on the site; artists without one sort last.
    #[serde(default)]
    pub position: Option<u32>,
    /// Insertion order is display order. No implicit sort.
    #[serde(default)]
    pub portfolio: Vec<PortfolioImage>,
}

/// Outcome of validating one record. Collects every violation instead of
/// stopping at the first.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationReport {
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}
