use crate::artists::{PortfolioImage, TattooStyle};

/// One filter dimension. `All` is the explicit no-constraint sentinel, the
/// UI's "all" button.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StyleFilter {
    #[default]
    All,
    Only(TattooStyle),
}

impl StyleFilter {
    /// Parse a UI filter value; the literal `"all"` is the sentinel and an
    /// unknown style name falls back to no constraint.
    pub fn parse(value: &str) -> StyleFilter {
        if value == "all" {
            StyleFilter::All
        } else {
            TattooStyle::from_name(value)
                .map(StyleFilter::Only)
                .unwrap_or(StyleFilter::All)
        }
    }

    pub fn matches(&self, image: &PortfolioImage) -> bool {
        match self {
            StyleFilter::All => true,
            StyleFilter::Only(style) => image.style == *style,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TagFilter {
    #[default]
    All,
    Only(String),
}

impl TagFilter {
    pub fn parse(value: &str) -> TagFilter {
        if value == "all" {
            TagFilter::All
        } else {
            TagFilter::Only(value.to_string())
        }
    }

    pub fn matches(&self, image: &PortfolioImage) -> bool {
        match self {
            TagFilter::All => true,
            TagFilter::Only(tag) => image.has_tag(tag),
        }
    }
}

/// The two independent selections. Both reset to the sentinel on clear.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSelection {
    pub style: StyleFilter,
    pub tag: TagFilter,
}

impl FilterSelection {
    pub fn matches(&self, image: &PortfolioImage) -> bool {
        self.style.matches(image) && self.tag.matches(image)
    }

    /// Human-readable description of the active facets, used both for
    /// screen-reader announcements and the zero-match empty state.
    pub fn describe(&self) -> String {
        match (&self.style, &self.tag) {
            (StyleFilter::Only(style), TagFilter::Only(tag)) => {
                format!("{style} tattoos tagged with {tag}")
            }
            (StyleFilter::Only(style), TagFilter::All) => format!("{style} tattoos"),
            (StyleFilter::All, TagFilter::Only(tag)) => format!("tattoos tagged with {tag}"),
            (StyleFilter::All, TagFilter::All) => "all portfolio items".to_string(),
        }
    }
}

/// Facet controls derived from one portfolio. Sections below their
/// threshold are suppressed so the UI never renders a useless
/// single-option selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetMenu {
    pub styles: Vec<TattooStyle>,
    pub tags: Vec<String>,
    pub popular_tags: Vec<String>,
    pub show_style_controls: bool,
    pub show_tag_controls: bool,
    pub show_clear_control: bool,
}

/// Result of applying the combined predicate against the full portfolio.
#[derive(Debug, Clone)]
pub struct FilterOutcome<'a> {
    pub visible: Vec<&'a PortfolioImage>,
    pub description: String,
}

impl FilterOutcome<'_> {
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Screen-reader announcement for this outcome.
    pub fn announcement(&self) -> String {
        if self.is_empty() {
            format!("No {} found", self.description)
        } else {
            format!("Showing {} {}", self.visible.len(), self.description)
        }
    }
}
