use super::types::*;
use crate::GalleryConfig;
use crate::artists::{PortfolioImage, TattooStyle};
use std::collections::HashMap;
use tracing::debug;

/// Distinct styles present in a portfolio, sorted by display name.
pub fn unique_styles(portfolio: &[PortfolioImage]) -> Vec<TattooStyle> {
    let mut styles: Vec<TattooStyle> = Vec::new();
    for image in portfolio {
        if !styles.contains(&image.style) {
            styles.push(image.style);
        }
    }
    styles.sort_by_key(|s| s.as_str());
    styles
}

/// Distinct tags present in a portfolio, sorted.
pub fn unique_tags(portfolio: &[PortfolioImage]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for image in portfolio {
        for tag in &image.tags {
            if !tags.iter().any(|t| t == tag) {
                tags.push(tag.clone());
            }
        }
    }
    tags.sort();
    tags
}

/// The most frequently used tags, most popular first, at most `limit`
/// entries. Ties keep the order in which the tags first appear in the
/// portfolio, so the result is stable across calls.
pub fn popular_tags(portfolio: &[PortfolioImage], limit: usize) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();
    for image in portfolio {
        for tag in &image.tags {
            let count = counts.entry(tag.as_str()).or_insert(0);
            if *count == 0 {
                order.push(tag.as_str());
            }
            *count += 1;
        }
    }

    let mut ranked: Vec<(usize, &str)> = order.into_iter().enumerate().collect();
    ranked.sort_by(|(seen_a, tag_a), (seen_b, tag_b)| {
        counts[*tag_b].cmp(&counts[*tag_a]).then(seen_a.cmp(seen_b))
    });

    ranked
        .into_iter()
        .take(limit)
        .map(|(_, tag)| tag.to_string())
        .collect()
}

/// Applies the combined style/tag predicate to a portfolio. The engine only
/// holds the current selection; every `apply` recomputes visibility from the
/// full portfolio, so filters never compound on previous results.
pub struct GalleryFilterEngine {
    selection: FilterSelection,
    config: GalleryConfig,
}

impl GalleryFilterEngine {
    pub fn new(config: GalleryConfig) -> Self {
        Self {
            selection: FilterSelection::default(),
            config,
        }
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn set_style(&mut self, value: &str) {
        self.selection.style = StyleFilter::parse(value);
        debug!("Style filter set: {:?}", self.selection.style);
    }

    pub fn set_tag(&mut self, value: &str) {
        self.selection.tag = TagFilter::parse(value);
        debug!("Tag filter set: {:?}", self.selection.tag);
    }

    pub fn clear(&mut self) {
        self.selection = FilterSelection::default();
    }

    pub fn apply<'a>(&self, portfolio: &'a [PortfolioImage]) -> FilterOutcome<'a> {
        let visible: Vec<&PortfolioImage> = portfolio
            .iter()
            .filter(|image| self.selection.matches(image))
            .collect();

        FilterOutcome {
            visible,
            description: self.selection.describe(),
        }
    }

    /// Derive the facet controls for a portfolio, or `None` when neither
    /// the style nor the tag dimension has enough variety to be worth a
    /// selector.
    pub fn facet_menu(&self, portfolio: &[PortfolioImage]) -> Option<FacetMenu> {
        let styles = unique_styles(portfolio);
        let tags = unique_tags(portfolio);

        let show_style_controls = styles.len() > self.config.style_control_threshold;
        let show_tag_controls = tags.len() > self.config.tag_control_threshold;
        if !show_style_controls && !show_tag_controls {
            return None;
        }

        let popular = popular_tags(portfolio, self.config.popular_tag_limit);
        Some(FacetMenu {
            styles,
            tags,
            popular_tags: popular,
            show_style_controls,
            show_tag_controls,
            show_clear_control: show_style_controls && show_tag_controls,
        })
    }
}
