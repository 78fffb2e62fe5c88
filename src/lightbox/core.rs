use super::types::*;
use crate::artists::ArtistRepository;
use std::sync::Arc;
use tracing::{debug, warn};

type FrameSink = Box<dyn Fn(&LightboxFrame) + Send + Sync>;

/// Drives the modal image viewer over one artist's portfolio. Every state
/// change that alters the visible image emits a `LightboxFrame` through the
/// sink; invalid requests leave the state untouched and emit nothing.
pub struct LightboxController {
    repository: Arc<ArtistRepository>,
    state: LightboxState,
    swipe: SwipeTracker,
    on_frame: FrameSink,
}

impl LightboxController {
    pub fn new(repository: Arc<ArtistRepository>, on_frame: FrameSink) -> Self {
        Self {
            repository,
            state: LightboxState::Closed,
            swipe: SwipeTracker::default(),
            on_frame,
        }
    }

    pub fn state(&self) -> &LightboxState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.state, LightboxState::Closed)
    }

    /// Open the viewer at one image of an artist's portfolio. An unknown
    /// slug or an out-of-range index is a no-op.
    pub fn open(&mut self, slug: &str, index: usize) {
        let Some(portfolio) = self.repository.portfolio(slug) else {
            warn!("Lightbox open refused, unknown artist: {}", slug);
            return;
        };
        if index >= portfolio.len() {
            warn!(
                "Lightbox open refused, index {} out of range for {} ({} images)",
                index,
                slug,
                portfolio.len()
            );
            return;
        }

        self.state = LightboxState::Open {
            slug: slug.to_string(),
            index,
            view: ViewSide::After,
        };
        debug!("Lightbox opened: {} image {}", slug, index);
        self.emit();
    }

    /// Close the viewer. Idempotent.
    pub fn close(&mut self) {
        self.state = LightboxState::Closed;
        self.swipe = SwipeTracker::default();
    }

    pub fn next(&mut self) {
        self.step(1);
    }

    pub fn previous(&mut self) {
        self.step(-1);
    }

    pub fn jump_to_first(&mut self) {
        self.jump(0);
    }

    pub fn jump_to_last(&mut self) {
        if let Some(len) = self.open_portfolio_len() {
            self.jump(len - 1);
        }
    }

    /// Flip between the healed result and its before photo. Only available
    /// when the current image actually has one.
    pub fn toggle_before_after(&mut self) {
        let LightboxState::Open { slug, index, view } = &mut self.state else {
            return;
        };
        let Some(image) = self
            .repository
            .portfolio(slug)
            .and_then(|p| p.get(*index))
        else {
            return;
        };
        if image.before_image.is_none() {
            return;
        }

        *view = match view {
            ViewSide::After => ViewSide::Before,
            ViewSide::Before => ViewSide::After,
        };
        self.emit();
    }

    pub fn handle_key(&mut self, key: LightboxKey) {
        if !self.is_open() {
            return;
        }
        match key {
            LightboxKey::Escape => self.close(),
            LightboxKey::ArrowLeft => self.previous(),
            LightboxKey::ArrowRight => self.next(),
            LightboxKey::Home => self.jump_to_first(),
            LightboxKey::End => self.jump_to_last(),
        }
    }

    pub fn touch_start(&mut self, x: f64) {
        if self.is_open() {
            self.swipe.start(x);
        }
    }

    pub fn touch_end(&mut self, x: f64) {
        match self.swipe.end(x) {
            Some(SwipeDirection::Previous) => self.previous(),
            Some(SwipeDirection::Next) => self.next(),
            None => {}
        }
    }

    fn open_portfolio_len(&self) -> Option<usize> {
        let LightboxState::Open { slug, .. } = &self.state else {
            return None;
        };
        self.repository.portfolio(slug).map(|p| p.len())
    }

    /// Move by one image with wraparound. Single-image portfolios do not
    /// navigate at all.
    fn step(&mut self, direction: isize) {
        let Some(len) = self.open_portfolio_len() else {
            return;
        };
        if len <= 1 {
            return;
        }
        let LightboxState::Open { index, view, .. } = &mut self.state else {
            return;
        };

        *index = (*index as isize + direction).rem_euclid(len as isize) as usize;
        *view = ViewSide::After;
        self.emit();
    }

    fn jump(&mut self, target: usize) {
        let Some(len) = self.open_portfolio_len() else {
            return;
        };
        if target >= len {
            return;
        }
        let LightboxState::Open { index, view, .. } = &mut self.state else {
            return;
        };
        if *index == target {
            return;
        }

        *index = target;
        *view = ViewSide::After;
        self.emit();
    }

    fn emit(&self) {
        let LightboxState::Open { slug, index, view } = &self.state else {
            return;
        };
        let Some(portfolio) = self.repository.portfolio(slug) else {
            return;
        };
        let Some(image) = portfolio.get(*index) else {
            return;
        };

        let frame = LightboxFrame {
            slug: slug.clone(),
            image: image.clone(),
            position: *index + 1,
            total: portfolio.len(),
            nav_enabled: portfolio.len() > 1,
            before_available: image.before_image.is_some(),
            view: *view,
        };
        (self.on_frame)(&frame);
    }
}
