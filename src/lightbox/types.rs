use crate::artists::PortfolioImage;

/// Which side of a before/after pair is showing. Always resets to `After`
/// when the viewer moves to a different image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewSide {
    #[default]
    After,
    Before,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LightboxState {
    #[default]
    Closed,
    Open {
        slug: String,
        index: usize,
        view: ViewSide,
    },
}

/// Snapshot emitted to the presentation layer whenever the visible image
/// changes. Positions are 1-based for the "3 of 15" counter.
#[derive(Debug, Clone)]
pub struct LightboxFrame {
    pub slug: String,
    pub image: PortfolioImage,
    pub position: usize,
    pub total: usize,
    pub nav_enabled: bool,
    pub before_available: bool,
    pub view: ViewSide,
}

/// Keyboard input the viewer responds to while open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxKey {
    Escape,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
}

/// Horizontal swipes shorter than this are treated as taps, not
/// navigation.
pub const SWIPE_THRESHOLD: f64 = 50.0;

/// Tracks one touch gesture from start to release.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwipeTracker {
    start_x: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Previous,
    Next,
}

impl SwipeTracker {
    pub fn start(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    /// Resolve the gesture at release. Returns `None` for taps and for
    /// releases without a matching start.
    pub fn end(&mut self, x: f64) -> Option<SwipeDirection> {
        let start = self.start_x.take()?;
        let delta = x - start;
        if delta.abs() < SWIPE_THRESHOLD {
            None
        } else if delta > 0.0 {
            Some(SwipeDirection::Previous)
        } else {
            Some(SwipeDirection::Next)
        }
    }
}
