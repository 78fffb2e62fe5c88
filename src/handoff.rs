use std::sync::Mutex;

/// One-shot slot carrying an artist selection from the listing page to the
/// portfolio page. Reading the slot clears it, so a stale selection can
/// never leak into a later visit.
#[derive(Debug, Default)]
pub struct HandoffSlot {
    selected: Mutex<Option<String>>,
}

impl HandoffSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self, slug: impl Into<String>) {
        *self.selected.lock().unwrap() = Some(slug.into());
    }

    /// Take the pending selection, leaving the slot empty.
    pub fn take(&self) -> Option<String> {
        self.selected.lock().unwrap().take()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.lock().unwrap().is_none()
    }
}
