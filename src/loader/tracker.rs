use super::types::ConnectionQuality;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::VecDeque;
use std::sync::Mutex;

const TRACKED_ERROR_CAPACITY: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LoadErrorKind {
    Timeout,
    Transport,
    Fallback,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrackedError {
    pub kind: LoadErrorKind,
    pub message: String,
    pub path: String,
    pub at: DateTime<Utc>,
    pub connection: ConnectionQuality,
}

/// Keeps the last few load failures for diagnostics, newest first. Bounded
/// so a long-running degraded session cannot grow it without limit.
#[derive(Debug, Default)]
pub struct ErrorTracker {
    entries: Mutex<VecDeque<TrackedError>>,
}

impl ErrorTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(
        &self,
        kind: LoadErrorKind,
        message: impl Into<String>,
        path: impl Into<String>,
        connection: ConnectionQuality,
    ) {
        let entry = TrackedError {
            kind,
            message: message.into(),
            path: path.into(),
            at: Utc::now(),
            connection,
        };

        let mut entries = self.entries.lock().unwrap();
        entries.push_front(entry);
        entries.truncate(TRACKED_ERROR_CAPACITY);
    }

    pub fn recent(&self) -> Vec<TrackedError> {
        self.entries.lock().unwrap().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }
}
