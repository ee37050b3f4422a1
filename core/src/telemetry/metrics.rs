use crate::classifier::SiteStatus;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// Per-label record counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub stable: usize,
    pub unstable: usize,
    pub dangerous: usize,
}

impl StatusCounts {
    pub fn total(&self) -> usize {
        self.stable + self.unstable + self.dangerous
    }

    fn bump(&mut self, status: SiteStatus) {
        match status {
            SiteStatus::Stable => self.stable += 1,
            SiteStatus::Unstable => self.unstable += 1,
            SiteStatus::Dangerous => self.dangerous += 1,
        }
    }
}

pub struct MetricsRecorder {
    inner: Mutex<StatusCounts>,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(StatusCounts::default()),
        }
    }

    pub fn record_status(&self, status: SiteStatus) {
        if let Ok(mut counts) = self.inner.lock() {
            counts.bump(status);
        }
    }

    pub fn snapshot(&self) -> StatusCounts {
        if let Ok(counts) = self.inner.lock() {
            *counts
        } else {
            StatusCounts::default()
        }
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}
