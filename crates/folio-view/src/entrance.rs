//! Card entrance timing.
//!
//! Project cards fade in one after another on a fixed step; about-section
//! items fade in once enough of them scrolls into view, and never fade out.

use std::collections::BTreeSet;
use std::time::Duration;

/// Delay between consecutive card reveals.
pub const REVEAL_STEP: Duration = Duration::from_millis(200);

/// Minimum visible fraction of an item before it counts as seen.
pub const VISIBILITY_THRESHOLD: f64 = 0.1;

/// Card `i` becomes visible `i * step` after the section mounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaggeredReveal {
    step: Duration,
}

impl Default for StaggeredReveal {
    fn default() -> Self {
        Self { step: REVEAL_STEP }
    }
}

impl StaggeredReveal {
    #[must_use]
    pub const fn with_step(step: Duration) -> Self {
        Self { step }
    }

    #[must_use]
    pub fn delay_for(self, index: usize) -> Duration {
        self.step
            .saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
    }

    #[must_use]
    pub fn is_visible(self, index: usize, elapsed: Duration) -> bool {
        elapsed >= self.delay_for(index)
    }

    /// How many of `total` cards are visible after `elapsed`.
    #[must_use]
    pub fn visible_count(self, total: usize, elapsed: Duration) -> usize {
        (0..total)
            .take_while(|&i| self.is_visible(i, elapsed))
            .count()
    }
}

/// Indices that have been seen at least once.
#[derive(Debug, Clone, Default)]
pub struct VisibilitySet {
    seen: BTreeSet<usize>,
}

impl VisibilitySet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Report how much of item `index` is on screen. Returns `true` when the
    /// item becomes visible for the first time.
    pub fn observe(&mut self, index: usize, ratio: f64) -> bool {
        if ratio < VISIBILITY_THRESHOLD {
            return false;
        }
        self.seen.insert(index)
    }

    #[must_use]
    pub fn is_visible(&self, index: usize) -> bool {
        self.seen.contains(&index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
