//! Scroll-reveal tracking for the skill bars.
//!
//! Bars render at zero width and animate to their target percent once
//! observed in the viewport. Revealing is sticky: scrolling a bar back out
//! never resets it.

/// Fraction of a bar that must be visible before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.5;

/// Delay before the initial width animation kicks in (ms).
pub const REVEAL_DELAY_MS: u64 = 200;

/// Tracks which of a fixed set of bars have been seen.
#[derive(Debug, Clone)]
pub struct RevealObserver {
    threshold: f64,
    revealed: Vec<bool>,
}

impl RevealObserver {
    pub fn new(count: usize) -> Self {
        Self::with_threshold(count, REVEAL_THRESHOLD)
    }

    pub fn with_threshold(count: usize, threshold: f64) -> Self {
        Self {
            threshold,
            revealed: vec![false; count],
        }
    }

    /// Record a visibility observation for bar `index`.
    ///
    /// Returns the bar's revealed state afterwards. Out-of-range indices
    /// are ignored and report `false`.
    pub fn observe(&mut self, index: usize, visible_ratio: f64) -> bool {
        let Some(slot) = self.revealed.get_mut(index) else {
            return false;
        };
        if visible_ratio >= self.threshold {
            *slot = true;
        }
        *slot
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn all_revealed(&self) -> bool {
        self.revealed.iter().all(|r| *r)
    }
}
