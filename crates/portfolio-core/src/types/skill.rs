//! Skill entry shown as an animated progress bar.

use serde::{Deserialize, Serialize};

/// A named skill with a proficiency percent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Target bar width, 0..=100.
    pub percent: u8,
}

impl Skill {
    /// Create a skill, clamping the percent into `0..=100`.
    pub fn new(name: impl Into<String>, percent: u8) -> Self {
        Self {
            name: name.into(),
            percent: percent.min(100),
        }
    }

    /// CSS width for the filled part of the bar.
    pub fn width_css(&self) -> String {
        format!("{}%", self.percent.min(100))
    }
}
