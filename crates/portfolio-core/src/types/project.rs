//! Project gallery entry.

use serde::{Deserialize, Serialize};

/// One card in the project gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    /// Category tag matched by the filter bar (e.g. "video", "graphics").
    pub category: String,
    pub image_source: String,
}

impl Project {
    pub fn new(
        title: impl Into<String>,
        category: impl Into<String>,
        image_source: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
            image_source: image_source.into(),
        }
    }
}
