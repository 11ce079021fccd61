//! Service card shown in the carousel.

use serde::{Deserialize, Serialize};

/// One card on the services track. Order in the content file is the slide
/// order for the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCard {
    pub title: String,
    pub image_source: String,
    /// Short description shown in the detail overlay.
    pub blurb: String,
}

impl ServiceCard {
    pub fn new(
        title: impl Into<String>,
        image_source: impl Into<String>,
        blurb: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            image_source: image_source.into(),
            blurb: blurb.into(),
        }
    }
}
