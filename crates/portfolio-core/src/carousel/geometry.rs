//! Track geometry - conversion between slide index and scroll offset.

/// Measured geometry of the carousel track.
///
/// `slide_extent` is the rendered size of one slide along the scroll axis,
/// `gap` the space between adjacent slides. Both are remeasured whenever the
/// layout may have changed so responsive breakpoints never desynchronize the
/// logical index from the visual offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackGeometry {
    /// Rendered size of one slide (px).
    pub slide_extent: f64,
    /// Space between adjacent slides (px).
    pub gap: f64,
}

impl TrackGeometry {
    /// Create a geometry, flooring negative measurements at zero.
    pub fn new(slide_extent: f64, gap: f64) -> Self {
        Self {
            slide_extent: slide_extent.max(0.0),
            gap: gap.max(0.0),
        }
    }

    /// Size of one slide plus the gap to the next.
    pub fn per_slide_extent(&self) -> f64 {
        self.slide_extent + self.gap
    }

    /// Scroll offset at which the given slide sits flush with the viewport.
    pub fn offset_for(&self, index: usize) -> f64 {
        index as f64 * self.per_slide_extent()
    }

    /// Nearest slide index for a raw scroll offset.
    ///
    /// Returns `None` while the track has no measurable extent (e.g. before
    /// first layout), in which case the caller must leave the index alone.
    pub fn index_for_offset(&self, offset: f64) -> Option<usize> {
        let extent = self.per_slide_extent();
        if extent <= 0.0 {
            return None;
        }
        Some((offset.max(0.0) / extent).round() as usize)
    }
}
