//! Carousel-with-modal controller.
//!
//! Pure state machine behind the service carousel: slide index, autoplay
//! scheduling, hover and overlay pause policy, and index <-> offset
//! conversion. The rendering layer applies the offsets this module returns
//! to the scrollable track and draws indicator/overlay state from the
//! accessors; nothing here touches the platform.
//!
//! ## Pause policy
//!
//! Autoplay runs only while the detail overlay is closed and the pointer is
//! off the track. `open_detail` stops autoplay as a direct consequence;
//! `close_detail` attempts a resume, which [`Carousel::start_autoplay`]
//! refuses while the pointer is still hovering.
//!
//! ## Example
//!
//! ```
//! use portfolio_core::carousel::{Carousel, Slide, TrackGeometry};
//!
//! let slides = (0..4)
//!     .map(|i| Slide::new(format!("Service {i}"), format!("assets/{i}.webp"), i))
//!     .collect();
//! let mut carousel =
//!     Carousel::new(slides, None, TrackGeometry::new(300.0, 16.0)).unwrap();
//!
//! let offset = carousel.go_to(2);
//! assert_eq!(carousel.current_index(), 2);
//! assert_eq!(offset, 2.0 * 316.0);
//! ```

mod autoplay;
mod geometry;

pub use autoplay::{AutoplayTicket, AUTOPLAY_INTERVAL};
pub use geometry::TrackGeometry;

use autoplay::AutoplayTimer;

/// One unit of the carousel, captured from content order at setup.
///
/// Immutable for the session; `position` is the stable 0-based ordinal.
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    pub title: String,
    pub image_source: String,
    pub position: usize,
}

impl Slide {
    pub fn new(title: impl Into<String>, image_source: impl Into<String>, position: usize) -> Self {
        Self {
            title: title.into(),
            image_source: image_source.into(),
            position,
        }
    }
}

/// Interaction phase of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselPhase {
    /// Overlay closed, pointer off the track; autoplay may run.
    Idle,
    /// Pointer over the track; autoplay held.
    PausedHover,
    /// Detail overlay open; autoplay held.
    DetailOpen,
}

/// Carousel state machine.
///
/// One instance per carousel; mutated only through its own methods. The
/// index invariant `0 <= current_index <= max_index` holds after every
/// operation - out-of-range navigation is clamped, never rejected.
#[derive(Debug)]
pub struct Carousel {
    slides: Vec<Slide>,
    indicator_count: Option<usize>,
    geometry: TrackGeometry,
    current_index: usize,
    autoplay: AutoplayTimer,
    overlay: Option<usize>,
    hovering: bool,
}

impl Carousel {
    /// Build a controller over the given slides.
    ///
    /// `indicator_count` is the number of indicator dots rendered next to
    /// the track, when any exist; it bounds navigation in preference to the
    /// slide count. Returns `None` for an empty slide collection - the
    /// caller renders nothing and attaches no handlers, degrading the
    /// section to static content.
    pub fn new(
        slides: Vec<Slide>,
        indicator_count: Option<usize>,
        geometry: TrackGeometry,
    ) -> Option<Self> {
        if slides.is_empty() {
            return None;
        }
        if indicator_count == Some(0) {
            return None;
        }
        Some(Self {
            slides,
            indicator_count,
            geometry,
            current_index: 0,
            autoplay: AutoplayTimer::default(),
            overlay: None,
            hovering: false,
        })
    }

    /// Highest navigable index: indicator count minus one when indicators
    /// exist, slide count minus one otherwise.
    pub fn max_index(&self) -> usize {
        match self.indicator_count {
            Some(count) => count - 1,
            None => self.slides.len() - 1,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn geometry(&self) -> TrackGeometry {
        self.geometry
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay.is_active()
    }

    pub fn is_overlay_open(&self) -> bool {
        self.overlay.is_some()
    }

    /// Slide currently shown in the detail overlay, if open.
    pub fn overlay_slide(&self) -> Option<&Slide> {
        self.overlay.and_then(|position| self.slides.get(position))
    }

    /// Current interaction phase; see the state machine in the module docs.
    pub fn phase(&self) -> CarouselPhase {
        if self.overlay.is_some() {
            CarouselPhase::DetailOpen
        } else if self.hovering {
            CarouselPhase::PausedHover
        } else {
            CarouselPhase::Idle
        }
    }

    /// Navigate to `target`, clamped into `[0, max_index]`.
    ///
    /// Returns the scroll offset the track must animate to. Geometry-derived,
    /// so callers that remeasured before navigating get offsets that match
    /// the current layout.
    pub fn go_to(&mut self, target: isize) -> f64 {
        let max = self.max_index() as isize;
        self.current_index = target.clamp(0, max) as usize;
        self.geometry.offset_for(self.current_index)
    }

    /// Advance one slide (clamped at the end; wrapping is the timer's job).
    pub fn next(&mut self) -> f64 {
        self.go_to(self.current_index as isize + 1)
    }

    /// Go back one slide (clamped at the start).
    pub fn previous(&mut self) -> f64 {
        self.go_to(self.current_index as isize - 1)
    }

    /// Synchronize the logical index to a user-driven scroll position.
    ///
    /// Recomputes the index from `offset` rounded to the nearest slide and
    /// refreshes indicator state. Never requests a scroll in return - the
    /// physical position is already where the user put it, and answering a
    /// scroll event with another scroll would loop.
    ///
    /// Returns whether the index changed.
    pub fn on_track_scrolled(&mut self, offset: f64) -> bool {
        let Some(index) = self.geometry.index_for_offset(offset) else {
            return false;
        };
        let index = index.min(self.max_index());
        if index == self.current_index {
            return false;
        }
        self.current_index = index;
        true
    }

    /// Swap in remeasured geometry and re-issue the current position.
    ///
    /// The logical index is unchanged; the returned offset realigns the
    /// track under the new layout.
    pub fn handle_resize(&mut self, geometry: TrackGeometry) -> f64 {
        self.geometry = geometry;
        self.go_to(self.current_index as isize)
    }

    /// Begin autoplay, cancelling any schedule already running.
    ///
    /// Refused (returns `None`) while the overlay is open or the pointer is
    /// hovering the track. On success the returned ticket must accompany
    /// every [`Carousel::tick`]; issuing it invalidates any previous ticket,
    /// which is what keeps the "at most one live timer" invariant - stale
    /// driver tasks see their next tick rejected and retire themselves.
    pub fn start_autoplay(&mut self) -> Option<AutoplayTicket> {
        if self.overlay.is_some() || self.hovering {
            return None;
        }
        Some(self.autoplay.schedule())
    }

    /// Cancel autoplay. Safe to call with no schedule running.
    pub fn stop_autoplay(&mut self) {
        self.autoplay.cancel();
    }

    /// One autoplay beat: advance a slide, wrapping to the start from the
    /// last index.
    ///
    /// Returns the offset to scroll to, or `None` when `ticket` is stale -
    /// the holder must stop ticking.
    pub fn tick(&mut self, ticket: AutoplayTicket) -> Option<f64> {
        if !self.autoplay.accepts(ticket) {
            return None;
        }
        let offset = if self.current_index >= self.max_index() {
            self.go_to(0)
        } else {
            self.next()
        };
        Some(offset)
    }

    /// Pointer entered the track: hold autoplay.
    pub fn pointer_entered(&mut self) {
        self.hovering = true;
        self.stop_autoplay();
    }

    /// Pointer left the track: resume autoplay unless the overlay is open.
    pub fn pointer_left(&mut self) -> Option<AutoplayTicket> {
        self.hovering = false;
        self.start_autoplay()
    }

    /// Open the detail overlay on the given slide.
    ///
    /// Out-of-range positions clamp to the last slide. Stopping autoplay
    /// here is what enforces `overlay open => autoplay inactive`.
    pub fn open_detail(&mut self, position: usize) {
        let position = position.min(self.slides.len() - 1);
        self.overlay = Some(position);
        self.stop_autoplay();
    }

    /// Close the detail overlay and attempt to resume autoplay.
    ///
    /// The resume goes through [`Carousel::start_autoplay`], so a pointer
    /// still hovering the track keeps the carousel paused.
    pub fn close_detail(&mut self) -> Option<AutoplayTicket> {
        self.overlay = None;
        self.start_autoplay()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slides(count: usize) -> Vec<Slide> {
        (0..count)
            .map(|i| Slide::new(format!("Slide {i}"), format!("assets/slide-{i}.webp"), i))
            .collect()
    }

    fn carousel(count: usize) -> Carousel {
        Carousel::new(slides(count), None, TrackGeometry::new(300.0, 16.0)).unwrap()
    }

    #[test]
    fn test_empty_slides_disable_construction() {
        assert!(Carousel::new(vec![], None, TrackGeometry::new(300.0, 16.0)).is_none());
    }

    #[test]
    fn test_go_to_clamps_both_bounds() {
        let mut c = carousel(4);
        c.go_to(-5);
        assert_eq!(c.current_index(), 0);
        c.go_to(99);
        assert_eq!(c.current_index(), c.max_index());
    }

    #[test]
    fn test_go_to_offset_matches_geometry() {
        let mut c = carousel(4);
        assert_eq!(c.go_to(2), 2.0 * 316.0);
    }

    #[test]
    fn test_indicator_count_bounds_navigation() {
        let mut c = Carousel::new(slides(6), Some(3), TrackGeometry::new(300.0, 16.0)).unwrap();
        assert_eq!(c.max_index(), 2);
        c.go_to(5);
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn test_previous_clamps_at_start() {
        let mut c = carousel(4);
        c.previous();
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn test_stop_autoplay_idempotent() {
        let mut c = carousel(4);
        c.start_autoplay().unwrap();
        c.stop_autoplay();
        c.stop_autoplay();
        assert!(!c.is_autoplaying());
    }

    #[test]
    fn test_restart_invalidates_previous_ticket() {
        let mut c = carousel(4);
        let stale = c.start_autoplay().unwrap();
        let fresh = c.start_autoplay().unwrap();
        assert_eq!(c.tick(stale), None);
        assert!(c.tick(fresh).is_some());
    }

    #[test]
    fn test_tick_wraps_at_max_index() {
        let mut c = carousel(4);
        let ticket = c.start_autoplay().unwrap();
        // max_index + 1 beats from index 0 land back on 0
        for _ in 0..=c.max_index() {
            c.tick(ticket).unwrap();
        }
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn test_open_detail_stops_autoplay() {
        let mut c = carousel(4);
        c.start_autoplay().unwrap();
        c.open_detail(1);
        assert!(c.is_overlay_open());
        assert!(!c.is_autoplaying());
        assert_eq!(c.overlay_slide().unwrap().position, 1);
    }

    #[test]
    fn test_start_autoplay_refused_while_overlay_open() {
        let mut c = carousel(4);
        c.open_detail(0);
        assert!(c.start_autoplay().is_none());
    }

    #[test]
    fn test_close_detail_resumes_autoplay() {
        let mut c = carousel(4);
        c.open_detail(2);
        let ticket = c.close_detail().expect("autoplay resumes");
        assert!(!c.is_overlay_open());
        assert!(c.tick(ticket).is_some());
    }

    #[test]
    fn test_redundant_close_keeps_single_timer() {
        // dismissal can fire more than once (close button plus a global
        // Escape listener); only the newest ticket may drive the track
        let mut c = carousel(4);
        c.open_detail(1);
        let first = c.close_detail().expect("autoplay resumes");
        let second = c.close_detail().expect("close is redundantly callable");
        assert_eq!(c.tick(first), None);
        assert!(c.tick(second).is_some());
    }

    #[test]
    fn test_close_detail_stays_paused_while_hovering() {
        let mut c = carousel(4);
        c.pointer_entered();
        c.open_detail(2);
        assert_eq!(c.close_detail(), None);
        assert!(!c.is_autoplaying());
        // leaving the track afterwards resumes
        assert!(c.pointer_left().is_some());
    }

    #[test]
    fn test_hover_pause_and_resume() {
        let mut c = carousel(4);
        let stale = c.start_autoplay().unwrap();
        c.pointer_entered();
        assert!(!c.is_autoplaying());
        assert_eq!(c.tick(stale), None);

        let fresh = c.pointer_left().unwrap();
        let before = c.current_index();
        c.tick(fresh).unwrap();
        assert_eq!(c.current_index(), before + 1);
    }

    #[test]
    fn test_resize_preserves_index_and_recomputes_offset() {
        let mut c = carousel(5);
        c.go_to(3);
        let offset = c.handle_resize(TrackGeometry::new(220.0, 12.0));
        assert_eq!(c.current_index(), 3);
        assert_eq!(offset, 3.0 * 232.0);
    }

    #[test]
    fn test_track_scrolled_syncs_index_without_scroll() {
        let mut c = carousel(5);
        assert!(c.on_track_scrolled(2.0 * 316.0 + 40.0));
        assert_eq!(c.current_index(), 2);
        // same position again: no change reported
        assert!(!c.on_track_scrolled(2.0 * 316.0));
    }

    #[test]
    fn test_track_scrolled_clamps_overscroll() {
        let mut c = carousel(3);
        assert!(c.on_track_scrolled(9999.0));
        assert_eq!(c.current_index(), c.max_index());
    }

    #[test]
    fn test_track_scrolled_ignored_without_extent() {
        let mut c = Carousel::new(slides(3), None, TrackGeometry::new(0.0, 0.0)).unwrap();
        c.current_index = 1;
        assert!(!c.on_track_scrolled(500.0));
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn test_phase_transitions() {
        let mut c = carousel(4);
        assert_eq!(c.phase(), CarouselPhase::Idle);
        c.pointer_entered();
        assert_eq!(c.phase(), CarouselPhase::PausedHover);
        c.pointer_left();
        assert_eq!(c.phase(), CarouselPhase::Idle);
        c.open_detail(0);
        assert_eq!(c.phase(), CarouselPhase::DetailOpen);
        c.close_detail();
        assert_eq!(c.phase(), CarouselPhase::Idle);
    }
}
