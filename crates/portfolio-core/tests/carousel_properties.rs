//! Property-based tests for the carousel controller
//!
//! Uses proptest to verify the index bound and the autoplay/overlay
//! exclusion under arbitrary interaction sequences.

use proptest::prelude::*;

use portfolio_core::carousel::{AutoplayTicket, Carousel, Slide, TrackGeometry};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Operations a user (or the timer) can drive the carousel through
#[derive(Debug, Clone)]
enum CarouselOp {
    GoTo(isize),
    Next,
    Previous,
    Scrolled(f64),
    StartAutoplay,
    StopAutoplay,
    Tick,
    PointerEnter,
    PointerLeave,
    OpenDetail(usize),
    CloseDetail,
    Resize(f64, f64),
}

fn op_strategy() -> impl Strategy<Value = CarouselOp> {
    prop_oneof![
        (-20isize..40).prop_map(CarouselOp::GoTo),
        Just(CarouselOp::Next),
        Just(CarouselOp::Previous),
        (0.0f64..5000.0).prop_map(CarouselOp::Scrolled),
        Just(CarouselOp::StartAutoplay),
        Just(CarouselOp::StopAutoplay),
        Just(CarouselOp::Tick),
        Just(CarouselOp::PointerEnter),
        Just(CarouselOp::PointerLeave),
        (0usize..16).prop_map(CarouselOp::OpenDetail),
        Just(CarouselOp::CloseDetail),
        (50.0f64..600.0, 0.0f64..40.0).prop_map(|(extent, gap)| CarouselOp::Resize(extent, gap)),
    ]
}

fn ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<CarouselOp>> {
    prop::collection::vec(op_strategy(), 0..max_ops)
}

fn slides(count: usize) -> Vec<Slide> {
    (0..count)
        .map(|i| Slide::new(format!("Slide {i}"), format!("assets/{i}.webp"), i))
        .collect()
}

/// Drive a carousel through a sequence, tracking the live ticket the way a
/// spawned autoplay task would.
fn apply(carousel: &mut Carousel, ticket: &mut Option<AutoplayTicket>, op: &CarouselOp) {
    match op {
        CarouselOp::GoTo(i) => {
            carousel.go_to(*i);
        }
        CarouselOp::Next => {
            carousel.next();
        }
        CarouselOp::Previous => {
            carousel.previous();
        }
        CarouselOp::Scrolled(offset) => {
            carousel.on_track_scrolled(*offset);
        }
        CarouselOp::StartAutoplay => {
            if let Some(t) = carousel.start_autoplay() {
                *ticket = Some(t);
            }
        }
        CarouselOp::StopAutoplay => carousel.stop_autoplay(),
        CarouselOp::Tick => {
            if let Some(t) = *ticket {
                if carousel.tick(t).is_none() {
                    *ticket = None;
                }
            }
        }
        CarouselOp::PointerEnter => carousel.pointer_entered(),
        CarouselOp::PointerLeave => {
            if let Some(t) = carousel.pointer_left() {
                *ticket = Some(t);
            }
        }
        CarouselOp::OpenDetail(position) => carousel.open_detail(*position),
        CarouselOp::CloseDetail => {
            if let Some(t) = carousel.close_detail() {
                *ticket = Some(t);
            }
        }
        CarouselOp::Resize(extent, gap) => {
            carousel.handle_resize(TrackGeometry::new(*extent, *gap));
        }
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// current_index never leaves [0, max_index], whatever the user does
    #[test]
    fn index_stays_in_bounds(
        slide_count in 1usize..12,
        ops in ops_strategy(64),
    ) {
        let mut carousel = Carousel::new(
            slides(slide_count),
            None,
            TrackGeometry::new(300.0, 16.0),
        ).unwrap();
        let mut ticket = None;

        for op in &ops {
            apply(&mut carousel, &mut ticket, op);
            prop_assert!(carousel.current_index() <= carousel.max_index());
        }
    }

    /// An open overlay always implies autoplay is inactive
    #[test]
    fn overlay_excludes_autoplay(
        slide_count in 1usize..12,
        ops in ops_strategy(64),
    ) {
        let mut carousel = Carousel::new(
            slides(slide_count),
            None,
            TrackGeometry::new(300.0, 16.0),
        ).unwrap();
        let mut ticket = None;

        for op in &ops {
            apply(&mut carousel, &mut ticket, op);
            if carousel.is_overlay_open() {
                prop_assert!(!carousel.is_autoplaying());
            }
        }
    }

    /// A tick either advances by one or wraps from the last index to 0
    #[test]
    fn tick_advances_by_one_or_wraps(
        slide_count in 1usize..12,
        setup in ops_strategy(32),
    ) {
        let mut carousel = Carousel::new(
            slides(slide_count),
            None,
            TrackGeometry::new(300.0, 16.0),
        ).unwrap();
        let mut ticket = None;

        for op in &setup {
            apply(&mut carousel, &mut ticket, op);
        }

        // force a clean autoplay state, then observe one beat
        if !carousel.is_overlay_open() {
            carousel.pointer_entered();
            if let Some(t) = carousel.pointer_left() {
                let before = carousel.current_index();
                prop_assert!(carousel.tick(t).is_some());
                let expected = if before >= carousel.max_index() { 0 } else { before + 1 };
                prop_assert_eq!(carousel.current_index(), expected);
            }
        }
    }

    /// Resizing never moves the logical index, and the reissued offset
    /// matches the new geometry
    #[test]
    fn resize_preserves_index(
        slide_count in 1usize..12,
        target in -5isize..20,
        extent in 50.0f64..600.0,
        gap in 0.0f64..40.0,
    ) {
        let mut carousel = Carousel::new(
            slides(slide_count),
            None,
            TrackGeometry::new(300.0, 16.0),
        ).unwrap();
        carousel.go_to(target);
        let index = carousel.current_index();

        let geometry = TrackGeometry::new(extent, gap);
        let offset = carousel.handle_resize(geometry);

        prop_assert_eq!(carousel.current_index(), index);
        prop_assert_eq!(offset, geometry.offset_for(index));
    }

    /// Synchronizing from a scroll offset and converting back is stable:
    /// the offset for the derived index rounds to the same index again
    #[test]
    fn scroll_sync_is_stable(
        slide_count in 1usize..12,
        offset in 0.0f64..5000.0,
    ) {
        let mut carousel = Carousel::new(
            slides(slide_count),
            None,
            TrackGeometry::new(300.0, 16.0),
        ).unwrap();
        carousel.on_track_scrolled(offset);
        let index = carousel.current_index();

        let settled = carousel.geometry().offset_for(index);
        carousel.on_track_scrolled(settled);
        prop_assert_eq!(carousel.current_index(), index);
    }
}
