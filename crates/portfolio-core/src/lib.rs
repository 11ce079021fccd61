//! Portfolio Core Library
//!
//! Interaction logic for the portfolio page, kept free of any UI framework
//! so every behavior is unit-testable: the carousel-with-modal controller,
//! the responsive nav menu, the skill-bar reveal tracker and the project
//! category filter, plus the JSON-loadable content model they render from.
//!
//! ## Overview
//!
//! The only component with real state and timing is the carousel: it owns
//! the slide index, the autoplay schedule and the pause policy (hover and
//! detail overlay both hold autoplay). Everything else is simple per-event
//! toggling. The UI layer feeds measurements and events in and applies the
//! returned scroll offsets; no module here touches the platform.
//!
//! ## Quick Start
//!
//! ```
//! use portfolio_core::carousel::{Carousel, TrackGeometry};
//! use portfolio_core::content::PortfolioContent;
//!
//! let content = PortfolioContent::default();
//! let mut carousel = Carousel::new(
//!     content.service_slides(),
//!     None,
//!     TrackGeometry::new(300.0, 16.0),
//! )
//! .expect("default content has service cards");
//!
//! let ticket = carousel.start_autoplay().unwrap();
//! let offset = carousel.tick(ticket).unwrap();
//! assert_eq!(carousel.current_index(), 1);
//! assert_eq!(offset, carousel.geometry().offset_for(1));
//! ```

pub mod carousel;
pub mod content;
pub mod error;
pub mod filter;
pub mod nav;
pub mod reveal;
pub mod types;

// Re-exports
pub use carousel::{AutoplayTicket, Carousel, CarouselPhase, Slide, TrackGeometry, AUTOPLAY_INTERVAL};
pub use content::PortfolioContent;
pub use error::{PortfolioError, PortfolioResult};
pub use filter::{CategoryFilter, FilterBar};
pub use nav::NavMenu;
pub use reveal::{RevealObserver, REVEAL_DELAY_MS, REVEAL_THRESHOLD};
pub use types::{Project, ServiceCard, Skill};
