//! Services Carousel Component
//!
//! Autoplaying card track with indicator dots, prev/next controls, hover
//! pause and a detail modal. Every state decision lives in
//! [`portfolio_core::carousel::Carousel`]; this component feeds it
//! measurements and events and applies the scroll offsets it returns to the
//! track element in the webview.

use dioxus::document;
use dioxus::prelude::*;
use portfolio_core::carousel::{AutoplayTicket, Carousel, TrackGeometry, AUTOPLAY_INTERVAL};
use portfolio_core::ServiceCard;

use super::ServiceDetailModal;

/// DOM id of the scrollable track, shared by the eval helpers below
const TRACK_ID: &str = "services-track";

/// Geometry assumed until the first real measurement lands
const FALLBACK_EXTENT: f64 = 300.0;
const FALLBACK_GAP: f64 = 16.0;

/// Measure one card plus the track's flex gap.
async fn measure_track() -> Option<TrackGeometry> {
    let js = format!(
        r#"return (() => {{
            const track = document.getElementById('{TRACK_ID}');
            if (!track) return null;
            const card = track.querySelector('.service-card');
            if (!card) return null;
            const gap = parseFloat(getComputedStyle(track).gap || '0');
            return {{ extent: card.offsetWidth, gap: isNaN(gap) ? 0 : gap }};
        }})();"#
    );
    let value = document::eval(&js).await.ok()?;
    let extent = value.get("extent")?.as_f64()?;
    let gap = value.get("gap")?.as_f64()?;
    Some(TrackGeometry::new(extent, gap))
}

/// Current horizontal scroll position of the track.
async fn read_track_offset() -> Option<f64> {
    let js = format!(
        r#"return (() => {{
            const track = document.getElementById('{TRACK_ID}');
            return track ? track.scrollLeft : null;
        }})();"#
    );
    document::eval(&js).await.ok()?.as_f64()
}

/// Smooth-scroll the track to an offset.
async fn scroll_track_to(offset: f64) {
    let js = format!(
        r#"const track = document.getElementById('{TRACK_ID}');
        if (track) track.scrollTo({{ left: {offset}, behavior: 'smooth' }});"#
    );
    let _ = document::eval(&js).await;
}

#[derive(Props, Clone, PartialEq)]
pub struct ServicesSectionProps {
    pub services: Vec<ServiceCard>,
}

/// Services section: heading, carousel and (when open) the detail modal.
///
/// With no service cards the controller declines to construct and the
/// section renders nothing - no listeners, no timer.
#[component]
pub fn ServicesSection(props: ServicesSectionProps) -> Element {
    let services = props.services.clone();
    let slides: Vec<_> = services
        .iter()
        .enumerate()
        .map(|(position, card)| {
            portfolio_core::Slide::new(&card.title, &card.image_source, position)
        })
        .collect();

    let dot_count = slides.len();
    let mut carousel: Signal<Option<Carousel>> = use_signal(move || {
        Carousel::new(
            slides.clone(),
            Some(dot_count),
            TrackGeometry::new(FALLBACK_EXTENT, FALLBACK_GAP),
        )
    });

    // Single scheduling path: the loop holds the ticket the controller
    // issued and retires itself the first time a tick is rejected.
    let mut drive = move |ticket: AutoplayTicket| {
        spawn(async move {
            loop {
                tokio::time::sleep(AUTOPLAY_INTERVAL).await;
                let offset = carousel.write().as_mut().and_then(|c| c.tick(ticket));
                match offset {
                    Some(offset) => scroll_track_to(offset).await,
                    // a newer schedule (or a stop) owns the track now
                    None => break,
                }
            }
        });
    };

    // Measure once the webview has laid the cards out, then start autoplay.
    use_effect(move || {
        spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(60)).await;
            if let Some(geometry) = measure_track().await {
                if let Some(c) = carousel.write().as_mut() {
                    c.handle_resize(geometry);
                }
            }
            let ticket = carousel.write().as_mut().and_then(|c| c.start_autoplay());
            if let Some(ticket) = ticket {
                tracing::debug!("Services autoplay started");
                drive(ticket);
            }
        });
    });

    let Some(snapshot) = carousel.read().as_ref().map(|c| {
        (
            c.current_index(),
            c.max_index(),
            c.overlay_slide().cloned(),
        )
    }) else {
        tracing::debug!("No service cards; carousel disabled");
        return rsx! {};
    };
    let (current_index, max_index, overlay_slide) = snapshot;

    let mut go = move |target: isize| {
        let offset = carousel.write().as_mut().map(|c| c.go_to(target));
        if let Some(offset) = offset {
            spawn(scroll_track_to(offset));
        }
    };

    rsx! {
        section { class: "services", id: "services",
            h2 { class: "section-title", "Services" }

            div { class: "services__viewport",
                button {
                    class: "nav-btn prev",
                    "aria-label": "Previous service",
                    onclick: move |_| go(current_index as isize - 1),
                    "‹"
                }
                button {
                    class: "nav-btn next",
                    "aria-label": "Next service",
                    onclick: move |_| go(current_index as isize + 1),
                    "›"
                }

                div {
                    class: "services__track",
                    id: TRACK_ID,
                    onmouseenter: move |_| {
                        if let Some(c) = carousel.write().as_mut() {
                            c.pointer_entered();
                        }
                    },
                    onmouseleave: move |_| {
                        let ticket = carousel.write().as_mut().and_then(|c| c.pointer_left());
                        if let Some(ticket) = ticket {
                            drive(ticket);
                        }
                    },
                    // user-driven scroll (drag, wheel): sync the logical
                    // index to wherever the track ended up
                    onscroll: move |_| {
                        spawn(async move {
                            if let Some(offset) = read_track_offset().await {
                                if let Some(c) = carousel.write().as_mut() {
                                    c.on_track_scrolled(offset);
                                }
                            }
                        });
                    },
                    onresize: move |_| {
                        spawn(async move {
                            if let Some(geometry) = measure_track().await {
                                let offset = carousel
                                    .write()
                                    .as_mut()
                                    .map(|c| c.handle_resize(geometry));
                                if let Some(offset) = offset {
                                    scroll_track_to(offset).await;
                                }
                            }
                        });
                    },

                    for (position, card) in services.iter().enumerate() {
                        div {
                            key: "{card.title}",
                            class: "service-card",
                            onclick: move |_| {
                                if let Some(c) = carousel.write().as_mut() {
                                    c.open_detail(position);
                                }
                            },

                            img {
                                class: "service-card__img",
                                src: "{card.image_source}",
                                alt: "{card.title}",
                            }
                            div { class: "service-card__body",
                                h3 { class: "service-card__title", "{card.title}" }
                                button {
                                    class: "service-arrow",
                                    "aria-label": "Open details for {card.title}",
                                    onclick: move |e| {
                                        e.stop_propagation();
                                        if let Some(c) = carousel.write().as_mut() {
                                            c.open_detail(position);
                                        }
                                    },
                                    "→"
                                }
                            }
                        }
                    }
                }

                div { class: "services__dots",
                    for i in 0..=max_index {
                        button {
                            key: "{i}",
                            class: if i == current_index { "dot is-active" } else { "dot" },
                            "aria-label": "Go to slide {i + 1}",
                            onclick: move |_| go(i as isize),
                        }
                    }
                }
            }
        }

        if let Some(slide) = overlay_slide {
            ServiceDetailModal {
                title: slide.title.clone(),
                image_source: slide.image_source.clone(),
                blurb: services
                    .get(slide.position)
                    .map(|card| card.blurb.clone())
                    .unwrap_or_default(),
                on_close: move |_| {
                    let ticket = carousel.write().as_mut().and_then(|c| c.close_detail());
                    if let Some(ticket) = ticket {
                        drive(ticket);
                    }
                },
            }
        }
    }
}
