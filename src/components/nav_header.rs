//! Navigation Header Component
//!
//! Sticky top navigation: brand, section links, and a hamburger-toggled
//! mobile menu with a nested "More" dropdown. Open/close decisions live in
//! [`portfolio_core::nav::NavMenu`].

use dioxus::prelude::*;
use portfolio_core::NavMenu;

/// Section anchors in page order
const LINKS: &[(&str, &str)] = &[
    ("#about", "About"),
    ("#skills", "Skills"),
    ("#services", "Services"),
    ("#projects", "Projects"),
];

/// Extra links tucked into the dropdown
const DROPDOWN_LINKS: &[(&str, &str)] = &[("#contact", "Contact"), ("#top", "Back to top")];

#[derive(Props, Clone, PartialEq)]
pub struct NavHeaderProps {
    /// Brand text (the owner's name)
    pub owner_name: String,
}

/// Navigation header
///
/// On narrow layouts the link list collapses behind the hamburger; a scrim
/// below the open menu closes it on any outside click, mirroring the
/// document-level dismiss behavior of the web page.
#[component]
pub fn NavHeader(props: NavHeaderProps) -> Element {
    let mut menu = use_signal(NavMenu::new);

    let is_open = menu.read().is_open();
    let dropdown_open = menu.read().is_dropdown_open();

    rsx! {
        if is_open {
            div {
                class: "nav__scrim",
                onclick: move |_| menu.write().clicked_at(false),
            }
        }

        header { class: "nav", id: "top",
            a { class: "nav__brand", href: "#top", "{props.owner_name}" }

            button {
                class: "nav__toggle",
                "aria-expanded": if is_open { "true" } else { "false" },
                "aria-label": "Toggle navigation",
                onclick: move |e| {
                    e.stop_propagation();
                    let open = menu.write().toggle();
                    tracing::debug!("Mobile menu toggled, open={}", open);
                },
                span { class: "nav__toggle-bar" }
                span { class: "nav__toggle-bar" }
                span { class: "nav__toggle-bar" }
            }

            ul {
                class: if is_open { "nav__links is-open" } else { "nav__links" },
                // clicks inside the list must not reach the scrim
                onclick: move |e| {
                    e.stop_propagation();
                    menu.write().clicked_at(true);
                },

                for (href, label) in LINKS {
                    li {
                        a { class: "nav__link", href: "{href}", "{label}" }
                    }
                }

                li {
                    class: if dropdown_open { "nav__dropdown is-open" } else { "nav__dropdown" },

                    button {
                        class: "nav__dropbtn",
                        // keep the surrounding mobile menu open
                        onclick: move |e| {
                            e.prevent_default();
                            e.stop_propagation();
                            menu.write().toggle_dropdown();
                        },
                        "More ▾"
                    }

                    ul { class: "nav__dropdown-list",
                        for (href, label) in DROPDOWN_LINKS {
                            li {
                                a { class: "nav__link", href: "{href}", "{label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
