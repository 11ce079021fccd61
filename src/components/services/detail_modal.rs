//! Service Detail Modal Component
//!
//! Overlay shown when a service card is activated. Closes on the ✕ button,
//! the ghost button, a backdrop click, or Escape.

use dioxus::document;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ServiceDetailModalProps {
    /// Title of the activated service
    pub title: String,
    /// Image shown in the media area
    pub image_source: String,
    /// Short description for the body
    pub blurb: String,
    /// Callback when the modal is dismissed
    pub on_close: EventHandler<()>,
}

/// Service detail modal
///
/// Escape is caught by a document-level listener registered while the modal
/// is mounted, so dismissal works wherever focus sits. Clicks on the panel
/// stop propagation; only the backdrop dismisses.
#[component]
pub fn ServiceDetailModal(props: ServiceDetailModalProps) -> Element {
    let on_close = props.on_close;

    // Document-level Escape listener for the modal's lifetime.
    use_effect(move || {
        spawn(async move {
            let mut escape = document::eval(
                r#"const handler = (e) => {
                    if (e.key === 'Escape') dioxus.send(true);
                };
                document.addEventListener('keydown', handler);
                window.__serviceModalEscape = handler;"#,
            );
            while escape.recv::<bool>().await.is_ok() {
                on_close.call(());
            }
        });
    });

    use_drop(move || {
        // eval dispatches on creation; no need to await the result here
        let _ = document::eval(
            r#"if (window.__serviceModalEscape) {
                document.removeEventListener('keydown', window.__serviceModalEscape);
                delete window.__serviceModalEscape;
            }"#,
        );
    });

    rsx! {
        div {
            class: "service-modal",
            onclick: move |_| on_close.call(()),

            div {
                class: "service-modal__panel",
                role: "dialog",
                "aria-modal": "true",
                "aria-label": "Service details",
                onclick: move |e| e.stop_propagation(),

                button {
                    class: "service-modal__close",
                    r#type: "button",
                    "aria-label": "Close modal",
                    onclick: move |_| on_close.call(()),
                    "✕"
                }

                div { class: "service-modal__media",
                    img {
                        class: "service-modal__img",
                        src: "{props.image_source}",
                        alt: "{props.title}",
                    }
                }

                div { class: "service-modal__body",
                    h3 { class: "service-modal__title", "{props.title}" }
                    p { class: "service-modal__text", "{props.blurb}" }

                    div { class: "service-modal__actions",
                        a {
                            class: "service-modal__btn service-modal__btn--primary",
                            href: "#contact",
                            onclick: move |_| on_close.call(()),
                            "Contact Me"
                        }
                        button {
                            class: "service-modal__btn service-modal__btn--ghost",
                            r#type: "button",
                            onclick: move |_| on_close.call(()),
                            "Close"
                        }
                    }
                }
            }
        }
    }
}
