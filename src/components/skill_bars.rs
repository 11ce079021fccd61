//! Skill Bars Component
//!
//! Progress bars that mount at zero width and animate out to their target
//! percent once the initial layout has settled. Reveal bookkeeping lives in
//! [`portfolio_core::reveal::RevealObserver`] so the sticky-once-seen rule
//! is testable.

use dioxus::prelude::*;
use portfolio_core::{RevealObserver, Skill, REVEAL_DELAY_MS};

#[derive(Props, Clone, PartialEq)]
pub struct SkillBarsProps {
    pub skills: Vec<Skill>,
}

#[component]
pub fn SkillBars(props: SkillBarsProps) -> Element {
    let count = props.skills.len();
    let mut reveal = use_signal(|| RevealObserver::new(count));

    // Zero-width first paint, then one staggered pass marks every bar seen
    // so the CSS width transition runs exactly once.
    use_effect(move || {
        spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(REVEAL_DELAY_MS)).await;
            let mut observer = reveal.write();
            for index in 0..count {
                observer.observe(index, 1.0);
            }
        });
    });

    rsx! {
        div { class: "skills",
            for (index, skill) in props.skills.iter().enumerate() {
                div { class: "skill", key: "{skill.name}",
                    div { class: "skill__header",
                        span { class: "skill__name", "{skill.name}" }
                        span { class: "skill__percent", "{skill.percent}%" }
                    }
                    div { class: "progress",
                        span {
                            class: "progress__fill",
                            style: if reveal.read().is_revealed(index) {
                                format!("width: {};", skill.width_css())
                            } else {
                                "width: 0;".to_string()
                            },
                        }
                    }
                }
            }
        }
    }
}
