//! Home page - the whole portfolio in one scrollable view.
//!
//! Sections are independent: nav, skills, services carousel and project
//! gallery share no state, only the content they render.

use dioxus::prelude::*;

use crate::app::use_portfolio_content;
use crate::components::{NavHeader, ProjectsSection, ServicesSection, SkillBars};

#[component]
pub fn Home() -> Element {
    let content = use_portfolio_content();
    let content = content.read();

    rsx! {
        NavHeader { owner_name: content.owner_name.clone() }

        main {
            section { class: "hero", id: "about",
                h1 { class: "hero__title", "{content.owner_name}" }
                p { class: "hero__tagline", "{content.tagline}" }
            }

            if !content.skills.is_empty() {
                section { id: "skills",
                    h2 { class: "section-title", "Skills" }
                    SkillBars { skills: content.skills.clone() }
                }
            }

            ServicesSection { services: content.services.clone() }

            ProjectsSection { projects: content.projects.clone() }

            section { class: "contact", id: "contact",
                h2 { class: "section-title", "Contact" }
                p { "Let's make something worth watching - say hello." }
            }
        }
    }
}
