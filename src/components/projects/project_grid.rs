//! Project Grid Component
//!
//! Cards for every project; the active filter hides non-matching cards
//! rather than removing them, so the grid never reorders.

use dioxus::prelude::*;
use portfolio_core::{FilterBar, Project};

use super::ProjectFilterBar;

#[derive(Props, Clone, PartialEq)]
pub struct ProjectsSectionProps {
    pub projects: Vec<Project>,
}

/// Projects section: heading, filter bar and card grid.
#[component]
pub fn ProjectsSection(props: ProjectsSectionProps) -> Element {
    if props.projects.is_empty() {
        return rsx! {};
    }

    let categories: Vec<String> = props
        .projects
        .iter()
        .map(|project| project.category.clone())
        .collect();
    let filter: Signal<FilterBar> = use_signal(move || FilterBar::from_categories(categories));

    rsx! {
        section { class: "projects", id: "projects",
            h2 { class: "section-title", "Projects" }

            ProjectFilterBar { filter }
            ProjectGrid { projects: props.projects.clone(), filter }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ProjectGridProps {
    pub projects: Vec<Project>,
    pub filter: Signal<FilterBar>,
}

#[component]
pub fn ProjectGrid(props: ProjectGridProps) -> Element {
    let filter = props.filter;

    rsx! {
        div { class: "project-grid",
            for project in props.projects.iter() {
                div {
                    key: "{project.title}",
                    class: if filter.read().shows(&project.category) {
                        "project-card"
                    } else {
                        "project-card is-hidden"
                    },

                    img {
                        class: "project-card__img",
                        src: "{project.image_source}",
                        alt: "{project.title}",
                    }
                    div { class: "project-card__body",
                        h3 { class: "project-card__title", "{project.title}" }
                        span { class: "project-card__category", "{project.category}" }
                    }
                }
            }
        }
    }
}
