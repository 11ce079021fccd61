//! Project Filter Bar Component
//!
//! One button per category plus "All"; exactly one is active. Selection
//! logic lives in [`portfolio_core::filter::FilterBar`].

use dioxus::prelude::*;
use portfolio_core::{CategoryFilter, FilterBar};

#[derive(Props, Clone, PartialEq)]
pub struct ProjectFilterBarProps {
    /// Shared filter state, owned by the section
    pub filter: Signal<FilterBar>,
}

#[component]
pub fn ProjectFilterBar(props: ProjectFilterBarProps) -> Element {
    let mut filter = props.filter;

    let categories = filter.read().categories().to_vec();
    let all_active = filter.read().is_active(&CategoryFilter::All);

    rsx! {
        div { class: "filter-bar",
            button {
                class: if all_active { "filter-btn is-active" } else { "filter-btn" },
                onclick: move |_| filter.write().select(CategoryFilter::All),
                "All"
            }

            for category in categories {
                {
                    let selection = CategoryFilter::Category(category.clone());
                    let active = filter.read().is_active(&selection);
                    let label = title_case(&category);
                    rsx! {
                        button {
                            key: "{category}",
                            class: if active { "filter-btn is-active" } else { "filter-btn" },
                            onclick: move |_| filter.write().select(selection.clone()),
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}

/// "video" -> "Video" for button labels
fn title_case(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
