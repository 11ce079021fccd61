//! Project gallery with category filtering.

mod filter_bar;
mod project_grid;

pub use filter_bar::ProjectFilterBar;
pub use project_grid::{ProjectGrid, ProjectsSection};
