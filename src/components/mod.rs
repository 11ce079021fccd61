//! UI components for the portfolio page.

mod nav_header;
pub mod projects;
pub mod services;
mod skill_bars;

pub use nav_header::NavHeader;
pub use projects::ProjectsSection;
pub use services::ServicesSection;
pub use skill_bars::SkillBars;
