//! Data types for portfolio content.

mod project;
mod service;
mod skill;

pub use project::Project;
pub use service::ServiceCard;
pub use skill::Skill;
