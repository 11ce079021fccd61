//! Portfolio content model.
//!
//! Everything the page displays - skills, service cards, projects - comes
//! from one [`PortfolioContent`] value. It can be loaded from a JSON file
//! (`--content` on the binary) or fall back to the built-in default, so the
//! app always has something to render.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::carousel::Slide;
use crate::error::{PortfolioError, PortfolioResult};
use crate::types::{Project, ServiceCard, Skill};

/// Full content of the portfolio page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioContent {
    pub owner_name: String,
    pub tagline: String,
    pub skills: Vec<Skill>,
    pub services: Vec<ServiceCard>,
    pub projects: Vec<Project>,
}

impl PortfolioContent {
    /// Load content from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> PortfolioResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        let content: Self = serde_json::from_str(&raw)?;
        content.validate()?;
        tracing::debug!(
            "Loaded portfolio content from {:?}: {} skills, {} services, {} projects",
            path,
            content.skills.len(),
            content.services.len(),
            content.projects.len()
        );
        Ok(content)
    }

    /// Reject content with nothing to show.
    fn validate(&self) -> PortfolioResult<()> {
        if self.skills.is_empty() && self.services.is_empty() && self.projects.is_empty() {
            return Err(PortfolioError::Content(
                "content has no skills, services or projects".to_string(),
            ));
        }
        Ok(())
    }

    /// Slides for the service carousel, positions assigned from card order.
    pub fn service_slides(&self) -> Vec<Slide> {
        self.services
            .iter()
            .enumerate()
            .map(|(position, card)| Slide::new(&card.title, &card.image_source, position))
            .collect()
    }

    /// Unique project categories in first-seen order.
    pub fn project_categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for project in &self.projects {
            if !categories.contains(&project.category) {
                categories.push(project.category.clone());
            }
        }
        categories
    }
}

impl Default for PortfolioContent {
    /// Built-in sample content, used when no content file is present.
    fn default() -> Self {
        Self {
            owner_name: "Alex Rivera".to_string(),
            tagline: "Video editor & graphics designer crafting visuals that stick".to_string(),
            skills: vec![
                Skill::new("Video Editing", 92),
                Skill::new("Motion Graphics", 84),
                Skill::new("Graphics Design", 88),
                Skill::new("Color Grading", 76),
            ],
            services: vec![
                ServiceCard::new(
                    "Video Editing",
                    "assets/services/video-editing.webp",
                    "Story-driven cuts for brands and creators, from raw footage to publish-ready delivery.",
                ),
                ServiceCard::new(
                    "Motion Graphics",
                    "assets/services/motion-graphics.webp",
                    "Animated intros, lower thirds and explainers that keep viewers watching.",
                ),
                ServiceCard::new(
                    "Brand Design",
                    "assets/services/brand-design.webp",
                    "Logos, palettes and templates for a look that stays consistent everywhere.",
                ),
                ServiceCard::new(
                    "Social Media Kits",
                    "assets/services/social-kits.webp",
                    "Thumbnail and post packages tuned for each platform's feed.",
                ),
            ],
            projects: vec![
                Project::new("Product Launch Film", "video", "assets/projects/launch-film.webp"),
                Project::new("Channel Rebrand", "graphics", "assets/projects/rebrand.webp"),
                Project::new("Event Aftermovie", "video", "assets/projects/aftermovie.webp"),
                Project::new("Poster Series", "graphics", "assets/projects/posters.webp"),
                Project::new("Tutorial Series Edit", "video", "assets/projects/tutorials.webp"),
                Project::new("Merch Artwork", "graphics", "assets/projects/merch.webp"),
            ],
        }
    }
}
