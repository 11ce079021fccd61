//! Project gallery category filter.
//!
//! One active selection at a time; `All` matches every card, a category
//! matches only cards tagged with it. Filtering hides cards, it never
//! reorders or removes them.

/// Active filter selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    /// Whether a card with the given category tag stays visible.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(wanted) => wanted == category,
        }
    }
}

/// Filter bar state: the known categories plus the single active selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterBar {
    categories: Vec<String>,
    active: CategoryFilter,
}

impl FilterBar {
    /// Build the bar from card categories, deduplicating while preserving
    /// first-seen order. Selection starts at `All`.
    pub fn from_categories<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for category in categories {
            let category = category.into();
            if !unique.contains(&category) {
                unique.push(category);
            }
        }
        Self {
            categories: unique,
            active: CategoryFilter::All,
        }
    }

    /// Categories in display order (excluding the implicit `All` button).
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn active(&self) -> &CategoryFilter {
        &self.active
    }

    /// Make `filter` the single active selection.
    pub fn select(&mut self, filter: CategoryFilter) {
        self.active = filter;
    }

    pub fn is_active(&self, filter: &CategoryFilter) -> bool {
        self.active == *filter
    }

    /// Whether a card with the given category is visible under the current
    /// selection.
    pub fn shows(&self, category: &str) -> bool {
        self.active.matches(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_matches_everything() {
        let bar = FilterBar::from_categories(["video", "graphics"]);
        assert!(bar.shows("video"));
        assert!(bar.shows("graphics"));
        assert!(bar.shows("anything"));
    }

    #[test]
    fn test_category_selection_hides_others() {
        let mut bar = FilterBar::from_categories(["video", "graphics"]);
        bar.select(CategoryFilter::Category("video".to_string()));
        assert!(bar.shows("video"));
        assert!(!bar.shows("graphics"));
    }

    #[test]
    fn test_exactly_one_active() {
        let mut bar = FilterBar::from_categories(["video", "graphics"]);
        let video = CategoryFilter::Category("video".to_string());
        let graphics = CategoryFilter::Category("graphics".to_string());
        bar.select(video.clone());
        assert_eq!(bar.active(), &video);
        assert!(bar.is_active(&video));
        assert!(!bar.is_active(&graphics));
        assert!(!bar.is_active(&CategoryFilter::All));
        bar.select(CategoryFilter::All);
        assert_eq!(bar.active(), &CategoryFilter::All);
        assert!(bar.is_active(&CategoryFilter::All));
        assert!(!bar.is_active(&video));
    }

    #[test]
    fn test_categories_deduplicated_in_order() {
        let bar = FilterBar::from_categories(["video", "graphics", "video"]);
        assert_eq!(bar.categories(), ["video", "graphics"]);
    }
}
