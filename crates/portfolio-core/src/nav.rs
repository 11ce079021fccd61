//! Navigation menu state.
//!
//! Open/close logic for the responsive nav: a hamburger-toggled link list
//! and one nested dropdown inside it. Stateless per interaction beyond the
//! two flags; the component renders classes straight off the accessors.

/// Mobile navigation menu with a nested dropdown.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
    dropdown_open: bool,
}

impl NavMenu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hamburger toggle. Returns the new open state, which the component
    /// mirrors into `aria-expanded`.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Document-level click. Clicks outside the link list and the toggle
    /// close the menu; clicks inside leave it alone.
    pub fn clicked_at(&mut self, inside_menu: bool) {
        if !inside_menu {
            self.open = false;
        }
    }

    /// Dropdown button inside the menu. Does not close the surrounding
    /// menu, so the button handler must swallow propagation.
    pub fn toggle_dropdown(&mut self) -> bool {
        self.dropdown_open = !self.dropdown_open;
        self.dropdown_open
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_dropdown_open(&self) -> bool {
        self.dropdown_open
    }
}
