//! Mobile menu state.
//!
//! The menu is open or closed; the `active` markers on the link panel and
//! toggle button plus the toggle's `aria-expanded` are derived from that one
//! value, so the two markers can never disagree.

/// Open/closed state of the mobile navigation menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    Open,
    #[default]
    Closed,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    fn flipped(self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }
}

/// What the DOM should show for a given menu state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuProjection {
    /// `active` class on both the link panel and the toggle
    pub active: bool,
    /// Value for the toggle's `aria-expanded` attribute
    pub aria_expanded: &'static str,
}

/// Menu state machine owned by the navigation controller.
#[derive(Clone, Debug, Default)]
pub struct Menu {
    state: MenuState,
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Toggle button clicked. Always flips.
    pub fn toggle(&mut self) -> MenuState {
        self.state = self.state.flipped();
        self.state
    }

    /// A nav link was clicked. Closes unconditionally.
    pub fn close(&mut self) -> MenuState {
        self.state = MenuState::Closed;
        self.state
    }

    /// A click anywhere on the document.
    ///
    /// Returns `true` when the click dismissed an open menu. Clicks inside
    /// the nav bar never change state through this path.
    pub fn document_click(&mut self, inside_nav: bool) -> bool {
        if inside_nav || !self.state.is_open() {
            return false;
        }
        self.state = MenuState::Closed;
        true
    }

    pub fn projection(&self) -> MenuProjection {
        let active = self.state.is_open();
        MenuProjection {
            active,
            aria_expanded: if active { "true" } else { "false" },
        }
    }
}
