//! Mobile navigation toggle.
//!
//! Class-based show/hide of the navigation links behind the hamburger
//! button. The page applies the returned class list to the `.nav-links`
//! element.

const CLOSED_CLASSES: &str = "nav-links";
const OPEN_CLASSES: &str = "nav-links active";

/// Open/closed state of the mobile menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavToggle {
    open: bool,
}

impl NavToggle {
    /// A closed menu.
    #[must_use]
    pub const fn new() -> Self {
        Self { open: false }
    }

    /// Flip the menu and return the class list to apply.
    pub const fn toggle(&mut self) -> &'static str {
        self.open = !self.open;
        self.class_list()
    }

    /// Close the menu (after a link is followed) and return the class list.
    pub const fn close(&mut self) -> &'static str {
        self.open = false;
        self.class_list()
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Class list for the current state.
    #[must_use]
    pub const fn class_list(&self) -> &'static str {
        if self.open { OPEN_CLASSES } else { CLOSED_CLASSES }
    }
}
