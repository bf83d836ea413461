//! Local UI chrome state (navigation menu, scroll flag, active section).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the contact and theme state
//! so the page chrome can evolve independently of them.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Scroll offset (px) past which the navbar switches to its solid style.
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;

/// Distance below the viewport top at which a section counts as "in view".
/// Matches the fixed navbar height so the highlighted link is the section
/// the reader sees under the bar.
pub const SPY_OFFSET_PX: f64 = 80.0;

/// Page sections reachable from the navbar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    About,
    Skills,
    Projects,
    Education,
    Certificates,
    Achievements,
}

impl Section {
    /// Navbar order.
    pub const ALL: [Section; 6] = [
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Education,
        Section::Certificates,
        Section::Achievements,
    ];

    /// DOM id of the section element.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::About => "hero",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Education => "education",
            Self::Certificates => "certificates",
            Self::Achievements => "achievements",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Education => "Education",
            Self::Certificates => "Certificates",
            Self::Achievements => "Achievements",
        }
    }

    #[must_use]
    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

/// Navbar state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub menu_open: bool,
    pub scrolled: bool,
    pub active: Section,
}

impl NavState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Mark `section` active and close the mobile menu.
    pub fn select(&mut self, section: Section) {
        self.active = section;
        self.menu_open = false;
    }

    /// Update the scrolled flag from the window offset. Returns whether it
    /// changed.
    pub fn observe_scroll(&mut self, offset_y: f64) -> bool {
        let scrolled = offset_y > SCROLLED_THRESHOLD_PX;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    /// Scroll-spy: mark active the last section whose top is at or above
    /// `offset_y`. `tops` are document offsets in page order. Leaves `active`
    /// alone when no section qualifies. Returns whether it changed.
    pub fn observe_sections(&mut self, offset_y: f64, tops: &[(Section, f64)]) -> bool {
        let Some(&(section, _)) = tops.iter().rev().find(|(_, top)| *top <= offset_y) else {
            return false;
        };
        let changed = section != self.active;
        self.active = section;
        changed
    }
}
