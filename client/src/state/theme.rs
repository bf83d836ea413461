//! Display mode state and its controller.
//!
//! DESIGN
//! ======
//! `ThemeController` owns the in-memory `DisplayMode` and keeps the two
//! external projections (the document marker and the persisted preference)
//! in step with it. The environment is injected so the controller can be
//! exercised without a browser; `util::dark_mode::BrowserTheme` is the
//! production implementation.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use thiserror::Error;

/// Light/dark visual theme selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DisplayMode {
    #[default]
    Light,
    Dark,
}

impl DisplayMode {
    /// The other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Value written to the preference store and the `data-theme` marker.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Interpret a persisted preference. Anything other than `"dark"` is an
    /// explicit light preference.
    #[must_use]
    pub fn from_stored(raw: &str) -> Self {
        if raw.trim() == "dark" { Self::Dark } else { Self::Light }
    }
}

/// Failure to persist the preference. Never surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreferenceError {
    #[error("preference storage unavailable")]
    Unavailable,
    #[error("preference write rejected: {0}")]
    Rejected(String),
}

/// Side-effect seam between the controller and its host.
pub trait ThemeEnvironment {
    /// Raw persisted preference, if one was ever written.
    fn stored_preference(&self) -> Option<String>;

    /// Persist `mode` for the next page load.
    ///
    /// # Errors
    ///
    /// Returns an error if the store is missing or refuses the write.
    fn store_preference(&self, mode: DisplayMode) -> Result<(), PreferenceError>;

    /// Whether the operating system asks for a dark color scheme.
    fn system_prefers_dark(&self) -> bool;

    /// Mirror `mode` onto the global visual marker.
    fn apply_marker(&self, mode: DisplayMode);
}

/// Owner of the tab-wide display mode.
#[derive(Clone, Debug)]
pub struct ThemeController<E> {
    env: E,
    mode: DisplayMode,
}

impl<E: ThemeEnvironment> ThemeController<E> {
    /// Resolve the starting mode (persisted, then system, then light) and
    /// apply the marker.
    pub fn initialize(env: E) -> Self {
        let mode = match env.stored_preference() {
            Some(raw) => DisplayMode::from_stored(&raw),
            None if env.system_prefers_dark() => DisplayMode::Dark,
            None => DisplayMode::Light,
        };
        env.apply_marker(mode);
        Self { env, mode }
    }

    /// Controller that has not consulted its environment yet. Used for the
    /// server render, where neither storage nor the OS signal exist.
    pub fn unresolved(env: E) -> Self {
        Self { env, mode: DisplayMode::Light }
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn environment(&self) -> &E {
        &self.env
    }

    /// Flip the mode, update the marker, and persist best-effort.
    ///
    /// Returns the new mode together with the persistence outcome so callers
    /// can log it; the in-memory mode is authoritative either way.
    pub fn toggle(&mut self) -> (DisplayMode, Result<(), PreferenceError>) {
        self.mode = self.mode.toggled();
        self.env.apply_marker(self.mode);
        let stored = self.env.store_preference(self.mode);
        (self.mode, stored)
    }

    /// Release the environment at the end of the page session.
    pub fn into_environment(self) -> E {
        self.env
    }
}
