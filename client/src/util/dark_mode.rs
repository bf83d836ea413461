//! Browser side of the theme controller.
//!
//! Reads the preference from `localStorage`, falls back to the
//! `prefers-color-scheme` media query, and mirrors the mode onto `<html>` as a
//! `dark` class plus a `data-theme` attribute. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! safely no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::theme::{DisplayMode, PreferenceError, ThemeEnvironment};

/// `localStorage` key holding `"dark"` or `"light"`.
pub const STORAGE_KEY: &str = "theme";

/// Class toggled on `<html>` for dark-mode stylesheets.
pub const DARK_CLASS: &str = "dark";

/// `ThemeEnvironment` backed by `window`, `localStorage`, and `<html>`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserTheme;

impl ThemeEnvironment for BrowserTheme {
    fn stored_preference(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(STORAGE_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn store_preference(&self, mode: DisplayMode) -> Result<(), PreferenceError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window()
                .and_then(|w| w.local_storage().ok().flatten())
                .ok_or(PreferenceError::Unavailable)?;
            storage
                .set_item(STORAGE_KEY, mode.as_str())
                .map_err(|e| PreferenceError::Rejected(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = mode;
            Err(PreferenceError::Unavailable)
        }
    }

    fn system_prefers_dark(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()
                .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
                .map_or(false, |mq| mq.matches())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }

    fn apply_marker(&self, mode: DisplayMode) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.document_element())
            {
                let class_list = el.class_list();
                if mode.is_dark() {
                    let _ = class_list.add_1(DARK_CLASS);
                } else {
                    let _ = class_list.remove_1(DARK_CLASS);
                }
                let _ = el.set_attribute("data-theme", mode.as_str());
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = mode;
        }
    }
}
