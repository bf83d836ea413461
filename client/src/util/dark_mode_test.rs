#![cfg(not(feature = "hydrate"))]

use super::*;
use crate::state::theme::ThemeController;

#[test]
fn stored_preference_is_absent_in_non_hydrate_tests() {
    assert_eq!(BrowserTheme.stored_preference(), None);
    assert!(!BrowserTheme.system_prefers_dark());
}

#[test]
fn store_preference_reports_unavailable_storage() {
    assert_eq!(
        BrowserTheme.store_preference(DisplayMode::Dark),
        Err(PreferenceError::Unavailable)
    );
}

#[test]
fn apply_marker_is_noop_but_callable() {
    BrowserTheme.apply_marker(DisplayMode::Light);
    BrowserTheme.apply_marker(DisplayMode::Dark);
}

#[test]
fn controller_over_browser_theme_defaults_light_and_still_toggles() {
    let mut theme = ThemeController::initialize(BrowserTheme);
    assert_eq!(theme.mode(), DisplayMode::Light);
    let (mode, stored) = theme.toggle();
    assert_eq!(mode, DisplayMode::Dark);
    assert!(stored.is_err());
    assert_eq!(theme.mode(), DisplayMode::Dark);
}
