use std::cell::RefCell;

use super::*;

#[derive(Default)]
struct FakeEnv {
    stored: RefCell<Option<String>>,
    prefers_dark: bool,
    marker: RefCell<Option<DisplayMode>>,
    writable: bool,
}

impl FakeEnv {
    fn new(stored: Option<&str>, prefers_dark: bool) -> Self {
        Self {
            stored: RefCell::new(stored.map(str::to_owned)),
            prefers_dark,
            marker: RefCell::new(None),
            writable: true,
        }
    }

    fn read_only(stored: Option<&str>) -> Self {
        Self { writable: false, ..Self::new(stored, false) }
    }
}

impl ThemeEnvironment for FakeEnv {
    fn stored_preference(&self) -> Option<String> {
        self.stored.borrow().clone()
    }

    fn store_preference(&self, mode: DisplayMode) -> Result<(), PreferenceError> {
        if !self.writable {
            return Err(PreferenceError::Unavailable);
        }
        *self.stored.borrow_mut() = Some(mode.as_str().to_owned());
        Ok(())
    }

    fn system_prefers_dark(&self) -> bool {
        self.prefers_dark
    }

    fn apply_marker(&self, mode: DisplayMode) {
        *self.marker.borrow_mut() = Some(mode);
    }
}

// =============================================================
// DisplayMode
// =============================================================

#[test]
fn display_mode_default_is_light() {
    assert_eq!(DisplayMode::default(), DisplayMode::Light);
}

#[test]
fn display_mode_toggled_is_complement() {
    assert_eq!(DisplayMode::Light.toggled(), DisplayMode::Dark);
    assert_eq!(DisplayMode::Dark.toggled(), DisplayMode::Light);
}

#[test]
fn from_stored_only_dark_means_dark() {
    assert_eq!(DisplayMode::from_stored("dark"), DisplayMode::Dark);
    assert_eq!(DisplayMode::from_stored(" dark\n"), DisplayMode::Dark);
    assert_eq!(DisplayMode::from_stored("light"), DisplayMode::Light);
    assert_eq!(DisplayMode::from_stored("DARK"), DisplayMode::Light);
    assert_eq!(DisplayMode::from_stored(""), DisplayMode::Light);
}

// =============================================================
// initialize
// =============================================================

#[test]
fn initialize_persisted_dark_wins_over_system() {
    for prefers_dark in [false, true] {
        let theme = ThemeController::initialize(FakeEnv::new(Some("dark"), prefers_dark));
        assert_eq!(theme.mode(), DisplayMode::Dark);
    }
}

#[test]
fn initialize_persisted_light_wins_over_system_dark() {
    let theme = ThemeController::initialize(FakeEnv::new(Some("light"), true));
    assert_eq!(theme.mode(), DisplayMode::Light);
}

#[test]
fn initialize_without_persisted_follows_system_dark() {
    let theme = ThemeController::initialize(FakeEnv::new(None, true));
    assert_eq!(theme.mode(), DisplayMode::Dark);
}

#[test]
fn initialize_without_any_signal_is_light() {
    let theme = ThemeController::initialize(FakeEnv::new(None, false));
    assert_eq!(theme.mode(), DisplayMode::Light);
}

#[test]
fn initialize_applies_marker_without_writing_storage() {
    let theme = ThemeController::initialize(FakeEnv::new(None, true));
    assert_eq!(*theme.environment().marker.borrow(), Some(DisplayMode::Dark));
    assert_eq!(*theme.environment().stored.borrow(), None);
}

#[test]
fn unresolved_is_light_and_leaves_marker_alone() {
    let theme = ThemeController::unresolved(FakeEnv::new(Some("dark"), true));
    assert_eq!(theme.mode(), DisplayMode::Light);
    assert_eq!(*theme.environment().marker.borrow(), None);
}

// =============================================================
// toggle
// =============================================================

#[test]
fn toggle_twice_restores_mode_and_keeps_projections_in_sync() {
    let mut theme = ThemeController::initialize(FakeEnv::new(None, false));
    let original = theme.mode();

    for _ in 0..2 {
        let (mode, stored) = theme.toggle();
        assert_eq!(stored, Ok(()));
        assert_eq!(mode, theme.mode());
        assert_eq!(*theme.environment().marker.borrow(), Some(theme.mode()));
        assert_eq!(
            theme.environment().stored.borrow().as_deref(),
            Some(theme.mode().as_str())
        );
    }

    assert_eq!(theme.mode(), original);
}

#[test]
fn toggle_persists_value_read_back_on_next_load() {
    let mut theme = ThemeController::initialize(FakeEnv::new(None, false));
    theme.toggle();
    let env = theme.into_environment();

    let reloaded = ThemeController::initialize(env);
    assert_eq!(reloaded.mode(), DisplayMode::Dark);
}

#[test]
fn toggle_updates_memory_and_marker_when_storage_fails() {
    let mut theme = ThemeController::initialize(FakeEnv::read_only(None));
    let (mode, stored) = theme.toggle();
    assert_eq!(mode, DisplayMode::Dark);
    assert_eq!(stored, Err(PreferenceError::Unavailable));
    assert_eq!(theme.mode(), DisplayMode::Dark);
    assert_eq!(*theme.environment().marker.borrow(), Some(DisplayMode::Dark));
}
