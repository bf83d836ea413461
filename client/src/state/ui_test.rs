use super::*;

// =============================================================
// NavState defaults
// =============================================================

#[test]
fn nav_state_default_is_closed_unscrolled_about() {
    let state = NavState::default();
    assert!(!state.menu_open);
    assert!(!state.scrolled);
    assert_eq!(state.active, Section::About);
}

// =============================================================
// menu and selection
// =============================================================

#[test]
fn toggle_menu_flips_open_flag() {
    let mut state = NavState::default();
    state.toggle_menu();
    assert!(state.menu_open);
    state.toggle_menu();
    assert!(!state.menu_open);
}

#[test]
fn select_sets_active_and_closes_menu() {
    let mut state = NavState { menu_open: true, ..NavState::default() };
    state.select(Section::Certificates);
    assert_eq!(state.active, Section::Certificates);
    assert!(!state.menu_open);
}

// =============================================================
// scroll
// =============================================================

#[test]
fn observe_scroll_threshold_is_strict() {
    let mut state = NavState::default();
    assert!(!state.observe_scroll(50.0));
    assert!(!state.scrolled);
    assert!(state.observe_scroll(50.5));
    assert!(state.scrolled);
}

#[test]
fn observe_scroll_reports_only_changes() {
    let mut state = NavState::default();
    assert!(state.observe_scroll(400.0));
    assert!(!state.observe_scroll(800.0));
    assert!(state.observe_scroll(0.0));
    assert!(!state.scrolled);
}

// =============================================================
// Section
// =============================================================

#[test]
fn section_ids_are_unique() {
    for (i, a) in Section::ALL.iter().enumerate() {
        for b in &Section::ALL[i + 1..] {
            assert_ne!(a.id(), b.id());
        }
    }
}

#[test]
fn about_section_targets_hero() {
    assert_eq!(Section::About.id(), "hero");
    assert_eq!(Section::About.href(), "#hero");
    assert_eq!(Section::default(), Section::About);
}

#[test]
fn section_titles_match_navbar_labels() {
    let titles: Vec<&str> = Section::ALL.iter().map(|s| s.title()).collect();
    assert_eq!(titles, ["About", "Skills", "Projects", "Education", "Certificates", "Achievements"]);
}

// =============================================================
// scroll-spy
// =============================================================

fn page_tops() -> Vec<(Section, f64)> {
    vec![
        (Section::About, 0.0),
        (Section::Skills, 900.0),
        (Section::Projects, 1800.0),
        (Section::Education, 2700.0),
    ]
}

#[test]
fn observe_sections_picks_last_section_at_or_above_offset() {
    let mut state = NavState::default();
    assert!(state.observe_sections(1000.0, &page_tops()));
    assert_eq!(state.active, Section::Skills);
    assert!(state.observe_sections(5000.0, &page_tops()));
    assert_eq!(state.active, Section::Education);
}

#[test]
fn observe_sections_top_boundary_is_inclusive() {
    let mut state = NavState::default();
    assert!(!state.observe_sections(899.9, &page_tops()));
    assert_eq!(state.active, Section::About);
    assert!(state.observe_sections(900.0, &page_tops()));
    assert_eq!(state.active, Section::Skills);
}

#[test]
fn observe_sections_follows_scrolling_back_up() {
    let mut state = NavState::default();
    state.observe_sections(2000.0, &page_tops());
    assert_eq!(state.active, Section::Projects);
    assert!(state.observe_sections(10.0, &page_tops()));
    assert_eq!(state.active, Section::About);
}

#[test]
fn observe_sections_reports_only_changes() {
    let mut state = NavState::default();
    assert!(state.observe_sections(1000.0, &page_tops()));
    assert!(!state.observe_sections(1200.0, &page_tops()));
}

#[test]
fn observe_sections_without_qualifying_section_keeps_active() {
    let mut state = NavState::default();
    state.select(Section::Certificates);

    assert!(!state.observe_sections(1000.0, &[]));
    assert_eq!(state.active, Section::Certificates);

    let below = [(Section::Skills, 500.0)];
    assert!(!state.observe_sections(100.0, &below));
    assert_eq!(state.active, Section::Certificates);
}

#[test]
fn observe_sections_leaves_menu_and_scroll_flags() {
    let mut state = NavState { menu_open: true, scrolled: true, ..NavState::default() };
    state.observe_sections(1000.0, &page_tops());
    assert!(state.menu_open);
    assert!(state.scrolled);
}
