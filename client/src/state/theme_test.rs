use super::*;

#[test]
fn default_is_unresolved() {
    let state = ThemeState::default();
    assert!(!state.is_resolved());
    assert_eq!(state.dark(), None);
    assert!(!state.is_dark());
}

#[test]
fn resolve_stores_environment_preference() {
    let mut state = ThemeState::default();
    state.resolve(Some(true));
    assert_eq!(state.dark(), Some(true));
    assert!(state.is_dark());
}

#[test]
fn resolve_only_applies_once() {
    let mut state = ThemeState::default();
    state.resolve(Some(false));
    state.resolve(Some(true));
    assert_eq!(state.dark(), Some(false));
}

#[test]
fn unavailable_preference_stays_unresolved() {
    let mut state = ThemeState::default();
    state.resolve(None);
    assert!(!state.is_resolved());
    state.resolve(Some(true));
    assert_eq!(state.dark(), Some(true));
}

#[test]
fn toggle_flips_light_to_dark_and_back() {
    let mut state = ThemeState::default();
    state.resolve(Some(false));

    assert_eq!(state.toggle(), Some(true));
    assert!(state.is_dark());

    assert_eq!(state.toggle(), Some(false));
    assert!(!state.is_dark());
}

#[test]
fn toggle_is_noop_while_unresolved() {
    let mut state = ThemeState::default();
    assert_eq!(state.toggle(), None);
    assert!(!state.is_resolved());
}

#[test]
fn resolve_after_toggle_does_not_override() {
    let mut state = ThemeState::default();
    state.resolve(Some(true));
    state.toggle();
    state.resolve(Some(true));
    assert_eq!(state.dark(), Some(false));
}

#[test]
fn marker_is_absent_while_unresolved() {
    let mut state = ThemeState::default();
    assert_eq!(state.marker_present(), None);
    state.toggle();
    assert_eq!(state.marker_present(), None);
}

#[test]
fn marker_follows_toggle_sequence() {
    let mut state = ThemeState::default();
    state.resolve(Some(false));
    assert_eq!(state.marker_present(), Some(false));

    assert_eq!(state.toggle(), Some(true));
    assert_eq!(state.marker_present(), Some(true));

    assert_eq!(state.toggle(), Some(false));
    assert_eq!(state.marker_present(), Some(false));
}
