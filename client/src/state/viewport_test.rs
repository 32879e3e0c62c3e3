use super::*;

#[test]
fn default_is_desktop() {
    assert!(!ViewportState::default().is_mobile);
}

#[test]
fn narrow_width_is_mobile() {
    let mut state = ViewportState::default();
    assert!(state.update_width(375.0));
    assert!(state.is_mobile);
}

#[test]
fn breakpoint_itself_is_not_mobile() {
    let mut state = ViewportState::default();
    assert!(!state.update_width(MOBILE_BREAKPOINT));
    assert!(!state.is_mobile);
    assert!(state.update_width(MOBILE_BREAKPOINT - 1.0));
    assert!(state.is_mobile);
}

#[test]
fn repeated_width_reports_no_change() {
    let mut state = ViewportState::default();
    state.update_width(500.0);
    assert!(!state.update_width(600.0));
    assert!(state.update_width(1280.0));
    assert!(!state.is_mobile);
}
