use super::*;

// =============================================================
// SectionId
// =============================================================

#[test]
fn section_ids_are_in_page_order() {
    let ids: Vec<&str> = SectionId::ALL.iter().map(|id| id.as_str()).collect();
    assert_eq!(ids, vec!["intro", "work", "project", "connect"]);
}

#[test]
fn section_ids_are_unique() {
    for (i, a) in SectionId::ALL.iter().enumerate() {
        for (j, b) in SectionId::ALL.iter().enumerate() {
            if i != j {
                assert_ne!(a.as_str(), b.as_str());
            }
        }
    }
}

#[test]
fn from_id_round_trips_every_section() {
    for id in SectionId::ALL {
        assert_eq!(SectionId::from_id(id.as_str()), Some(id));
    }
}

#[test]
fn from_id_rejects_unknown_ids() {
    assert_eq!(SectionId::from_id("about"), None);
    assert_eq!(SectionId::from_id(""), None);
    assert_eq!(SectionId::from_id("Intro"), None);
}

#[test]
fn index_matches_position_in_all() {
    for (i, id) in SectionId::ALL.iter().enumerate() {
        assert_eq!(id.index(), i);
    }
}

#[test]
fn nav_label_uses_navigate_to_prefix() {
    assert_eq!(SectionId::Work.nav_label(), "Navigate to work");
    assert_eq!(SectionId::Connect.to_string(), "connect");
}

// =============================================================
// SectionState
// =============================================================

#[test]
fn default_state_has_nothing_active_or_revealed() {
    let state = SectionState::default();
    assert_eq!(state.active(), None);
    assert_eq!(state.revealed().count(), 0);
    for id in SectionId::ALL {
        assert!(!state.is_active(id));
        assert!(!state.is_revealed(id));
    }
}

#[test]
fn record_entry_reveals_and_activates() {
    let mut state = SectionState::default();
    state.record_entry(SectionId::Work);
    assert!(state.is_revealed(SectionId::Work));
    assert!(state.is_active(SectionId::Work));
    assert!(!state.is_revealed(SectionId::Intro));
}

#[test]
fn active_follows_scroll_order_without_skips() {
    let mut state = SectionState::default();
    let mut seen = Vec::new();
    for id in SectionId::ALL {
        state.apply_batch([(id, true)]);
        seen.push(state.active().unwrap());
    }
    assert_eq!(seen, SectionId::ALL.to_vec());
}

#[test]
fn reveal_is_monotonic_across_reentry() {
    let mut state = SectionState::default();
    state.apply_batch([(SectionId::Intro, true)]);
    state.apply_batch([(SectionId::Intro, false), (SectionId::Work, true)]);
    state.apply_batch([(SectionId::Work, false), (SectionId::Intro, true)]);

    assert!(state.is_revealed(SectionId::Intro));
    assert!(state.is_revealed(SectionId::Work));
    assert_eq!(state.active(), Some(SectionId::Intro));

    let before = state;
    state.apply_batch([(SectionId::Intro, true)]);
    assert_eq!(state, before);
}

#[test]
fn last_intersecting_entry_in_batch_wins() {
    let mut state = SectionState::default();
    state.apply_batch([(SectionId::Project, true), (SectionId::Work, true)]);
    assert_eq!(state.active(), Some(SectionId::Work));
    assert!(state.is_revealed(SectionId::Project));
}

#[test]
fn non_intersecting_entries_are_ignored() {
    let mut state = SectionState::default();
    state.apply_batch([(SectionId::Intro, true)]);
    state.apply_batch([(SectionId::Intro, false), (SectionId::Connect, false)]);
    assert_eq!(state.active(), Some(SectionId::Intro));
    assert!(!state.is_revealed(SectionId::Connect));
}

#[test]
fn skipped_region_is_never_revealed() {
    let mut state = SectionState::default();
    state.apply_batch([(SectionId::Intro, true)]);
    state.apply_batch([(SectionId::Project, true)]);
    let revealed: Vec<SectionId> = state.revealed().collect();
    assert_eq!(revealed, vec![SectionId::Intro, SectionId::Project]);
    assert!(!state.is_revealed(SectionId::Work));
}

#[test]
fn empty_batch_changes_nothing() {
    let mut state = SectionState::default();
    state.record_entry(SectionId::Work);
    let before = state;
    state.apply_batch(std::iter::empty());
    assert_eq!(state, before);
}
