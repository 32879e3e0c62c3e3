//! Page regions and scroll-driven reveal/active tracking.
//!
//! DESIGN
//! ======
//! `SectionId::ALL` is the only list of regions. The side navigation renders
//! one control per entry and the page renders one region per entry, so the
//! two can never drift apart. `SectionState` is fed by intersection batches
//! and only ever grows its revealed set.

#[cfg(test)]
#[path = "sections_test.rs"]
mod sections_test;

use std::fmt;

/// Class added to a region the first time it enters the viewport.
pub const REVEAL_CLASS: &str = "animate-fade-in-up";

/// One of the four scrollable page regions, in page order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionId {
    Intro,
    Work,
    Project,
    Connect,
}

impl SectionId {
    /// Every region, top to bottom.
    pub const ALL: [SectionId; 4] = [SectionId::Intro, SectionId::Work, SectionId::Project, SectionId::Connect];

    /// DOM id of the region element.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Intro => "intro",
            Self::Work => "work",
            Self::Project => "project",
            Self::Connect => "connect",
        }
    }

    /// Parse a DOM id back into a region. Unknown ids are not regions.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.as_str() == id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Accessible label for the navigation control targeting this region.
    #[must_use]
    pub fn nav_label(self) -> String {
        format!("Navigate to {}", self.as_str())
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reveal and active-section state for the page.
///
/// `revealed` is monotonic: once a region has entered the viewport it stays
/// revealed for the life of the page. `active` is whatever region entered
/// last, with no history.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SectionState {
    active: Option<SectionId>,
    revealed: [bool; SectionId::ALL.len()],
}

impl SectionState {
    /// Record that `id` entered the viewport.
    pub fn record_entry(&mut self, id: SectionId) {
        self.revealed[id.index()] = true;
        self.active = Some(id);
    }

    /// Apply one observer batch in delivery order.
    ///
    /// Entries that are not intersecting are skipped. When several regions
    /// enter in the same batch the last one becomes active.
    pub fn apply_batch<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (SectionId, bool)>,
    {
        for (id, intersecting) in entries {
            if intersecting {
                self.record_entry(id);
            }
        }
    }

    #[must_use]
    pub fn active(&self) -> Option<SectionId> {
        self.active
    }

    #[must_use]
    pub fn is_active(&self, id: SectionId) -> bool {
        self.active == Some(id)
    }

    #[must_use]
    pub fn is_revealed(&self, id: SectionId) -> bool {
        self.revealed[id.index()]
    }

    /// Revealed regions in page order.
    #[cfg(test)]
    pub(crate) fn revealed(&self) -> impl Iterator<Item = SectionId> + '_ {
        SectionId::ALL.into_iter().filter(|id| self.is_revealed(*id))
    }
}
