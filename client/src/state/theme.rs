//! Session-only light/dark theme state.
//!
//! The preference starts unresolved so the server render and the first
//! client render agree. It is resolved once on mount from the ambient
//! color-scheme preference and only the toggle changes it afterwards.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Dark mode flag, `None` until resolved from the environment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    dark: Option<bool>,
}

impl ThemeState {
    /// Resolve the preference from the environment.
    ///
    /// Only the first successful resolution sticks. `None` (preference query
    /// unavailable) leaves the theme unresolved.
    pub fn resolve(&mut self, prefers_dark: Option<bool>) {
        if self.dark.is_none() {
            self.dark = prefers_dark;
        }
    }

    /// Flip a resolved preference and return the new value.
    pub fn toggle(&mut self) -> Option<bool> {
        if let Some(dark) = self.dark.as_mut() {
            *dark = !*dark;
        }
        self.dark
    }

    #[cfg(test)]
    pub(crate) fn dark(&self) -> Option<bool> {
        self.dark
    }

    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.dark.is_some()
    }

    /// The root marker state to apply: `None` while unresolved, otherwise
    /// whether the dark class must be present.
    #[must_use]
    pub fn marker_present(&self) -> Option<bool> {
        self.dark
    }

    /// Whether the root element should carry the dark marker class.
    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.dark == Some(true)
    }
}
