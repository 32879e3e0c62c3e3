//! Dark mode detection and application.
//!
//! Reads the ambient `prefers-color-scheme` media query and applies the
//! `.dark` class to the `<html>` element. Nothing is written to storage; the
//! preference lives only in `ThemeState` for the session. Requires a browser
//! environment.
//!
//! TRADE-OFFS
//! ==========
//! SSR paths no-op and report the preference as unavailable, so the server
//! render never guesses a theme.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

/// Class toggled on the document root while dark mode is on.
pub const DARK_CLASS: &str = "dark";

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Read the system color-scheme preference.
///
/// Returns `None` when there is no window or the media query cannot be
/// evaluated.
pub fn system_preference() -> Option<bool> {
    #[cfg(feature = "hydrate")]
    {
        let query = web_sys::window()?.match_media(DARK_QUERY).ok().flatten();
        let Some(query) = query else {
            log::debug!("color-scheme query unavailable; theme stays unresolved");
            return None;
        };
        let dark = query.matches();
        log::debug!("resolved color-scheme preference: dark={dark}");
        Some(dark)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = DARK_QUERY;
        None
    }
}

/// Add or remove the `.dark` class on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let class_list = el.class_list();
                if enabled {
                    let _ = class_list.add_1(DARK_CLASS);
                } else {
                    let _ = class_list.remove_1(DARK_CLASS);
                }
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}
