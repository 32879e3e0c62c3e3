//! Viewport width classification.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

/// Widths strictly below this many CSS pixels count as mobile.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// Whether the viewport is currently narrow. Starts as desktop so the server
/// render includes the side navigation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewportState {
    pub is_mobile: bool,
}

impl ViewportState {
    /// Reclassify for a new viewport width. Returns `true` when the
    /// classification changed.
    pub fn update_width(&mut self, width: f64) -> bool {
        let is_mobile = width < MOBILE_BREAKPOINT;
        let changed = is_mobile != self.is_mobile;
        self.is_mobile = is_mobile;
        changed
    }
}
