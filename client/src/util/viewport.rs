//! Window width reads and `resize` subscriptions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Feeds `ViewportState` so the side navigation can hide on narrow screens.
//! The subscription guard removes its listener on drop, mirroring
//! `SectionObserver`.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast as _, closure::Closure};

/// Current `window.innerWidth` in CSS pixels, if there is a window.
pub fn current_width() -> Option<f64> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()?.inner_width().ok()?.as_f64()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Registered `resize` listener. Removed on drop.
pub struct ResizeSubscription {
    #[cfg(feature = "hydrate")]
    callback: Closure<dyn FnMut()>,
    attached: bool,
}

impl ResizeSubscription {
    /// Call `on_width` with the new window width after every resize.
    ///
    /// Returns `None` outside a browser.
    pub fn attach<F>(on_width: F) -> Option<Self>
    where
        F: FnMut(f64) + 'static,
    {
        #[cfg(feature = "hydrate")]
        {
            let window = web_sys::window()?;
            let mut on_width = on_width;
            let callback = Closure::<dyn FnMut()>::new(move || {
                if let Some(width) = current_width() {
                    on_width(width);
                }
            });
            if let Err(err) = window.add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref()) {
                log::warn!("resize listener unavailable: {err:?}");
                return None;
            }
            Some(Self { callback, attached: true })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = on_width;
            None
        }
    }

    /// Remove the listener. Later calls are no-ops.
    pub fn release(&mut self) {
        if !self.attached {
            return;
        }
        self.attached = false;
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.remove_event_listener_with_callback("resize", self.callback.as_ref().unchecked_ref());
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn is_attached(&self) -> bool {
        self.attached
    }
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        self.release();
    }
}
