//! `IntersectionObserver` subscription over the page regions.
//!
//! SYSTEM CONTEXT
//! ==============
//! The home page attaches one observer at mount for every `SectionId` and
//! forwards each notification batch to `SectionState::apply_batch`. The
//! returned guard owns the JS callback; dropping it (or calling
//! `disconnect`) detaches the observer exactly once.

#[cfg(test)]
#[path = "section_observer_test.rs"]
mod section_observer_test;

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast as _, JsValue, closure::Closure};

use crate::state::sections::SectionId;

/// When a region counts as having entered the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverPolicy {
    /// Fraction of the region that must be visible.
    pub threshold: f64,
    /// CSS margin applied to the viewport; the negative bottom margin makes
    /// regions enter a little after their top edge scrolls in.
    pub root_margin: &'static str,
}

impl Default for ObserverPolicy {
    fn default() -> Self {
        Self { threshold: 0.3, root_margin: "0px 0px -20% 0px" }
    }
}

/// Live observer subscription. Disconnects on drop.
pub struct SectionObserver {
    #[cfg(feature = "hydrate")]
    observer: web_sys::IntersectionObserver,
    #[cfg(feature = "hydrate")]
    _callback: Closure<dyn FnMut(js_sys::Array)>,
    connected: bool,
}

impl SectionObserver {
    /// Observe every region in `ids` that is present in the document.
    ///
    /// `on_batch` receives `(region, is_intersecting)` pairs in delivery
    /// order. Returns `None` outside a browser or when the observer cannot be
    /// constructed.
    pub fn observe<F>(policy: ObserverPolicy, ids: &[SectionId], on_batch: F) -> Option<Self>
    where
        F: FnMut(Vec<(SectionId, bool)>) + 'static,
    {
        #[cfg(feature = "hydrate")]
        {
            let document = web_sys::window()?.document()?;
            let mut on_batch = on_batch;
            let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
                let batch = entries
                    .iter()
                    .filter_map(|entry| {
                        let entry = entry.dyn_into::<web_sys::IntersectionObserverEntry>().ok()?;
                        let id = SectionId::from_id(&entry.target().id())?;
                        Some((id, entry.is_intersecting()))
                    })
                    .collect::<Vec<_>>();
                on_batch(batch);
            });

            let init = web_sys::IntersectionObserverInit::new();
            init.set_threshold(&JsValue::from_f64(policy.threshold));
            init.set_root_margin(policy.root_margin);
            let observer =
                match web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
                    Ok(observer) => observer,
                    Err(err) => {
                        log::warn!("intersection observer unavailable: {err:?}");
                        return None;
                    }
                };

            for id in ids {
                match document.get_element_by_id(id.as_str()) {
                    Some(el) => observer.observe(&el),
                    None => log::warn!("no region rendered for section `{id}`"),
                }
            }
            log::debug!("observing {} page regions", ids.len());

            Some(Self { observer, _callback: callback, connected: true })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (policy, ids, on_batch);
            None
        }
    }

    /// Stop observing. Later calls are no-ops.
    pub fn disconnect(&mut self) {
        if !self.connected {
            return;
        }
        self.connected = false;
        #[cfg(feature = "hydrate")]
        {
            self.observer.disconnect();
            log::debug!("section observer disconnected");
        }
    }

    #[cfg(test)]
    pub(crate) fn is_connected(&self) -> bool {
        self.connected
    }
}

impl Drop for SectionObserver {
    fn drop(&mut self) {
        self.disconnect();
    }
}
