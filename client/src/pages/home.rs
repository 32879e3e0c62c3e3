//! The portfolio page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Composes the four regions with the side navigation and footer, then wires
//! the browser subscriptions that drive `SectionState` and `ViewportState`.
//! Both subscriptions are acquired once after mount and released when the
//! page's reactive owner is cleaned up.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::connect::ConnectSection;
use crate::components::footer::Footer;
use crate::components::intro::IntroSection;
use crate::components::projects::ProjectSection;
use crate::components::side_nav::SideNav;
use crate::components::work::WorkSection;
use crate::state::sections::{SectionId, SectionState};
use crate::state::viewport::ViewportState;
use crate::util::section_observer::{ObserverPolicy, SectionObserver};
use crate::util::viewport::{ResizeSubscription, current_width};

#[component]
pub fn HomePage() -> impl IntoView {
    let sections = expect_context::<RwSignal<SectionState>>();
    let viewport = expect_context::<RwSignal<ViewportState>>();

    // Effects only run in the browser, after the regions are in the DOM.
    Effect::new(move || {
        let observer = SectionObserver::observe(ObserverPolicy::default(), &SectionId::ALL, move |batch| {
            sections.update(|s| s.apply_batch(batch));
        });
        if let Some(observer) = observer {
            let guard = StoredValue::new_local(observer);
            on_cleanup(move || {
                guard.try_update_value(SectionObserver::disconnect);
            });
        }
    });

    Effect::new(move || {
        if let Some(width) = current_width() {
            viewport.maybe_update(|v| v.update_width(width));
        }
        // Only notify subscribers when the mobile classification flips.
        let subscription = ResizeSubscription::attach(move |width| {
            viewport.maybe_update(|v| v.update_width(width));
        });
        if let Some(subscription) = subscription {
            let guard = StoredValue::new_local(subscription);
            on_cleanup(move || {
                guard.try_update_value(ResizeSubscription::release);
            });
        }
    });

    view! {
        <div class="page">
            <SideNav/>
            <main class="page__main">
                <IntroSection/>
                <WorkSection/>
                <ProjectSection/>
                <ConnectSection/>
                <Footer/>
            </main>
            <div class="page__fade" aria-hidden="true"></div>
        </div>
    }
}
