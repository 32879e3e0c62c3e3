//! Fixed side navigation showing which region is active.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders one control per `SectionId`. Clicking scrolls the region into
//! view; the highlight only follows `SectionState`, which changes when the
//! scroll produces an intersection event.

#[cfg(test)]
#[path = "side_nav_test.rs"]
mod side_nav_test;

use leptos::prelude::*;

use crate::state::sections::{SectionId, SectionState};
use crate::state::viewport::ViewportState;
use crate::util::scroll::scroll_to_section;

/// Vertical dot navigation, hidden on mobile viewports.
#[component]
pub fn SideNav() -> impl IntoView {
    let viewport = expect_context::<RwSignal<ViewportState>>();

    view! {
        <Show when=move || !viewport.with(|v| v.is_mobile)>
            <nav class="side-nav">
                <div class="side-nav__track">
                    {SectionId::ALL.into_iter().map(|id| view! { <NavDot id=id/> }).collect_view()}
                </div>
            </nav>
        </Show>
    }
}

#[component]
fn NavDot(id: SectionId) -> impl IntoView {
    let sections = expect_context::<RwSignal<SectionState>>();

    view! {
        <button
            class="side-nav__dot"
            class:side-nav__dot--active=move || sections.with(|s| s.is_active(id))
            data-section=id.as_str()
            aria-label=id.nav_label()
            on:click=move |_| follow_nav_click(id, sections, scroll_to_section)
        ></button>
    }
}

/// Handle a click on the control for `id`: scroll to that region and nothing
/// else. `SectionState` is read for logging only and never written.
pub fn follow_nav_click(id: SectionId, sections: RwSignal<SectionState>, scroll: impl FnOnce(SectionId)) {
    #[cfg(feature = "hydrate")]
    log::debug!("nav click `{id}` (active: {:?})", sections.with_untracked(SectionState::active));
    #[cfg(not(feature = "hydrate"))]
    let _ = sections;
    scroll(id);
}
