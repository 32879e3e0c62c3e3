//! Observed page region wrapper.
//!
//! ARCHITECTURE
//! ============
//! Every scrollable region renders through `Region`, which stamps the DOM id
//! the observer and side navigation look up and adds the reveal class once
//! `SectionState` marks the region revealed.

use leptos::either::Either;
use leptos::prelude::*;

use crate::state::sections::{REVEAL_CLASS, SectionId, SectionState};

/// A page region with a stable id and a one-time reveal animation.
///
/// `header` renders the region as `<header>` instead of `<section>`.
#[component]
pub fn Region(
    id: SectionId,
    #[prop(optional)] class: &'static str,
    #[prop(optional)] header: bool,
    children: Children,
) -> impl IntoView {
    let sections = expect_context::<RwSignal<SectionState>>();
    let revealed = move || sections.with(|s| s.is_revealed(id));
    let class = format!("region region--{id} {class}");

    if header {
        Either::Left(view! {
            <header id=id.as_str() class=class class=(REVEAL_CLASS, revealed)>
                {children()}
            </header>
        })
    } else {
        Either::Right(view! {
            <section id=id.as_str() class=class class=(REVEAL_CLASS, revealed)>
                {children()}
            </section>
        })
    }
}
