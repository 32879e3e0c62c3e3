//! Work-history region.

#[cfg(test)]
#[path = "work_test.rs"]
mod work_test;

use leptos::prelude::*;

use crate::components::region::Region;
use crate::content::{PROFILE, WORK_EXPERIENCE, WorkEntry};
use crate::state::sections::SectionId;

#[component]
pub fn WorkSection() -> impl IntoView {
    view! {
        <Region id=SectionId::Work class="work">
            <div class="region__heading">
                <h2>"Selected Work"</h2>
                <div class="muted mono">{PROFILE.work_span}</div>
            </div>
            <div class="work__list">
                {WORK_EXPERIENCE.iter().map(|entry| view! { <WorkRow entry=entry/> }).collect_view()}
            </div>
        </Region>
    }
}

/// A single job: year, role and company, description, tech labels.
#[component]
pub fn WorkRow(entry: &'static WorkEntry) -> impl IntoView {
    view! {
        <article class="work-row">
            <div class="work-row__year">{entry.year}</div>
            <div class="work-row__body">
                <h3 class="work-row__role">{entry.role}</h3>
                <div class="work-row__company muted">{entry.company}</div>
                <p class="work-row__description muted">{entry.description}</p>
            </div>
            <ul class="work-row__tech">
                {entry.tech.iter().map(|tech| view! { <li class="tag">{*tech}</li> }).collect_view()}
            </ul>
        </article>
    }
}
