//! Introduction header: name, headline, current position, and skills.

use leptos::prelude::*;

use crate::components::region::Region;
use crate::content::{PROFILE, SKILLS};
use crate::state::sections::SectionId;

#[component]
pub fn IntroSection() -> impl IntoView {
    let last_term = PROFILE.focus_terms.len().saturating_sub(1);
    let focus = PROFILE
        .focus_terms
        .iter()
        .enumerate()
        .map(|(i, term)| {
            let lead = match i {
                0 => " ",
                i if i == last_term => ", and ",
                _ => ", ",
            };
            view! {
                {lead}
                <span class="intro__focus">{*term}</span>
            }
        })
        .collect_view();

    view! {
        <Region id=SectionId::Intro class="intro" header=true>
            <div class="intro__grid">
                <div class="intro__lead">
                    <div class="intro__kicker mono">{PROFILE.kicker}</div>
                    <h1 class="intro__name">
                        {PROFILE.first_name}
                        <br/>
                        <span class="muted">{PROFILE.last_name}</span>
                    </h1>
                    <p class="intro__headline muted">{PROFILE.headline} {focus} "."</p>
                    <div class="intro__status">
                        <span class="intro__availability">
                            <span class="intro__pulse" aria-hidden="true"></span>
                            {PROFILE.availability}
                        </span>
                        <span class="intro__location">{PROFILE.location}</span>
                    </div>
                </div>

                <div class="intro__aside">
                    <div class="intro__block">
                        <div class="intro__label mono">"CURRENTLY"</div>
                        <div class="intro__current">{PROFILE.current_title}</div>
                        <div class="muted">"@ " {PROFILE.current_org}</div>
                        <div class="intro__years muted">{PROFILE.current_years}</div>
                    </div>
                    <div class="intro__block">
                        <div class="intro__label mono">"FOCUS"</div>
                        <ul class="chip-list">
                            {SKILLS.iter().map(|skill| view! { <li class="chip">{*skill}</li> }).collect_view()}
                        </ul>
                    </div>
                </div>
            </div>
        </Region>
    }
}
