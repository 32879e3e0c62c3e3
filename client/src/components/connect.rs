//! Contact region: email link and social cards.

#[cfg(test)]
#[path = "connect_test.rs"]
mod connect_test;

use leptos::prelude::*;

use crate::components::icon::{Icon, IconGlyph};
use crate::components::region::Region;
use crate::content::{PROFILE, SOCIAL_LINKS, SocialLink};
use crate::state::sections::SectionId;

#[component]
pub fn ConnectSection() -> impl IntoView {
    view! {
        <Region id=SectionId::Connect class="connect">
            <div class="connect__grid">
                <div class="connect__lead">
                    <h2>"Let's Connect"</h2>
                    <p class="connect__blurb muted">{PROFILE.connect_blurb}</p>
                    <a class="connect__email" href=PROFILE.mailto()>
                        <span>{PROFILE.email}</span>
                        <IconGlyph icon=Icon::ArrowRight class="connect__arrow"/>
                    </a>
                </div>
                <div class="connect__elsewhere">
                    <div class="intro__label mono">"ELSEWHERE"</div>
                    <div class="connect__socials">
                        {SOCIAL_LINKS.iter().map(|link| view! { <SocialCard link=link/> }).collect_view()}
                    </div>
                </div>
            </div>
        </Region>
    }
}

#[component]
pub fn SocialCard(link: &'static SocialLink) -> impl IntoView {
    view! {
        <a class="social-card" href=link.url>
            <div class="social-card__platform">
                <IconGlyph icon=link.icon class="social-card__icon"/>
                <span>{link.platform}</span>
            </div>
            <div class="social-card__handle muted">{link.handle}</div>
        </a>
    }
}
