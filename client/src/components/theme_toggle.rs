//! Light/dark toggle button.

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

use leptos::prelude::*;

use crate::components::icon::{Icon, IconGlyph};
use crate::state::theme::ThemeState;

/// Icon for the toggle: the sun while dark (switch to light), the moon
/// while light.
#[must_use]
pub fn toggle_icon(theme: ThemeState) -> Icon {
    if theme.is_dark() { Icon::Sun } else { Icon::Moon }
}

/// Flips `ThemeState`. Not rendered until the theme is resolved, so the
/// first paint never shows the wrong icon.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeState>>();

    view! {
        <Show when=move || theme.with(ThemeState::is_resolved)>
            <button
                class="theme-toggle"
                aria-label="Toggle theme"
                on:click=move |_| {
                    theme.update(|t| {
                        t.toggle();
                    });
                }
            >
                {move || view! { <IconGlyph icon=toggle_icon(theme.get()) class="theme-toggle__icon"/> }}
            </button>
        </Show>
    }
}
