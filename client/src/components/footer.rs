//! Page footer with credits and the theme toggle.

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::content::PROFILE;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__credits">
                <div class="muted">{PROFILE.copyright}</div>
                <div class="footer__credit muted">{PROFILE.credit}</div>
            </div>
            <div class="footer__actions">
                <ThemeToggle/>
            </div>
        </footer>
    }
}
