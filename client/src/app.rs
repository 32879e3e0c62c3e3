//! Root application component with routing and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{Link, Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::content::SITE;
use crate::pages::home::HomePage;
use crate::state::{sections::SectionState, theme::ThemeState, viewport::ViewportState};
use crate::util::dark_mode;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Push the theme's root marker state through `apply` once resolved.
fn sync_root_marker(theme: ThemeState, apply: impl FnOnce(bool)) {
    if let Some(on) = theme.marker_present() {
        apply(on);
    }
}

/// Root application component.
///
/// Provides the theme, section, and viewport state contexts, resolves the
/// theme once after mount, and keeps the `<html>` dark marker in sync.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = RwSignal::new(ThemeState::default());
    let sections = RwSignal::new(SectionState::default());
    let viewport = RwSignal::new(ViewportState::default());

    provide_context(theme);
    provide_context(sections);
    provide_context(viewport);

    Effect::new(move || {
        theme.update(|t| t.resolve(dark_mode::system_preference()));
    });

    Effect::new(move || {
        sync_root_marker(theme.get(), dark_mode::apply);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Title text=SITE.title/>
        <Meta name="description" content=SITE.description/>
        <Meta name="keywords" content=SITE.keywords_content()/>
        <Link rel="icon" href=SITE.favicon/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
