//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::home::HomePage;
use crate::state::theme::ThemeController;
use crate::state::ui::NavState;
use crate::util::dark_mode::BrowserTheme;

/// Context handle for the page-wide theme controller.
pub type ThemeSignal = RwSignal<ThemeController<BrowserTheme>>;

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

/// Root application component.
///
/// Provides the theme controller and navbar state, then routes `/` to the
/// single portfolio page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // The server has no storage or media query, so the controller starts
    // unresolved and the browser resolves it once hydrated.
    let theme: ThemeSignal = RwSignal::new(ThemeController::unresolved(BrowserTheme));
    let nav = RwSignal::new(NavState::default());

    provide_context(theme);
    provide_context(nav);

    Effect::new(move || {
        theme.set(ThemeController::initialize(BrowserTheme));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Title text="Garv Kapoor | Portfolio"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
