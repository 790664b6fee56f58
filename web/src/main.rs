use dioxus::logger::tracing::Level;
use dioxus::prelude::*;
use tracing::{info, warn};

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::core::config::AppConfig;
use ui::views::{Analytics, Create, Home};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/create")]
    Create {},
    #[route("/analytics")]
    Analytics {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Home {},
        "{label}"
    })
}
fn nav_create(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Create {},
        "{label}"
    })
}
fn nav_analytics(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Analytics {},
        "{label}"
    })
}

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger already initialized: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    {
        ui::i18n::init();
        register_nav(NavBuilder {
            home: nav_home,
            create: nav_create,
            analytics: nav_analytics,
        });
    }

    let config = use_context_provider(AppConfig::load);
    use_context_provider(|| Signal::new("en-US".to_string()));

    use_hook(move || {
        info!(preview = %config.preview_url(), submit = %config.submit_url(), "qr studio starting");
        if config.debounce_ms == 0 {
            warn!("preview debounce disabled; every keystroke will hit the preview endpoint");
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Web-specific layout around the shared `AppNavbar`, so the navbar can use
/// the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        main { class: "app-main",
            Outlet::<Route> {}
        }
    }
}
