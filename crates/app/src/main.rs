use api::config::load_config;
use api::HttpBackend;
use dioxus::prelude::*;
use shared_ui::theme::ThemeMode;

pub mod format_helpers;
pub mod notify;
mod routes;
use routes::Route;

pub const APP_TITLE: &str = "CGM Sistema de Gestión";
pub const APP_DESCRIPTION: &str = "Sistema de gestión de casos para CGM";

const INTER_FONT: &str =
    "https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&display=swap";

const THEME_BASE: Asset = asset!("/assets/theme-base.css");
const THEME_LIGHT: Asset = asset!("/assets/themes/light.css");
const THEME_DARK: Asset = asset!("/assets/themes/dark.css");

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        let config = load_config();
        tracing::info!(api = %config.api.base_url, "serving CGM frontend");
        Ok(dioxus::server::router(App))
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

/// Root layout: document metadata, font, theme, toast host and the main
/// content frame every page renders into.
#[component]
fn App() -> Element {
    let config = load_config();
    use_context_provider(|| HttpBackend::from_config(config));

    let mode = ThemeMode::from_key(&config.ui.theme);
    let lang = config.ui.lang.clone();

    rsx! {
        document::Title { "{APP_TITLE}" }
        document::Meta { name: "description", content: APP_DESCRIPTION }
        document::Link { rel: "preconnect", href: "https://fonts.googleapis.com" }
        document::Link { rel: "stylesheet", href: INTER_FONT }
        document::Link { rel: "stylesheet", href: THEME_BASE }
        document::Link { rel: "stylesheet", href: THEME_LIGHT }
        document::Link { rel: "stylesheet", href: THEME_DARK }
        shared_ui::theme::ThemeSeed { mode, lang }
        shared_ui::ToastProvider {
            MainFrame {
                Router::<Route> {}
            }
        }
    }
}

/// The `main` element pages render into.
#[component]
fn MainFrame(children: Element) -> Element {
    rsx! {
        main { class: "app-main", {children} }
    }
}
