use dioxus::prelude::*;
use shared_ui::components::{Card, CardContent, CardHeader, CardTitle};

pub const HISTORY_PLACEHOLDER: &str = "Funcionalidad de historial aún no implementada.";

#[component]
pub fn HistoryTab() -> Element {
    rsx! {
        Card {
            CardHeader { CardTitle { "Historial del Caso" } }
            CardContent {
                p { class: "muted", "{HISTORY_PLACEHOLDER}" }
            }
        }
    }
}
