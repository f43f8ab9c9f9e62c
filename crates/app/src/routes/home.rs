use dioxus::prelude::*;
use shared_ui::components::{
    Button, Card, CardContent, CardDescription, CardHeader, CardTitle, Form, Input,
};

use crate::routes::Route;

/// Landing page: jump to a case by its identifier.
#[component]
pub fn Home() -> Element {
    let mut case_id = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let open_case = move |_: FormEvent| {
        let id = case_id.read().trim().to_string();
        if id.is_empty() {
            error.set(Some("Introduce el identificador del caso".to_string()));
            return;
        }
        error.set(None);
        navigator().push(Route::CaseDetail { id });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./home.css") }
        div { class: "home-page",
            Card {
                CardHeader {
                    CardTitle { "Buscar caso" }
                    CardDescription { "Abre la ficha de un caso por su identificador." }
                }
                CardContent {
                    Form { onsubmit: open_case,
                        div { class: "home-lookup",
                            Input {
                                label: "Identificador del caso",
                                value: case_id.read().clone(),
                                placeholder: "p. ej. 64f1c2...",
                                error: error.read().clone(),
                                on_input: move |e: FormEvent| case_id.set(e.value()),
                            }
                            Button { button_type: "submit", "Abrir caso" }
                        }
                    }
                }
            }
        }
    }
}
