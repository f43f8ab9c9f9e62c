use dioxus::prelude::*;

/// Form wrapper that stops the browser's own submission.
#[component]
pub fn Form(
    #[props(default)] onsubmit: EventHandler<FormEvent>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        form {
            class: "form",
            novalidate: true,
            onsubmit: move |evt| {
                evt.prevent_default();
                onsubmit.call(evt);
            },
            {children}
        }
    }
}

/// Two-column grid of form fields.
#[component]
pub fn FormGrid(children: Element) -> Element {
    rsx! {
        div { class: "form-grid", {children} }
    }
}

