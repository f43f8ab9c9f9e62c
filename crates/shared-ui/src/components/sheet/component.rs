use dioxus::prelude::*;

/// Side panel used for modal forms. Clicking the backdrop calls `on_close`.
#[component]
pub fn Sheet(open: bool, on_close: EventHandler<()>, children: Element) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "sheet-overlay",
            "data-open": "true",
            onclick: move |_| on_close.call(()),
            div {
                class: "sheet-panel",
                role: "dialog",
                "aria-modal": "true",
                onclick: move |evt| evt.stop_propagation(),
                {children}
            }
        }
    }
}

#[component]
pub fn SheetHeader(children: Element) -> Element {
    rsx! {
        div { class: "sheet-header", {children} }
    }
}

#[component]
pub fn SheetTitle(children: Element) -> Element {
    rsx! {
        h2 { class: "sheet-title", {children} }
    }
}

#[component]
pub fn SheetDescription(children: Element) -> Element {
    rsx! {
        p { class: "sheet-description", {children} }
    }
}

/// Scrollable body between header and footer.
#[component]
pub fn SheetBody(children: Element) -> Element {
    rsx! {
        div { class: "sheet-body", {children} }
    }
}

#[component]
pub fn SheetFooter(children: Element) -> Element {
    rsx! {
        div { class: "sheet-footer", {children} }
    }
}

#[component]
pub fn SheetClose(on_close: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "sheet-close",
            r#type: "button",
            "aria-label": "Cerrar",
            onclick: move |_| on_close.call(()),
            "\u{2715}"
        }
    }
}
