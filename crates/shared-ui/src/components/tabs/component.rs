use dioxus::prelude::*;

/// Controlled tab strip. The caller owns the selected key and updates it
/// from each [`TabTrigger`]'s `on_select`; panels are shown with [`TabPanel`].
#[component]
pub fn Tabs(
    /// Key of the selected tab.
    value: String,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "tabs", "data-value": "{value}", {children} }
    }
}

#[component]
pub fn TabList(children: Element) -> Element {
    rsx! {
        div { class: "tab-list", role: "tablist", {children} }
    }
}

/// A single tab button. Clicking it reports `value` through `on_select`.
#[component]
pub fn TabTrigger(
    value: String,
    active: bool,
    on_select: EventHandler<String>,
    children: Element,
) -> Element {
    let key = value.clone();
    rsx! {
        button {
            class: "tab-trigger",
            r#type: "button",
            role: "tab",
            id: "tab-{value}",
            "aria-selected": if active { "true" } else { "false" },
            "data-state": if active { "active" } else { "inactive" },
            onclick: move |_| on_select.call(key.clone()),
            {children}
        }
    }
}

/// Panel for one tab. Renders nothing unless `active`.
#[component]
pub fn TabPanel(value: String, active: bool, children: Element) -> Element {
    if !active {
        return rsx! {};
    }

    rsx! {
        div {
            class: "tab-content",
            role: "tabpanel",
            "aria-labelledby": "tab-{value}",
            {children}
        }
    }
}
