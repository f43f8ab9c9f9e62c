use dioxus::prelude::*;
use dioxus_primitives::toast as prim;

pub use dioxus_primitives::toast::{use_toast, ToastOptions, Toasts};

/// Severity of a toast raised by [`show_toast`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastTone {
    Success,
    Error,
}

#[component]
pub fn ToastProvider(props: prim::ToastProviderProps) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::ToastProvider { ..props }
    }
}

/// Raise a titled toast with a description line.
pub fn show_toast(toasts: Toasts, tone: ToastTone, title: &str, description: &str) {
    let options = ToastOptions::new().description(description.to_string());
    match tone {
        ToastTone::Success => toasts.success(title.to_string(), options),
        ToastTone::Error => toasts.error(title.to_string(), options),
    }
}
