use dioxus::prelude::*;
use shared_types::{text_or_na, CaseModal};
use shared_ui::components::{Button, ButtonTone, Card, CardContent, CardHeader, CardTitle};

pub const UPLOAD_REPORT_LABEL: &str = "Subir informe medico y resultados";
pub const UPLOAD_PRE_INVOICE_LABEL: &str = "Subir prefactura";

#[component]
pub fn AuditTab(
    results: Option<String>,
    audit_notes: Option<String>,
    can_upload_report: bool,
    can_pre_invoice: bool,
    on_open: EventHandler<CaseModal>,
) -> Element {
    let results = text_or_na(results.as_deref());
    let audit_notes = text_or_na(audit_notes.as_deref());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./tabs.css") }
        Card {
            CardHeader { CardTitle { "Notas de Auditoría y Resultados" } }
            CardContent {
                div { class: "audit-grid",
                    div {
                        h3 { class: "audit-heading", "Resultados:" }
                        p { class: "muted", "{results}" }
                    }
                    div {
                        h3 { class: "audit-heading", "Notas de Auditoría:" }
                        p { class: "muted", "{audit_notes}" }
                    }
                    div { class: "audit-actions",
                        if can_upload_report {
                            Button {
                                tone: ButtonTone::Orange,
                                onclick: move |_| on_open.call(CaseModal::MedicalReport),
                                "{UPLOAD_REPORT_LABEL}"
                            }
                        }
                        if can_pre_invoice {
                            Button {
                                tone: ButtonTone::Indigo,
                                onclick: move |_| on_open.call(CaseModal::PreInvoice),
                                "{UPLOAD_PRE_INVOICE_LABEL}"
                            }
                        }
                    }
                }
            }
        }
    }
}
