use dioxus::prelude::*;
use shared_types::{format_amount, text_or_na, Service};
use shared_ui::components::{
    Card, CardContent, CardHeader, CardTitle, DataTable, DataTableBody, DataTableCell,
    DataTableColumn, DataTableEmpty, DataTableHeader, DataTableRow,
};

pub const NO_SERVICES_MESSAGE: &str = "No hay servicios registrados para este caso.";

/// Attended-services table. Toggling a row reports its index; the page
/// persists the change and merges the services the server returns. Rows are
/// keyed on `revision`, so bumping it remounts every checkbox from `services`.
#[component]
pub fn ServicesTab(
    services: Vec<Service>,
    baremo_id: Option<String>,
    #[props(default)] busy: bool,
    #[props(default)] revision: u32,
    on_toggle: EventHandler<usize>,
) -> Element {
    let total: f64 = services.iter().map(|s| s.amount).sum();
    let attended: f64 = services.iter().filter(|s| s.attended).map(|s| s.amount).sum();
    let baremo = text_or_na(baremo_id.as_deref());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./tabs.css") }
        Card {
            CardHeader { CardTitle { "Servicios Atendidos" } }
            CardContent {
                p { class: "services-baremo muted", "Baremo: {baremo}" }
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Nombre" }
                        DataTableColumn { "Tipo" }
                        DataTableColumn { "Monto" }
                        DataTableColumn { "Atendido" }
                    }
                    DataTableBody {
                        if services.is_empty() {
                            DataTableEmpty { colspan: 4, "{NO_SERVICES_MESSAGE}" }
                        }
                        for (index, service) in services.iter().enumerate() {
                            DataTableRow { key: "{revision}-{index}",
                                DataTableCell { "{service.name}" }
                                DataTableCell { "{service.service_type}" }
                                DataTableCell { numeric: true, {format_amount(service.amount)} }
                                DataTableCell {
                                    input {
                                        r#type: "checkbox",
                                        class: "service-attended",
                                        "aria-label": "Atendido: {service.name}",
                                        checked: service.attended,
                                        disabled: busy,
                                        onchange: move |_| on_toggle.call(index),
                                    }
                                }
                            }
                        }
                    }
                }
                if !services.is_empty() {
                    div { class: "services-totals",
                        span { "Total: {format_amount(total)}" }
                        span { "Total atendido: {format_amount(attended)}" }
                    }
                }
            }
        }
    }
}
