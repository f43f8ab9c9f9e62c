use chrono::NaiveDate;
use dioxus::prelude::*;
use shared_types::{amount_or_na, text_or_na, Case, NOT_AVAILABLE};
use shared_ui::components::{Card, CardContent, CardHeader, CardTitle, DetailItem, DetailList};

use crate::format_helpers::{date_or_na, datetime_or_na};

fn text(value: &str) -> String {
    text_or_na(Some(value))
}

fn opt(value: &Option<String>) -> String {
    text_or_na(value.as_deref())
}

fn yes_no(value: Option<bool>) -> String {
    match value {
        Some(true) => "Sí".to_string(),
        Some(false) => "No".to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Label/value rows for the general information card, in display order.
pub fn detail_rows(case: &Case, today: NaiveDate) -> Vec<(&'static str, String)> {
    let titular = if case.ci_titular.trim().is_empty() {
        opt(&case.holder_ci)
    } else {
        text(&case.ci_titular)
    };
    let analyst = case
        .assigned_analyst_name
        .as_deref()
        .filter(|n| !n.trim().is_empty())
        .unwrap_or(&case.assigned_analyst_id);
    let baremo = case
        .baremo_name
        .as_deref()
        .filter(|n| !n.trim().is_empty())
        .or(case.baremo_id.as_deref());
    let age = case
        .patient_age_on(today)
        .map(|a| format!("{a} años"))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    vec![
        ("ID del Caso", text(&case.id)),
        ("Cliente", text(&case.client)),
        ("Fecha", date_or_na(Some(&case.date))),
        ("Nº de Siniestro", text(&case.sinister_no)),
        ("Nº de Identificación", text(&case.id_number)),
        ("Estatus", text(&case.status)),
        ("Tipo de Requerimiento", opt(&case.type_of_requirement)),
        ("Paciente", text(&case.patient_name)),
        ("CI Paciente", text(&case.ci_patient)),
        ("CI Titular", titular),
        ("Fecha de Nacimiento", date_or_na(case.patient_birth_date.as_deref())),
        ("Edad", age),
        ("Género", opt(&case.patient_gender)),
        ("Teléfono", text(&case.patient_phone)),
        ("Otro Teléfono", opt(&case.patient_other_phone)),
        ("Teléfono Fijo", opt(&case.patient_fixed_phone)),
        ("Colectivo", opt(&case.collective)),
        ("Diagnóstico", opt(&case.diagnosis)),
        ("Proveedor", opt(&case.provider)),
        ("Estado", opt(&case.state)),
        ("Ciudad", opt(&case.city)),
        ("Dirección", opt(&case.address)),
        ("Analista Asignado", text(analyst)),
        ("Médico", opt(&case.doctor)),
        ("Horario", datetime_or_na(case.schedule.as_deref())),
        ("Consultorio", opt(&case.consultory)),
        ("Baremo", text_or_na(baremo)),
        ("Costo Clínica", amount_or_na(case.clinic_cost)),
        ("Costo Servicio CGM", amount_or_na(case.cgm_service_cost)),
        ("Monto Total Factura", amount_or_na(case.total_invoice_amount)),
        ("Factura Generada", yes_no(case.invoice_generated)),
        ("Creado por", opt(&case.creator_name)),
        ("Correo del Creador", opt(&case.creator_email)),
        ("Teléfono del Creador", opt(&case.creator_phone)),
    ]
}

#[component]
pub fn DetailsTab(case: Case) -> Element {
    let today = chrono::Local::now().date_naive();
    let rows = detail_rows(&case, today);

    rsx! {
        Card {
            CardHeader { CardTitle { "Información General del Caso" } }
            CardContent {
                DetailList {
                    for (label, value) in rows {
                        DetailItem { key: "{label}", label: "{label}:", value }
                    }
                }
            }
        }
    }
}
