use dioxus::prelude::*;
use shared_types::{text_or_na, CaseUpdate, ProcedureInput, Service};
use shared_ui::components::{
    Button, ButtonVariant, Form, Input, Sheet, SheetBody, SheetClose, SheetDescription,
    SheetFooter, SheetHeader, SheetTitle,
};

use super::{check, FieldErrors};

/// Parse the amount field. Blank counts as zero; commas are accepted as the
/// decimal separator.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(0.0);
    }
    raw.replace(',', ".").parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Append a procedure to the case's services. The whole list is sent.
#[component]
pub fn AddProcedureSheet(
    services: Vec<Service>,
    baremo_id: Option<String>,
    saving: bool,
    on_close: EventHandler<()>,
    on_save: EventHandler<CaseUpdate>,
) -> Element {
    let mut name = use_signal(String::new);
    let mut service_type = use_signal(String::new);
    let mut amount = use_signal(String::new);
    let mut attended = use_signal(|| false);
    let mut errors = use_signal(FieldErrors::new);

    let baremo = text_or_na(baremo_id.as_deref());

    let handle_save = move |_: FormEvent| {
        let Some(parsed) = parse_amount(&amount.read()) else {
            let mut field_errors = FieldErrors::new();
            field_errors.insert("amount".into(), "El monto debe ser un número".into());
            errors.set(field_errors);
            return;
        };
        let input = ProcedureInput {
            name: name.read().clone(),
            service_type: service_type.read().clone(),
            amount: parsed,
            attended: *attended.read(),
        };
        match check(&input) {
            Ok(()) => {
                errors.set(FieldErrors::new());
                on_save.call(input.append_to(&services));
            }
            Err(field_errors) => errors.set(field_errors),
        }
    };

    rsx! {
        Sheet { open: true, on_close,
            Form { onsubmit: handle_save,
                SheetHeader {
                    SheetTitle { "Añadir Procedimiento" }
                    SheetDescription { "Baremo: {baremo}" }
                    SheetClose { on_close }
                }
                SheetBody {
                    div { class: "sheet-form",
                        Input {
                            label: "Procedimiento *",
                            value: name.read().clone(),
                            error: errors.read().get("name").cloned(),
                            on_input: move |e: FormEvent| name.set(e.value()),
                        }
                        Input {
                            label: "Tipo *",
                            value: service_type.read().clone(),
                            error: errors.read().get("service_type").cloned(),
                            on_input: move |e: FormEvent| service_type.set(e.value()),
                        }
                        Input {
                            label: "Monto",
                            input_type: "number",
                            value: amount.read().clone(),
                            placeholder: "0.00",
                            error: errors.read().get("amount").cloned(),
                            on_input: move |e: FormEvent| amount.set(e.value()),
                        }
                        label { class: "checkbox-field",
                            input {
                                r#type: "checkbox",
                                checked: *attended.read(),
                                onchange: move |e: FormEvent| attended.set(e.checked()),
                            }
                            "Atendido"
                        }
                    }
                }
                SheetFooter {
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| on_close.call(()),
                        "Cancelar"
                    }
                    Button { button_type: "submit", disabled: saving,
                        if saving { "Guardando..." } else { "Añadir" }
                    }
                }
            }
        }
    }
}
