use dioxus::prelude::*;
use shared_types::{Case, CaseUpdate, EditCaseInput};
use shared_ui::components::{
    Button, ButtonVariant, Form, FormGrid, Input, Sheet, SheetBody, SheetClose, SheetDescription,
    SheetFooter, SheetHeader, SheetTitle,
};

use super::{check, FieldErrors};

fn label(key: &str) -> &'static str {
    match key {
        "patient_name" => "Nombre del Paciente *",
        "patient_phone" => "Teléfono",
        "patient_other_phone" => "Otro Teléfono",
        "patient_fixed_phone" => "Teléfono Fijo",
        "patient_birth_date" => "Fecha de Nacimiento",
        "patient_gender" => "Género",
        "ci_patient" => "CI Paciente",
        "ci_titular" => "CI Titular",
        "client" => "Cliente *",
        "collective" => "Colectivo",
        "sinister_no" => "Nº de Siniestro",
        "id_number" => "Nº de Identificación",
        "status" => "Estatus *",
        "type_of_requirement" => "Tipo de Requerimiento",
        "diagnosis" => "Diagnóstico",
        "provider" => "Proveedor",
        "state" => "Estado",
        "city" => "Ciudad",
        "address" => "Dirección",
        _ => "",
    }
}

fn input_type(key: &str) -> &'static str {
    match key {
        "patient_birth_date" => "date",
        "patient_phone" | "patient_other_phone" | "patient_fixed_phone" => "tel",
        _ => "text",
    }
}

/// General case fields. Only fields that differ from the case are sent.
#[component]
pub fn EditCaseSheet(
    case: Case,
    saving: bool,
    on_close: EventHandler<()>,
    on_save: EventHandler<CaseUpdate>,
) -> Element {
    let initial = use_hook(|| EditCaseInput::from_case(&case));
    let mut input = use_signal(|| initial.clone());
    let mut errors = use_signal(FieldErrors::new);

    let handle_save = move |_: FormEvent| {
        let current = input.read().clone();
        if let Err(field_errors) = check(&current) {
            errors.set(field_errors);
            return;
        }
        errors.set(FieldErrors::new());
        let update = current.changes_from(&initial);
        if update.is_empty() {
            on_close.call(());
            return;
        }
        on_save.call(update);
    };

    rsx! {
        Sheet { open: true, on_close,
            Form { onsubmit: handle_save,
                SheetHeader {
                    SheetTitle { "Editar Caso" }
                    SheetDescription { "Solo se guardan los campos modificados." }
                    SheetClose { on_close }
                }
                SheetBody {
                    FormGrid {
                        for key in EditCaseInput::FIELDS.iter().copied() {
                            Input {
                                key: "{key}",
                                label: label(key).to_string(),
                                input_type: input_type(key).to_string(),
                                value: input.read().get(key).unwrap_or_default().to_string(),
                                error: errors.read().get(key).cloned(),
                                on_input: move |e: FormEvent| input.write().set(key, e.value()),
                            }
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
                        if saving { "Guardando..." } else { "Guardar Cambios" }
                    }
                }
            }
        }
    }
}
