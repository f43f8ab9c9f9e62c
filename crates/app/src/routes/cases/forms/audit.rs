use dioxus::prelude::*;
use shared_types::{AuditInput, Case, CaseUpdate};
use shared_ui::components::{
    Button, ButtonVariant, Form, Input, Sheet, SheetBody, SheetClose, SheetDescription,
    SheetFooter, SheetHeader, SheetTitle, Textarea,
};

use super::{check, FieldErrors};

#[component]
pub fn AuditCaseSheet(
    case: Case,
    saving: bool,
    on_close: EventHandler<()>,
    on_save: EventHandler<CaseUpdate>,
) -> Element {
    let initial = use_hook(|| AuditInput::from_case(&case));
    let mut input = use_signal(|| initial.clone());
    let mut errors = use_signal(FieldErrors::new);

    let handle_save = move |_: FormEvent| {
        let current = input.read().clone();
        match check(&current) {
            Ok(()) => {
                errors.set(FieldErrors::new());
                on_save.call(current.to_update(&initial));
            }
            Err(field_errors) => errors.set(field_errors),
        }
    };

    rsx! {
        Sheet { open: true, on_close,
            Form { onsubmit: handle_save,
                SheetHeader {
                    SheetTitle { "Auditar Caso" }
                    SheetDescription { "Registra los resultados y las notas de auditoría." }
                    SheetClose { on_close }
                }
                SheetBody {
                    div { class: "sheet-form",
                        Textarea {
                            label: "Resultados",
                            value: input.read().results.clone(),
                            on_input: move |e: FormEvent| input.write().results = e.value(),
                        }
                        Textarea {
                            label: "Notas de Auditoría *",
                            rows: 6,
                            value: input.read().audit_notes.clone(),
                            error: errors.read().get("audit_notes").cloned(),
                            on_input: move |e: FormEvent| input.write().audit_notes = e.value(),
                        }
                        Input {
                            label: "Estatus *",
                            value: input.read().status.clone(),
                            error: errors.read().get("status").cloned(),
                            on_input: move |e: FormEvent| input.write().status = e.value(),
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
                        if saving { "Guardando..." } else { "Guardar Auditoría" }
                    }
                }
            }
        }
    }
}
