use dioxus::prelude::*;
use shared_types::{AppointmentInput, Case, CaseUpdate};
use shared_ui::components::{
    Button, ButtonVariant, Form, Input, Sheet, SheetBody, SheetClose, SheetDescription,
    SheetFooter, SheetHeader, SheetTitle,
};

use super::{check, FieldErrors};

/// `datetime-local` inputs want `YYYY-MM-DDTHH:MM`; trim anything longer.
fn to_datetime_local(value: &str) -> String {
    value.get(..16).unwrap_or(value).to_string()
}

#[component]
pub fn ScheduleAppointmentSheet(
    case: Case,
    saving: bool,
    on_close: EventHandler<()>,
    on_save: EventHandler<CaseUpdate>,
) -> Element {
    let mut input = use_signal(|| {
        let mut input = AppointmentInput::from_case(&case);
        input.schedule = to_datetime_local(&input.schedule);
        input
    });
    let mut errors = use_signal(FieldErrors::new);

    let handle_save = move |_: FormEvent| {
        let current = input.read().clone();
        match check(&current) {
            Ok(()) => {
                errors.set(FieldErrors::new());
                on_save.call(current.to_update());
            }
            Err(field_errors) => errors.set(field_errors),
        }
    };

    rsx! {
        Sheet { open: true, on_close,
            Form { onsubmit: handle_save,
                SheetHeader {
                    SheetTitle { "Agendar Cita" }
                    SheetDescription { "Médico, fecha y consultorio de la cita del paciente." }
                    SheetClose { on_close }
                }
                SheetBody {
                    div { class: "sheet-form",
                        Input {
                            label: "Médico *",
                            value: input.read().doctor.clone(),
                            error: errors.read().get("doctor").cloned(),
                            on_input: move |e: FormEvent| input.write().doctor = e.value(),
                        }
                        Input {
                            label: "Fecha y Hora *",
                            input_type: "datetime-local",
                            value: input.read().schedule.clone(),
                            error: errors.read().get("schedule").cloned(),
                            on_input: move |e: FormEvent| input.write().schedule = e.value(),
                        }
                        Input {
                            label: "Consultorio *",
                            value: input.read().consultory.clone(),
                            error: errors.read().get("consultory").cloned(),
                            on_input: move |e: FormEvent| input.write().consultory = e.value(),
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
                        if saving { "Guardando..." } else { "Agendar" }
                    }
                }
            }
        }
    }
}
