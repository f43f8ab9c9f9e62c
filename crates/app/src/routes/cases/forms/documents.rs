use dioxus::prelude::*;
use shared_types::{Document, DocumentInput};
use shared_ui::components::{
    Button, ButtonVariant, Form, Input, Sheet, SheetBody, SheetClose, SheetDescription,
    SheetFooter, SheetHeader, SheetTitle,
};

use super::{check, FieldErrors};

/// Validate every row. Errors are keyed `"{row}.{field}"`.
pub fn validate_rows(rows: &[DocumentInput]) -> Result<Vec<Document>, FieldErrors> {
    let mut errors = FieldErrors::new();
    for (index, row) in rows.iter().enumerate() {
        if let Err(row_errors) = check(row) {
            for (field, message) in row_errors {
                errors.insert(format!("{index}.{field}"), message);
            }
        }
    }
    if errors.is_empty() {
        Ok(rows.iter().map(DocumentInput::to_document).collect())
    } else {
        Err(errors)
    }
}

/// Edit the name/url list of already uploaded documents. Used for both the
/// medical report and the pre-invoice.
#[component]
pub fn DocumentUploadSheet(
    title: String,
    description: String,
    documents: Vec<Document>,
    saving: bool,
    on_close: EventHandler<()>,
    on_save: EventHandler<Vec<Document>>,
) -> Element {
    let mut rows = use_signal(|| {
        documents
            .iter()
            .map(|d| DocumentInput {
                name: d.name.clone(),
                url: d.url.clone(),
            })
            .collect::<Vec<_>>()
    });
    let mut errors = use_signal(FieldErrors::new);

    let handle_save = move |_: FormEvent| match validate_rows(&rows.read()) {
        Ok(documents) => {
            errors.set(FieldErrors::new());
            on_save.call(documents);
        }
        Err(field_errors) => errors.set(field_errors),
    };

    let count = rows.read().len();

    rsx! {
        Sheet { open: true, on_close,
            Form { onsubmit: handle_save,
                SheetHeader {
                    SheetTitle { "{title}" }
                    SheetDescription { "{description}" }
                    SheetClose { on_close }
                }
                SheetBody {
                    div { class: "sheet-form",
                        if count == 0 {
                            p { class: "muted", "No hay documentos. Añade uno con el botón de abajo." }
                        }
                        for index in 0..count {
                            fieldset { key: "{index}", class: "document-row",
                                Input {
                                    label: "Nombre *",
                                    value: rows.read()[index].name.clone(),
                                    error: errors.read().get(&format!("{index}.name")).cloned(),
                                    on_input: move |e: FormEvent| rows.write()[index].name = e.value(),
                                }
                                Input {
                                    label: "URL *",
                                    input_type: "url",
                                    placeholder: "https://",
                                    value: rows.read()[index].url.clone(),
                                    error: errors.read().get(&format!("{index}.url")).cloned(),
                                    on_input: move |e: FormEvent| rows.write()[index].url = e.value(),
                                }
                                Button {
                                    variant: ButtonVariant::Ghost,
                                    onclick: move |_| {
                                        rows.write().remove(index);
                                        errors.set(FieldErrors::new());
                                    },
                                    "Quitar"
                                }
                            }
                        }
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: move |_| rows.write().push(DocumentInput::default()),
                            "Añadir documento"
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
                        if saving { "Guardando..." } else { "Guardar Documentos" }
                    }
                }
            }
        }
    }
}
