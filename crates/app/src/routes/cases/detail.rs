use api::{sync, CaseBackend, HttpBackend};
use dioxus::prelude::*;
use shared_types::{
    Case, CaseDetailState, CaseModal, CaseTab, CaseUpdate, Document, Notice, PageView,
    Permissions, ALL_TABS,
};
use shared_ui::components::{
    Button, ButtonTone, PageActions, PageHeader, PageTitle, Skeleton, TabList, TabPanel,
    TabTrigger, Tabs,
};
use shared_ui::use_toast;

use super::forms::{
    audit::AuditCaseSheet, documents::DocumentUploadSheet, edit::EditCaseSheet,
    procedure::AddProcedureSheet, schedule::ScheduleAppointmentSheet,
};
use super::tabs::{
    audit::AuditTab, details::DetailsTab, documents::DocumentsTab, history::HistoryTab,
    services::ServicesTab,
};
use crate::notify::notify;

pub const LOADING_MESSAGE: &str = "Cargando caso...";
pub const NOT_FOUND_MESSAGE: &str = "Caso no encontrado.";

pub const EDIT_LABEL: &str = "Editar Caso";
pub const AUDIT_LABEL: &str = "Auditar Caso";
pub const ADD_PROCEDURE_LABEL: &str = "Añadir Procedimiento";
pub const SCHEDULE_LABEL: &str = "Agendar Cita";

/// Case detail page: loads the case and the user's role whenever the id
/// changes, and applies every save to the shared page state.
#[component]
pub fn CaseDetailPage(id: String) -> Element {
    let backend = use_context::<HttpBackend>();
    let toasts = use_toast();
    let on_notice = use_callback(move |notice: Notice| notify(toasts, &notice));

    let detail = use_case_detail(backend, id, on_notice);

    rsx! {
        CaseDetailBody { detail }
    }
}

/// Page state plus the actions that talk to the backend.
#[derive(Clone, Copy, PartialEq)]
pub struct CaseDetailHandle {
    pub state: Signal<CaseDetailState>,
    pub saving: Signal<bool>,
    /// Bumped when a services toggle fails so the table rebuilds its rows
    /// from the model instead of keeping the checkbox the browser flipped.
    pub services_revision: Signal<u32>,
    pub dispatch: Callback<CaseUpdate>,
    pub save_documents: Callback<Vec<Document>>,
    pub toggle_service: Callback<usize>,
}

/// Fetch the case and role whenever `id` changes and expose the save
/// actions. Every notice the flows produce goes to `on_notice`.
pub fn use_case_detail<B>(backend: B, id: String, on_notice: Callback<Notice>) -> CaseDetailHandle
where
    B: CaseBackend + Clone + 'static,
{
    let mut state = use_signal(|| CaseDetailState::new(id.clone()));
    let mut saving = use_signal(|| false);
    let mut services_revision = use_signal(|| 0u32);

    // Last response wins; CaseDetailState drops responses for a stale id.
    let fetch_backend = backend.clone();
    use_effect(use_reactive((&id,), move |(id,)| {
        state.write().begin_fetch(&id);

        let backend = fetch_backend.clone();
        let case_id = id.clone();
        spawn(async move {
            let result = sync::load_case(&backend, &case_id).await;
            let notice = state.write().apply_fetch(&case_id, result);
            if let Some(notice) = notice {
                on_notice.call(notice);
            }
        });

        let backend = fetch_backend.clone();
        spawn(async move {
            let identity = sync::resolve_role(&backend).await;
            state.write().apply_identity(identity);
        });
    }));

    let update_backend = backend.clone();
    let dispatch = use_callback(move |update: CaseUpdate| {
        let backend = update_backend.clone();
        let case_id = state.peek().case_id().to_string();
        spawn(async move {
            saving.set(true);
            let result = sync::dispatch_update(&backend, &case_id, &update).await;
            let notice = state.write().apply_update(&case_id, result);
            saving.set(false);
            on_notice.call(notice);
        });
    });

    let documents_backend = backend.clone();
    let save_documents = use_callback(move |documents: Vec<Document>| {
        let backend = documents_backend.clone();
        let case_id = state.peek().case_id().to_string();
        spawn(async move {
            saving.set(true);
            let result = sync::save_documents(&backend, &case_id, documents).await;
            let notice = state.write().apply_documents_saved(&case_id, result);
            saving.set(false);
            on_notice.call(notice);
        });
    });

    let toggle_backend = backend;
    let toggle_service = use_callback(move |index: usize| {
        let backend = toggle_backend.clone();
        let (case_id, services) = {
            let current = state.peek();
            let services = current
                .case()
                .map(|c| c.services().to_vec())
                .unwrap_or_default();
            (current.case_id().to_string(), services)
        };
        spawn(async move {
            saving.set(true);
            let result =
                sync::toggle_service_attended(&backend, &case_id, &services, index).await;
            saving.set(false);
            match result {
                Ok(services) => {
                    if state.peek().case_id() == case_id {
                        state.write().merge_services(services);
                    }
                }
                Err(err) => {
                    *services_revision.write() += 1;
                    on_notice.call(Notice::error(err.message));
                }
            }
        });
    });

    CaseDetailHandle {
        state,
        saving,
        services_revision,
        dispatch,
        save_documents,
        toggle_service,
    }
}

/// Renders whatever [`CaseDetailHandle::state`] currently holds.
#[component]
pub fn CaseDetailBody(detail: CaseDetailHandle) -> Element {
    let mut state = detail.state;
    let dispatch = detail.dispatch;
    let save_documents = detail.save_documents;
    let toggle_service = detail.toggle_service;

    let page = state.read();
    let permissions = page.permissions();
    let can_upload_report = page.can_upload_medical_report();
    let tab = page.tab();
    let busy = *detail.saving.read();
    let services_revision = *detail.services_revision.read();

    let body = match page.view() {
        PageView::Loading => rsx! {
            PageMessage { loading: true, "{LOADING_MESSAGE}" }
        },
        PageView::Error(message) => rsx! {
            PageMessage { error: true, "{message}" }
        },
        PageView::NotFound => rsx! {
            PageMessage { "{NOT_FOUND_MESSAGE}" }
        },
        PageView::Ready(case) => {
            let case = case.clone();
            rsx! {
                CaseDetailView {
                    case: case.clone(),
                    permissions,
                    can_upload_report,
                    tab,
                    busy,
                    services_revision,
                    on_select_tab: move |tab| state.write().select_tab(tab),
                    on_open: move |modal| state.write().open(modal),
                    on_toggle_service: move |index| toggle_service.call(index),
                }
                CaseModals {
                    case,
                    open: ALL_MODALS.iter().copied().filter(|m| page.is_open(*m)).collect::<Vec<_>>(),
                    saving: busy,
                    on_close: move |modal| state.write().close(modal),
                    on_save: move |update| dispatch.call(update),
                    on_save_documents: move |documents| save_documents.call(documents),
                }
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./detail.css") }
        div { class: "case-detail", {body} }
    }
}

const ALL_MODALS: &[CaseModal] = &[
    CaseModal::EditCase,
    CaseModal::AuditCase,
    CaseModal::AddProcedure,
    CaseModal::ScheduleAppointment,
    CaseModal::PreInvoice,
    CaseModal::MedicalReport,
];

/// Centered status line for the loading, error and not-found states.
#[component]
fn PageMessage(
    #[props(default)] loading: bool,
    #[props(default)] error: bool,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: if error { "case-detail-message error" } else { "case-detail-message" },
            role: if error { "alert" } else { "status" },
            if loading {
                Skeleton { class: "case-detail-skeleton" }
            }
            p { {children} }
        }
    }
}

/// Header, action buttons and tabs for a loaded case.
#[component]
pub fn CaseDetailView(
    case: Case,
    permissions: Permissions,
    can_upload_report: bool,
    tab: CaseTab,
    #[props(default)] busy: bool,
    #[props(default)] services_revision: u32,
    on_select_tab: EventHandler<CaseTab>,
    on_open: EventHandler<CaseModal>,
    on_toggle_service: EventHandler<usize>,
) -> Element {
    rsx! {
        PageHeader {
            PageTitle { "Detalles del Caso: {case.patient_name}" }
            PageActions {
                if permissions.edit_case {
                    Button {
                        tone: ButtonTone::Blue,
                        onclick: move |_| on_open.call(CaseModal::EditCase),
                        "{EDIT_LABEL}"
                    }
                }
                if permissions.audit_case {
                    Button {
                        tone: ButtonTone::Purple,
                        onclick: move |_| on_open.call(CaseModal::AuditCase),
                        "{AUDIT_LABEL}"
                    }
                }
                if permissions.add_procedure {
                    Button {
                        tone: ButtonTone::Green,
                        onclick: move |_| on_open.call(CaseModal::AddProcedure),
                        "{ADD_PROCEDURE_LABEL}"
                    }
                }
                if permissions.schedule_appointment {
                    Button {
                        tone: ButtonTone::Yellow,
                        onclick: move |_| on_open.call(CaseModal::ScheduleAppointment),
                        "{SCHEDULE_LABEL}"
                    }
                }
            }
        }

        Tabs { value: tab.as_str().to_string(),
            TabList {
                for t in ALL_TABS.iter().copied() {
                    TabTrigger {
                        key: "{t.as_str()}",
                        value: t.as_str().to_string(),
                        active: t == tab,
                        on_select: move |key: String| on_select_tab.call(CaseTab::from_key(&key)),
                        "{t.label()}"
                    }
                }
            }
            TabPanel { value: CaseTab::Details.as_str().to_string(), active: tab == CaseTab::Details,
                DetailsTab { case: case.clone() }
            }
            TabPanel { value: CaseTab::Services.as_str().to_string(), active: tab == CaseTab::Services,
                ServicesTab {
                    services: case.services().to_vec(),
                    baremo_id: case.baremo_id.clone(),
                    busy,
                    revision: services_revision,
                    on_toggle: move |index| on_toggle_service.call(index),
                }
            }
            TabPanel { value: CaseTab::Audit.as_str().to_string(), active: tab == CaseTab::Audit,
                AuditTab {
                    results: case.results.clone(),
                    audit_notes: case.audit_notes.clone(),
                    can_upload_report,
                    can_pre_invoice: permissions.pre_invoice,
                    on_open: move |modal| on_open.call(modal),
                }
            }
            TabPanel { value: CaseTab::Documents.as_str().to_string(), active: tab == CaseTab::Documents,
                DocumentsTab { documents: case.documents().to_vec() }
            }
            TabPanel { value: CaseTab::History.as_str().to_string(), active: tab == CaseTab::History,
                HistoryTab {}
            }
        }
    }
}

/// Mounts the sheet for every open modal. Sheets are created fresh on each
/// open, so their fields start from the current case.
#[component]
fn CaseModals(
    case: Case,
    open: Vec<CaseModal>,
    saving: bool,
    on_close: EventHandler<CaseModal>,
    on_save: EventHandler<CaseUpdate>,
    on_save_documents: EventHandler<Vec<Document>>,
) -> Element {
    let is_open = |modal: CaseModal| open.contains(&modal);

    rsx! {
        if is_open(CaseModal::EditCase) {
            EditCaseSheet {
                case: case.clone(),
                saving,
                on_close: move |_| on_close.call(CaseModal::EditCase),
                on_save: move |update| on_save.call(update),
            }
        }
        if is_open(CaseModal::AuditCase) {
            AuditCaseSheet {
                case: case.clone(),
                saving,
                on_close: move |_| on_close.call(CaseModal::AuditCase),
                on_save: move |update| on_save.call(update),
            }
        }
        if is_open(CaseModal::AddProcedure) {
            AddProcedureSheet {
                services: case.services().to_vec(),
                baremo_id: case.baremo_id.clone(),
                saving,
                on_close: move |_| on_close.call(CaseModal::AddProcedure),
                on_save: move |update| on_save.call(update),
            }
        }
        if is_open(CaseModal::ScheduleAppointment) {
            ScheduleAppointmentSheet {
                case: case.clone(),
                saving,
                on_close: move |_| on_close.call(CaseModal::ScheduleAppointment),
                on_save: move |update| on_save.call(update),
            }
        }
        if is_open(CaseModal::MedicalReport) {
            DocumentUploadSheet {
                title: "Subir informe médico y resultados",
                description: "Registra los documentos ya subidos con su nombre y URL.",
                documents: case.documents().to_vec(),
                saving,
                on_close: move |_| on_close.call(CaseModal::MedicalReport),
                on_save: move |documents| on_save_documents.call(documents),
            }
        }
        if is_open(CaseModal::PreInvoice) {
            DocumentUploadSheet {
                title: "Subir prefactura",
                description: "Adjunta la prefactura del caso con su nombre y URL.",
                documents: case.documents().to_vec(),
                saving,
                on_close: move |_| on_close.call(CaseModal::PreInvoice),
                on_save: move |documents| on_save_documents.call(documents),
            }
        }
    }
}
