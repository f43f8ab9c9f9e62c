//! State of the case detail page and the transitions driven by fetch and
//! update responses.

use std::collections::HashSet;

use crate::case::{Case, Service};
use crate::error::AppError;
use crate::permissions::{can_upload_medical_report, Permissions};
use crate::role::CurrentUserRole;

/// Shown instead of the case when the backend answers 403.
pub const FORBIDDEN_MESSAGE: &str = "No tienes permiso para ver este caso.";
pub const UPDATE_SUCCESS_MESSAGE: &str = "Caso actualizado correctamente.";
pub const DOCUMENTS_SUCCESS_MESSAGE: &str = "Documentos del caso actualizados correctamente.";
pub const UPDATE_FAILURE_MESSAGE: &str = "Failed to update case.";
pub const FETCH_FAILURE_MESSAGE: &str = "Failed to load case details.";

// ── Tabs ────────────────────────────────────────────────────────────

/// Sections of the case detail page. Exactly one is selected at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseTab {
    #[default]
    Details,
    Services,
    Audit,
    Documents,
    History,
}

/// All tabs in display order.
pub const ALL_TABS: &[CaseTab] = &[
    CaseTab::Details,
    CaseTab::Services,
    CaseTab::Audit,
    CaseTab::Documents,
    CaseTab::History,
];

impl CaseTab {
    /// Key used as the tab's DOM value.
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseTab::Details => "details",
            CaseTab::Services => "services",
            CaseTab::Audit => "audit",
            CaseTab::Documents => "documents",
            CaseTab::History => "history",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CaseTab::Details => "Detalles",
            CaseTab::Services => "Servicios Atendidos",
            CaseTab::Audit => "Auditoría",
            CaseTab::Documents => "Documentos",
            CaseTab::History => "Historial",
        }
    }

    /// Parse a tab key, falling back to Details.
    pub fn from_key(s: &str) -> Self {
        match s {
            "services" => CaseTab::Services,
            "audit" => CaseTab::Audit,
            "documents" => CaseTab::Documents,
            "history" => CaseTab::History,
            _ => CaseTab::Details,
        }
    }
}

// ── Modals ──────────────────────────────────────────────────────────

/// Modal forms the detail page can open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseModal {
    EditCase,
    AuditCase,
    AddProcedure,
    ScheduleAppointment,
    PreInvoice,
    MedicalReport,
}

// ── Notices ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeVariant {
    Success,
    Error,
}

/// A transient user notification produced by a state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
}

impl Notice {
    pub fn success(description: impl Into<String>) -> Self {
        Self {
            title: "Éxito".to_string(),
            description: description.into(),
            variant: NoticeVariant::Success,
        }
    }

    pub fn error(description: impl Into<String>) -> Self {
        Self {
            title: "Error".to_string(),
            description: description.into(),
            variant: NoticeVariant::Error,
        }
    }
}

// ── Page state ──────────────────────────────────────────────────────

/// What the page should render right now.
#[derive(Debug, PartialEq)]
pub enum PageView<'a> {
    Loading,
    Error(&'a str),
    NotFound,
    Ready(&'a Case),
}

/// Client-side copy of one case plus the presentation state around it.
///
/// The server owns the record: `case` is only ever replaced wholesale by a
/// fetch or update response, except for [`CaseDetailState::merge_services`].
#[derive(Debug, Clone, PartialEq)]
pub struct CaseDetailState {
    case_id: String,
    case: Option<Case>,
    loading: bool,
    error: Option<String>,
    identity: CurrentUserRole,
    tab: CaseTab,
    open_modals: HashSet<CaseModal>,
}

impl CaseDetailState {
    pub fn new(case_id: impl Into<String>) -> Self {
        Self {
            case_id: case_id.into(),
            case: None,
            loading: true,
            error: None,
            identity: CurrentUserRole::anonymous(),
            tab: CaseTab::default(),
            open_modals: HashSet::new(),
        }
    }

    pub fn case_id(&self) -> &str {
        &self.case_id
    }

    pub fn case(&self) -> Option<&Case> {
        self.case.as_ref()
    }

    pub fn identity(&self) -> &CurrentUserRole {
        &self.identity
    }

    pub fn tab(&self) -> CaseTab {
        self.tab
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn view(&self) -> PageView<'_> {
        if self.loading {
            return PageView::Loading;
        }
        if let Some(err) = &self.error {
            return PageView::Error(err);
        }
        match &self.case {
            Some(case) => PageView::Ready(case),
            None => PageView::NotFound,
        }
    }

    /// Mark a fetch for `case_id` as started.
    pub fn begin_fetch(&mut self, case_id: &str) {
        if self.case_id != case_id {
            self.case_id = case_id.to_string();
            self.case = None;
            self.open_modals.clear();
        }
        self.loading = true;
        self.error = None;
    }

    /// Apply the outcome of fetching `requested_id`.
    ///
    /// Responses for an id other than the current one are dropped. Returns
    /// the notice to show, if any: permission errors are shown inline only.
    pub fn apply_fetch(
        &mut self,
        requested_id: &str,
        result: Result<Case, AppError>,
    ) -> Option<Notice> {
        if requested_id != self.case_id {
            return None;
        }
        self.loading = false;
        match result {
            Ok(case) => {
                self.case = Some(case);
                self.error = None;
                None
            }
            Err(err) if err.is_forbidden() => {
                self.error = Some(FORBIDDEN_MESSAGE.to_string());
                None
            }
            Err(err) => {
                let message = if err.message.is_empty() {
                    FETCH_FAILURE_MESSAGE.to_string()
                } else {
                    err.message
                };
                self.error = Some(message.clone());
                Some(Notice::error(message))
            }
        }
    }

    pub fn apply_identity(&mut self, identity: CurrentUserRole) {
        self.identity = identity;
    }

    pub fn permissions(&self) -> Permissions {
        Permissions::for_role(self.identity.user_role())
    }

    pub fn can_upload_medical_report(&self) -> bool {
        self.case
            .as_ref()
            .map(|case| can_upload_medical_report(&self.identity, case))
            .unwrap_or(false)
    }

    pub fn select_tab(&mut self, tab: CaseTab) {
        self.tab = tab;
    }

    pub fn open(&mut self, modal: CaseModal) {
        self.open_modals.insert(modal);
    }

    pub fn close(&mut self, modal: CaseModal) {
        self.open_modals.remove(&modal);
    }

    pub fn is_open(&self, modal: CaseModal) -> bool {
        self.open_modals.contains(&modal)
    }

    pub fn has_open_modal(&self) -> bool {
        !self.open_modals.is_empty()
    }

    /// Apply the outcome of `PUT /api/cases` for `requested_id`.
    ///
    /// Success replaces the record with the server's copy and closes every
    /// modal. Failure leaves the record and the modals exactly as they were.
    pub fn apply_update(&mut self, requested_id: &str, result: Result<Case, AppError>) -> Notice {
        self.apply_update_with(requested_id, result, UPDATE_SUCCESS_MESSAGE)
    }

    /// Same as [`apply_update`](Self::apply_update) for a documents-only save.
    pub fn apply_documents_saved(
        &mut self,
        requested_id: &str,
        result: Result<Case, AppError>,
    ) -> Notice {
        self.apply_update_with(requested_id, result, DOCUMENTS_SUCCESS_MESSAGE)
    }

    fn apply_update_with(
        &mut self,
        requested_id: &str,
        result: Result<Case, AppError>,
        success_message: &str,
    ) -> Notice {
        match result {
            Ok(case) => {
                if requested_id == self.case_id {
                    self.case = Some(case);
                    self.open_modals.clear();
                }
                Notice::success(success_message)
            }
            Err(err) => {
                let message = if err.message.is_empty() {
                    UPDATE_FAILURE_MESSAGE.to_string()
                } else {
                    err.message
                };
                Notice::error(message)
            }
        }
    }

    /// Replace the services of the current case with `services`.
    pub fn merge_services(&mut self, services: Vec<Service>) {
        if let Some(case) = self.case.as_mut() {
            case.services = Some(services);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_case() -> Case {
        Case {
            id: "c-1".into(),
            patient_name: "Ana Rojas".into(),
            status: "Pendiente".into(),
            assigned_analyst_id: "u-1".into(),
            ..Case::default()
        }
    }

    fn loaded_state() -> CaseDetailState {
        let mut state = CaseDetailState::new("c-1");
        state.begin_fetch("c-1");
        state.apply_fetch("c-1", Ok(sample_case()));
        state
    }

    #[test]
    fn starts_loading_on_details_tab() {
        let state = CaseDetailState::new("c-1");
        assert_eq!(state.view(), PageView::Loading);
        assert_eq!(state.tab(), CaseTab::Details);
        assert!(!state.has_open_modal());
    }

    #[test]
    fn successful_fetch_makes_case_ready() {
        let state = loaded_state();
        assert_eq!(state.view(), PageView::Ready(&sample_case()));
    }

    #[test]
    fn forbidden_fetch_shows_permission_message_without_notice() {
        let mut state = CaseDetailState::new("c-1");
        let notice = state.apply_fetch("c-1", Err(AppError::forbidden("Forbidden")));
        assert_eq!(notice, None);
        assert_eq!(state.view(), PageView::Error(FORBIDDEN_MESSAGE));
    }

    #[test]
    fn generic_fetch_failure_notifies() {
        let mut state = CaseDetailState::new("c-1");
        let notice = state
            .apply_fetch(
                "c-1",
                Err(AppError::internal("Failed to fetch case: Internal Server Error")),
            )
            .unwrap();
        assert_eq!(notice.variant, NoticeVariant::Error);
        assert_eq!(notice.description, "Failed to fetch case: Internal Server Error");
        assert_eq!(
            state.view(),
            PageView::Error("Failed to fetch case: Internal Server Error")
        );
    }

    #[test]
    fn stale_fetch_response_is_ignored() {
        let mut state = loaded_state();
        state.begin_fetch("c-2");
        let notice = state.apply_fetch("c-1", Ok(sample_case()));
        assert_eq!(notice, None);
        assert_eq!(state.view(), PageView::Loading);
    }

    #[test]
    fn refetch_clears_previous_error() {
        let mut state = CaseDetailState::new("c-1");
        state.apply_fetch("c-1", Err(AppError::forbidden("")));
        state.begin_fetch("c-1");
        assert_eq!(state.error(), None);
        assert!(state.is_loading());
    }

    #[test]
    fn successful_update_replaces_record_and_closes_every_modal() {
        let mut state = loaded_state();
        state.open(CaseModal::EditCase);
        state.open(CaseModal::MedicalReport);

        let server_copy = Case {
            status: "Auditado".into(),
            audit_notes: Some("OK".into()),
            ..sample_case()
        };
        let notice = state.apply_update("c-1", Ok(server_copy.clone()));

        assert_eq!(notice, Notice::success(UPDATE_SUCCESS_MESSAGE));
        assert_eq!(state.case(), Some(&server_copy));
        assert!(!state.has_open_modal());
    }

    #[test]
    fn failed_update_leaves_record_and_modals_untouched() {
        let mut state = loaded_state();
        state.open(CaseModal::AuditCase);
        let before = state.clone();

        let notice = state.apply_update("c-1", Err(AppError::bad_request("Estado inválido")));

        assert_eq!(notice, Notice::error("Estado inválido"));
        assert_eq!(state, before);
        assert!(state.is_open(CaseModal::AuditCase));
    }

    #[test]
    fn failed_update_without_message_uses_fallback() {
        let mut state = loaded_state();
        let notice = state.apply_update("c-1", Err(AppError::internal("")));
        assert_eq!(notice.description, UPDATE_FAILURE_MESSAGE);
    }

    #[test]
    fn documents_save_uses_its_own_success_message() {
        let mut state = loaded_state();
        state.open(CaseModal::PreInvoice);
        let notice = state.apply_documents_saved("c-1", Ok(sample_case()));
        assert_eq!(notice.description, DOCUMENTS_SUCCESS_MESSAGE);
        assert!(!state.is_open(CaseModal::PreInvoice));
    }

    #[test]
    fn switching_tabs_touches_nothing_else() {
        let mut state = loaded_state();
        let before = state.clone();
        for tab in ALL_TABS {
            state.select_tab(*tab);
            assert_eq!(state.tab(), *tab);
        }
        state.select_tab(CaseTab::Details);
        assert_eq!(state, before);
    }

    #[test]
    fn tab_keys_roundtrip() {
        for tab in ALL_TABS {
            assert_eq!(CaseTab::from_key(tab.as_str()), *tab);
        }
        assert_eq!(CaseTab::from_key("bogus"), CaseTab::Details);
    }

    #[test]
    fn merge_services_replaces_only_services() {
        let mut state = loaded_state();
        let services = vec![Service {
            name: "Consulta".into(),
            service_type: "consulta".into(),
            amount: 40.0,
            attended: true,
        }];
        state.merge_services(services.clone());
        let case = state.case().unwrap();
        assert_eq!(case.services(), services.as_slice());
        assert_eq!(case.patient_name, "Ana Rojas");
    }

    #[test]
    fn permissions_follow_identity() {
        let mut state = loaded_state();
        assert_eq!(state.permissions(), Permissions::default());
        assert!(!state.can_upload_medical_report());

        state.apply_identity(CurrentUserRole {
            role: Some("Analista Concertado".into()),
            user_id: Some("u-1".into()),
        });
        assert!(state.permissions().add_procedure);
        assert!(state.can_upload_medical_report());
    }
}
