use serde::{Deserialize, Serialize};

use crate::case::{Case, CaseUpdate, Document, Service};

fn trimmed(s: &str) -> Option<String> {
    Some(s.trim().to_string())
}

/// Include `current` in an update only when it differs from `initial`.
/// A cleared field is sent as an empty string.
fn changed(current: &str, initial: &str) -> Option<String> {
    if current.trim() != initial.trim() {
        Some(current.trim().to_string())
    } else {
        None
    }
}

/// Required text: whitespace alone does not count.
#[cfg(feature = "validation")]
fn not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        Err(validator::ValidationError::new("required"))
    } else {
        Ok(())
    }
}

// ── Edit case ───────────────────────────────────────────────────────

/// Editable general fields of a case.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct EditCaseInput {
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = "not_blank", message = "El nombre del paciente es obligatorio"))
    )]
    pub patient_name: String,
    pub patient_phone: String,
    pub patient_other_phone: String,
    pub patient_fixed_phone: String,
    pub patient_birth_date: String,
    pub patient_gender: String,
    pub ci_patient: String,
    pub ci_titular: String,
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = "not_blank", message = "El cliente es obligatorio"))
    )]
    pub client: String,
    pub collective: String,
    pub sinister_no: String,
    pub id_number: String,
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = "not_blank", message = "El estatus es obligatorio"))
    )]
    pub status: String,
    pub type_of_requirement: String,
    pub diagnosis: String,
    pub provider: String,
    pub state: String,
    pub city: String,
    pub address: String,
}

impl EditCaseInput {
    pub fn from_case(case: &Case) -> Self {
        let opt = |v: &Option<String>| v.clone().unwrap_or_default();
        Self {
            patient_name: case.patient_name.clone(),
            patient_phone: case.patient_phone.clone(),
            patient_other_phone: opt(&case.patient_other_phone),
            patient_fixed_phone: opt(&case.patient_fixed_phone),
            patient_birth_date: opt(&case.patient_birth_date),
            patient_gender: opt(&case.patient_gender),
            ci_patient: case.ci_patient.clone(),
            ci_titular: case.ci_titular.clone(),
            client: case.client.clone(),
            collective: opt(&case.collective),
            sinister_no: case.sinister_no.clone(),
            id_number: case.id_number.clone(),
            status: case.status.clone(),
            type_of_requirement: opt(&case.type_of_requirement),
            diagnosis: opt(&case.diagnosis),
            provider: opt(&case.provider),
            state: opt(&case.state),
            city: opt(&case.city),
            address: opt(&case.address),
        }
    }

    /// Field keys in form order.
    pub const FIELDS: &'static [&'static str] = &[
        "patient_name",
        "patient_phone",
        "patient_other_phone",
        "patient_fixed_phone",
        "patient_birth_date",
        "patient_gender",
        "ci_patient",
        "ci_titular",
        "client",
        "collective",
        "sinister_no",
        "id_number",
        "status",
        "type_of_requirement",
        "diagnosis",
        "provider",
        "state",
        "city",
        "address",
    ];

    /// Current value of the field named `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        let value = match key {
            "patient_name" => &self.patient_name,
            "patient_phone" => &self.patient_phone,
            "patient_other_phone" => &self.patient_other_phone,
            "patient_fixed_phone" => &self.patient_fixed_phone,
            "patient_birth_date" => &self.patient_birth_date,
            "patient_gender" => &self.patient_gender,
            "ci_patient" => &self.ci_patient,
            "ci_titular" => &self.ci_titular,
            "client" => &self.client,
            "collective" => &self.collective,
            "sinister_no" => &self.sinister_no,
            "id_number" => &self.id_number,
            "status" => &self.status,
            "type_of_requirement" => &self.type_of_requirement,
            "diagnosis" => &self.diagnosis,
            "provider" => &self.provider,
            "state" => &self.state,
            "city" => &self.city,
            "address" => &self.address,
            _ => return None,
        };
        Some(value.as_str())
    }

    /// Set the field named `key`. Unknown keys are ignored.
    pub fn set(&mut self, key: &str, value: String) {
        let slot = match key {
            "patient_name" => &mut self.patient_name,
            "patient_phone" => &mut self.patient_phone,
            "patient_other_phone" => &mut self.patient_other_phone,
            "patient_fixed_phone" => &mut self.patient_fixed_phone,
            "patient_birth_date" => &mut self.patient_birth_date,
            "patient_gender" => &mut self.patient_gender,
            "ci_patient" => &mut self.ci_patient,
            "ci_titular" => &mut self.ci_titular,
            "client" => &mut self.client,
            "collective" => &mut self.collective,
            "sinister_no" => &mut self.sinister_no,
            "id_number" => &mut self.id_number,
            "status" => &mut self.status,
            "type_of_requirement" => &mut self.type_of_requirement,
            "diagnosis" => &mut self.diagnosis,
            "provider" => &mut self.provider,
            "state" => &mut self.state,
            "city" => &mut self.city,
            "address" => &mut self.address,
            _ => return,
        };
        *slot = value;
    }

    /// The partial update carrying only the fields that differ from
    /// `initial`.
    pub fn changes_from(&self, initial: &EditCaseInput) -> CaseUpdate {
        CaseUpdate {
            patient_name: changed(&self.patient_name, &initial.patient_name),
            patient_phone: changed(&self.patient_phone, &initial.patient_phone),
            patient_other_phone: changed(&self.patient_other_phone, &initial.patient_other_phone),
            patient_fixed_phone: changed(&self.patient_fixed_phone, &initial.patient_fixed_phone),
            patient_birth_date: changed(&self.patient_birth_date, &initial.patient_birth_date),
            patient_gender: changed(&self.patient_gender, &initial.patient_gender),
            ci_patient: changed(&self.ci_patient, &initial.ci_patient),
            ci_titular: changed(&self.ci_titular, &initial.ci_titular),
            client: changed(&self.client, &initial.client),
            collective: changed(&self.collective, &initial.collective),
            sinister_no: changed(&self.sinister_no, &initial.sinister_no),
            id_number: changed(&self.id_number, &initial.id_number),
            status: changed(&self.status, &initial.status),
            type_of_requirement: changed(&self.type_of_requirement, &initial.type_of_requirement),
            diagnosis: changed(&self.diagnosis, &initial.diagnosis),
            provider: changed(&self.provider, &initial.provider),
            state: changed(&self.state, &initial.state),
            city: changed(&self.city, &initial.city),
            address: changed(&self.address, &initial.address),
            ..CaseUpdate::default()
        }
    }
}

// ── Audit ───────────────────────────────────────────────────────────

/// Medical auditor's verdict on a case.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct AuditInput {
    pub results: String,
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = "not_blank", message = "Las notas de auditoría son obligatorias"))
    )]
    pub audit_notes: String,
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = "not_blank", message = "El estatus es obligatorio"))
    )]
    pub status: String,
}

impl AuditInput {
    pub fn from_case(case: &Case) -> Self {
        Self {
            results: case.results.clone().unwrap_or_default(),
            audit_notes: case.audit_notes.clone().unwrap_or_default(),
            status: case.status.clone(),
        }
    }

    /// Notes and status are always sent; results only when edited, so
    /// clearing them is possible.
    pub fn to_update(&self, initial: &AuditInput) -> CaseUpdate {
        CaseUpdate {
            results: changed(&self.results, &initial.results),
            audit_notes: trimmed(&self.audit_notes),
            status: trimmed(&self.status),
            ..CaseUpdate::default()
        }
    }
}

// ── Procedures ──────────────────────────────────────────────────────

/// A new procedure to append to a case's services.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct ProcedureInput {
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = "not_blank", message = "El nombre del procedimiento es obligatorio"))
    )]
    pub name: String,
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = "not_blank", message = "El tipo es obligatorio"))
    )]
    pub service_type: String,
    #[cfg_attr(
        feature = "validation",
        validate(range(min = 0.0, message = "El monto no puede ser negativo"))
    )]
    pub amount: f64,
    pub attended: bool,
}

impl ProcedureInput {
    pub fn to_service(&self) -> Service {
        Service {
            name: self.name.trim().to_string(),
            service_type: self.service_type.trim().to_string(),
            amount: self.amount,
            attended: self.attended,
        }
    }

    /// The full services list with this procedure appended, as an update.
    pub fn append_to(&self, current: &[Service]) -> CaseUpdate {
        let mut services = current.to_vec();
        services.push(self.to_service());
        CaseUpdate::services(services)
    }
}

// ── Appointments ────────────────────────────────────────────────────

/// Scheduling details for the patient's appointment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct AppointmentInput {
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = "not_blank", message = "El médico es obligatorio"))
    )]
    pub doctor: String,
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = "not_blank", message = "La fecha y hora son obligatorias"))
    )]
    pub schedule: String,
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = "not_blank", message = "El consultorio es obligatorio"))
    )]
    pub consultory: String,
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = "not_blank", message = "El estatus es obligatorio"))
    )]
    pub status: String,
}

impl AppointmentInput {
    pub fn from_case(case: &Case) -> Self {
        Self {
            doctor: case.doctor.clone().unwrap_or_default(),
            schedule: case.schedule.clone().unwrap_or_default(),
            consultory: case.consultory.clone().unwrap_or_default(),
            status: case.status.clone(),
        }
    }

    pub fn to_update(&self) -> CaseUpdate {
        CaseUpdate {
            doctor: trimmed(&self.doctor),
            schedule: trimmed(&self.schedule),
            consultory: trimmed(&self.consultory),
            status: trimmed(&self.status),
            ..CaseUpdate::default()
        }
    }
}

// ── Documents ───────────────────────────────────────────────────────

/// A name/url pair referencing an already uploaded file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct DocumentInput {
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = "not_blank", message = "El nombre del documento es obligatorio"))
    )]
    pub name: String,
    #[cfg_attr(
        feature = "validation",
        validate(
            url(message = "La URL del documento no es válida"),
            custom(function = "http_scheme", message = "La URL debe comenzar con http:// o https://")
        )
    )]
    pub url: String,
}

/// Only web links are accepted for documents.
pub fn is_http_url(url: &str) -> bool {
    let url = url.trim().to_ascii_lowercase();
    url.starts_with("http://") || url.starts_with("https://")
}

#[cfg(feature = "validation")]
fn http_scheme(url: &str) -> Result<(), validator::ValidationError> {
    if is_http_url(url) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("http_scheme"))
    }
}

impl DocumentInput {
    pub fn to_document(&self) -> Document {
        Document {
            name: self.name.trim().to_string(),
            url: self.url.trim().to_string(),
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
            client: "Seguros Uno".into(),
            status: "Pendiente".into(),
            diagnosis: Some("Fractura".into()),
            ..Case::default()
        }
    }

    #[test]
    fn unchanged_edit_produces_empty_update() {
        let initial = EditCaseInput::from_case(&sample_case());
        let edited = initial.clone();
        assert!(edited.changes_from(&initial).is_empty());
    }

    #[test]
    fn edit_sends_only_changed_fields() {
        let initial = EditCaseInput::from_case(&sample_case());
        let mut edited = initial.clone();
        edited.city = "Caracas".into();
        edited.diagnosis = "Fractura de radio".into();

        let update = edited.changes_from(&initial);
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            serde_json::json!({"diagnosis": "Fractura de radio", "city": "Caracas"})
        );
    }

    #[test]
    fn every_listed_field_is_addressable() {
        let mut input = EditCaseInput::default();
        for key in EditCaseInput::FIELDS {
            input.set(key, format!("v-{key}"));
            assert_eq!(input.get(key), Some(format!("v-{key}").as_str()));
        }
        assert_eq!(input.get("id"), None);
    }

    #[test]
    fn whitespace_only_edits_are_not_changes() {
        let initial = EditCaseInput::from_case(&sample_case());
        let mut edited = initial.clone();
        edited.patient_name = "Ana Rojas  ".into();
        assert!(edited.changes_from(&initial).is_empty());
    }

    #[test]
    fn procedure_is_appended_to_existing_services() {
        let existing = vec![Service {
            name: "Consulta".into(),
            service_type: "consulta".into(),
            amount: 30.0,
            attended: true,
        }];
        let input = ProcedureInput {
            name: " Rayos X ".into(),
            service_type: "imagen".into(),
            amount: 55.0,
            attended: false,
        };
        let update = input.append_to(&existing);
        let services = update.services.unwrap();
        assert_eq!(services.len(), 2);
        assert_eq!(services[0], existing[0]);
        assert_eq!(services[1].name, "Rayos X");
    }

    #[test]
    fn audit_update_leaves_untouched_results_out() {
        let initial = AuditInput {
            results: String::new(),
            audit_notes: String::new(),
            status: "Pendiente".into(),
        };
        let input = AuditInput {
            audit_notes: " Procede ".into(),
            status: "Auditado".into(),
            ..initial.clone()
        };
        let update = input.to_update(&initial);
        assert_eq!(update.results, None);
        assert_eq!(update.audit_notes.as_deref(), Some("Procede"));
        assert_eq!(update.status.as_deref(), Some("Auditado"));
    }

    #[test]
    fn clearing_audit_results_sends_empty_string() {
        let initial = AuditInput::from_case(&Case {
            results: Some("Sin hallazgos".into()),
            audit_notes: Some("Revisado".into()),
            status: "Auditado".into(),
            ..Case::default()
        });
        let mut input = initial.clone();
        input.results = "   ".into();

        let update = input.to_update(&initial);
        assert_eq!(update.results.as_deref(), Some(""));
        assert_eq!(
            serde_json::to_value(&update).unwrap()["results"],
            serde_json::json!("")
        );
    }

    #[test]
    fn clearing_an_optional_edit_field_sends_empty_string() {
        let initial = EditCaseInput::from_case(&sample_case());
        let mut edited = initial.clone();
        edited.diagnosis = String::new();
        assert_eq!(edited.changes_from(&initial).diagnosis.as_deref(), Some(""));
    }

    #[test]
    fn appointment_roundtrips_from_case() {
        let case = Case {
            doctor: Some("Dra. Díaz".into()),
            schedule: Some("2026-10-20T09:00".into()),
            consultory: Some("C-3".into()),
            status: "Agendado".into(),
            ..Case::default()
        };
        let update = AppointmentInput::from_case(&case).to_update();
        assert_eq!(update.doctor.as_deref(), Some("Dra. Díaz"));
        assert_eq!(update.consultory.as_deref(), Some("C-3"));
        assert_eq!(update.status.as_deref(), Some("Agendado"));
    }

    #[test]
    fn http_url_check_ignores_case_and_padding() {
        assert!(is_http_url(" HTTPS://x/y.pdf"));
        assert!(is_http_url("http://x"));
        assert!(!is_http_url("javascript:alert(1)"));
    }

    #[cfg(feature = "validation")]
    mod validation {
        use super::super::*;
        use validator::Validate;

        #[test]
        fn negative_procedure_amount_is_rejected() {
            let input = ProcedureInput {
                name: "Rayos X".into(),
                service_type: "imagen".into(),
                amount: -1.0,
                attended: false,
            };
            let err = crate::AppError::from(input.validate().unwrap_err());
            assert_eq!(
                err.field_errors.get("amount").map(String::as_str),
                Some("El monto no puede ser negativo")
            );
        }

        #[test]
        fn document_url_must_be_valid() {
            let bad = DocumentInput {
                name: "Informe".into(),
                url: "not a url".into(),
            };
            assert!(bad.validate().is_err());

            let good = DocumentInput {
                name: "Informe".into(),
                url: "https://x/y.pdf".into(),
            };
            assert!(good.validate().is_ok());
        }

        #[test]
        fn document_url_must_be_http() {
            let ftp = DocumentInput {
                name: "Informe".into(),
                url: "ftp://x/y.pdf".into(),
            };
            let err = crate::AppError::from(ftp.validate().unwrap_err());
            assert_eq!(
                err.field_errors.get("url").map(String::as_str),
                Some("La URL debe comenzar con http:// o https://")
            );
        }

        fn error_keys<T: Validate>(input: &T) -> Vec<String> {
            let mut keys: Vec<String> = match input.validate() {
                Ok(()) => Vec::new(),
                Err(errors) => errors.field_errors().keys().map(|k| k.to_string()).collect(),
            };
            keys.sort();
            keys
        }

        #[test]
        fn whitespace_patient_name_is_rejected() {
            let mut input = EditCaseInput::from_case(&super::sample_case());
            input.patient_name = "   ".into();
            assert_eq!(error_keys(&input), vec!["patient_name"]);

            let err = crate::AppError::from(input.validate().unwrap_err());
            assert_eq!(
                err.field_errors.get("patient_name").map(String::as_str),
                Some("El nombre del paciente es obligatorio")
            );
        }

        #[test]
        fn whitespace_client_and_status_are_rejected_in_edit() {
            let mut input = EditCaseInput::from_case(&super::sample_case());
            input.client = "\t".into();
            input.status = " ".into();
            assert_eq!(error_keys(&input), vec!["client", "status"]);
        }

        #[test]
        fn whitespace_audit_fields_are_rejected() {
            let input = AuditInput {
                results: String::new(),
                audit_notes: "  ".into(),
                status: "  ".into(),
            };
            assert_eq!(error_keys(&input), vec!["audit_notes", "status"]);
        }

        #[test]
        fn whitespace_appointment_fields_are_rejected() {
            let input = AppointmentInput {
                doctor: " ".into(),
                schedule: "2026-10-20T09:00".into(),
                consultory: "  ".into(),
                status: " ".into(),
            };
            assert_eq!(error_keys(&input), vec!["consultory", "doctor", "status"]);
        }

        #[test]
        fn whitespace_procedure_name_is_rejected() {
            let input = ProcedureInput {
                name: "  ".into(),
                service_type: " ".into(),
                amount: 10.0,
                attended: false,
            };
            assert_eq!(error_keys(&input), vec!["name", "service_type"]);
        }

        #[test]
        fn whitespace_document_name_is_rejected() {
            let input = DocumentInput {
                name: "   ".into(),
                url: "https://x/y.pdf".into(),
            };
            assert_eq!(error_keys(&input), vec!["name"]);
        }

        #[test]
        fn filled_forms_pass() {
            let edit = EditCaseInput::from_case(&super::sample_case());
            assert!(edit.validate().is_ok());
            let appointment = AppointmentInput {
                doctor: "Dra. Díaz".into(),
                schedule: "2026-10-20T09:00".into(),
                consultory: "C-3".into(),
                status: "Agendado".into(),
            };
            assert!(appointment.validate().is_ok());
        }

        #[test]
        fn audit_requires_notes() {
            let input = AuditInput {
                results: String::new(),
                audit_notes: String::new(),
                status: "Auditado".into(),
            };
            let err = input.validate().unwrap_err();
            assert!(err.field_errors().contains_key("audit_notes"));
        }
    }
}
