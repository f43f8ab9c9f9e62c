use crate::case::Case;
use crate::role::{CurrentUserRole, UserRole};

/// Actions on a case that are gated by role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    EditCase,
    AuditCase,
    AddProcedure,
    ScheduleAppointment,
    /// View and upload the pre-invoice.
    PreInvoice,
}

pub const ALL_CAPABILITIES: &[Capability] = &[
    Capability::EditCase,
    Capability::AuditCase,
    Capability::AddProcedure,
    Capability::ScheduleAppointment,
    Capability::PreInvoice,
];

/// Role-derived capability set. Cheap to compute; derive it on every render
/// from the latest role rather than storing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Permissions {
    pub edit_case: bool,
    pub audit_case: bool,
    pub add_procedure: bool,
    pub schedule_appointment: bool,
    pub pre_invoice: bool,
}

impl Permissions {
    /// Capabilities granted to `role`. `None` grants nothing.
    pub fn for_role(role: Option<UserRole>) -> Self {
        match role {
            Some(UserRole::Superusuario) | Some(UserRole::CoordinadorRegional) => Permissions {
                edit_case: true,
                audit_case: false,
                add_procedure: true,
                schedule_appointment: true,
                pre_invoice: true,
            },
            Some(UserRole::MedicoAuditor) => Permissions {
                edit_case: false,
                audit_case: true,
                add_procedure: false,
                schedule_appointment: false,
                pre_invoice: false,
            },
            Some(UserRole::AnalistaConcertado) => Permissions {
                edit_case: false,
                audit_case: false,
                add_procedure: true,
                schedule_appointment: true,
                pre_invoice: false,
            },
            None => Permissions::default(),
        }
    }

    pub fn allows(&self, capability: Capability) -> bool {
        match capability {
            Capability::EditCase => self.edit_case,
            Capability::AuditCase => self.audit_case,
            Capability::AddProcedure => self.add_procedure,
            Capability::ScheduleAppointment => self.schedule_appointment,
            Capability::PreInvoice => self.pre_invoice,
        }
    }

    /// True when at least one header action (edit, audit, procedure,
    /// appointment) is available.
    pub fn any_header_action(&self) -> bool {
        self.edit_case || self.audit_case || self.add_procedure || self.schedule_appointment
    }
}

/// Whether the acting user may upload the medical report and results for
/// `case`: superusers always, concerted analysts only on their own cases.
pub fn can_upload_medical_report(identity: &CurrentUserRole, case: &Case) -> bool {
    match identity.user_role() {
        Some(UserRole::Superusuario) => true,
        Some(UserRole::AnalistaConcertado) => case.is_assigned_to(identity.user_id()),
        _ => false,
    }
}
