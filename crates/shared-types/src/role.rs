use serde::{Deserialize, Serialize};

/// Named permission classes assigned to CGM users.
///
/// Role names arrive from the backend as display strings, accents included.
/// Anything that is not one of these names grants nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserRole {
    Superusuario,
    CoordinadorRegional,
    MedicoAuditor,
    AnalistaConcertado,
}

/// All known roles in display order.
pub const ALL_ROLES: &[UserRole] = &[
    UserRole::Superusuario,
    UserRole::CoordinadorRegional,
    UserRole::MedicoAuditor,
    UserRole::AnalistaConcertado,
];

impl UserRole {
    /// Parse the backend's role string. Matching is exact.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Superusuario" => Some(UserRole::Superusuario),
            "Coordinador Regional" => Some(UserRole::CoordinadorRegional),
            "Médico Auditor" => Some(UserRole::MedicoAuditor),
            "Analista Concertado" => Some(UserRole::AnalistaConcertado),
            _ => None,
        }
    }

    /// The role name exactly as the backend spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Superusuario => "Superusuario",
            UserRole::CoordinadorRegional => "Coordinador Regional",
            UserRole::MedicoAuditor => "Médico Auditor",
            UserRole::AnalistaConcertado => "Analista Concertado",
        }
    }
}

/// Response of `GET /api/current-user-role`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUserRole {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}

impl CurrentUserRole {
    /// The fail-closed identity: no role, no user.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// The parsed role, if it is one the application knows.
    pub fn user_role(&self) -> Option<UserRole> {
        self.role.as_deref().and_then(UserRole::parse)
    }

    /// The user id, with empty strings treated as absent.
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref().filter(|id| !id.is_empty())
    }
}
