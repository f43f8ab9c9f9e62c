use shared_types::{AppError, Case, CaseUpdate, CurrentUserRole};

/// The three CGM endpoints the case pages consume.
///
/// [`HttpBackend`](crate::HttpBackend) is the production implementation;
/// tests substitute in-memory ones.
#[allow(async_fn_in_trait)]
pub trait CaseBackend {
    /// `GET /api/cases?id={id}`.
    async fn fetch_case(&self, id: &str) -> Result<Case, AppError>;

    /// `PUT /api/cases?id={id}` with a partial record; returns the full
    /// record as stored by the server.
    async fn update_case(&self, id: &str, update: &CaseUpdate) -> Result<Case, AppError>;

    /// `GET /api/current-user-role`.
    async fn current_user_role(&self) -> Result<CurrentUserRole, AppError>;
}
