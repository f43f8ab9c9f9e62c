//! Fetch and mutation flows used by the case detail page.
//!
//! Each function performs one round trip and hands the outcome back to the
//! caller, which applies it to its `CaseDetailState`.

use shared_types::{AppError, Case, CaseUpdate, CurrentUserRole, Document, Service};

use crate::backend::CaseBackend;

/// Load one case.
pub async fn load_case<B: CaseBackend>(backend: &B, id: &str) -> Result<Case, AppError> {
    let result = backend.fetch_case(id).await;
    match &result {
        Ok(_) => tracing::debug!(case_id = id, "case loaded"),
        Err(err) if err.is_forbidden() => {
            tracing::info!(case_id = id, "case access denied")
        }
        Err(err) => tracing::error!(case_id = id, error = %err, "case fetch failed"),
    }
    result
}

/// Resolve the acting user's role. Any failure yields the anonymous
/// identity, which grants no capabilities.
pub async fn resolve_role<B: CaseBackend>(backend: &B) -> CurrentUserRole {
    match backend.current_user_role().await {
        Ok(identity) => identity,
        Err(err) => {
            tracing::warn!(error = %err, "could not resolve user role, continuing without one");
            CurrentUserRole::anonymous()
        }
    }
}

/// Send a partial update and return the server's copy of the case.
pub async fn dispatch_update<B: CaseBackend>(
    backend: &B,
    id: &str,
    update: &CaseUpdate,
) -> Result<Case, AppError> {
    if update.is_empty() {
        tracing::debug!(case_id = id, "sending an empty update");
    }
    let result = backend.update_case(id, update).await;
    if let Err(err) = &result {
        tracing::error!(case_id = id, error = %err, "case update failed");
    }
    result
}

/// Replace the case's document list.
pub async fn save_documents<B: CaseBackend>(
    backend: &B,
    id: &str,
    documents: Vec<Document>,
) -> Result<Case, AppError> {
    tracing::info!(case_id = id, count = documents.len(), "saving case documents");
    dispatch_update(backend, id, &CaseUpdate::documents(documents)).await
}

/// Flip the `attended` flag of the service at `index`, persist the full
/// list and return the services the server stored.
pub async fn toggle_service_attended<B: CaseBackend>(
    backend: &B,
    id: &str,
    services: &[Service],
    index: usize,
) -> Result<Vec<Service>, AppError> {
    if index >= services.len() {
        return Err(AppError::bad_request(format!(
            "Service index {index} out of range"
        )));
    }

    let mut next = services.to_vec();
    next[index].attended = !next[index].attended;

    let case = dispatch_update(backend, id, &CaseUpdate::services(next)).await?;
    Ok(case.services.unwrap_or_default())
}
