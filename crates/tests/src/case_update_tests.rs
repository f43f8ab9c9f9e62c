use api::{sync, CaseBackend};
use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{
    AppErrorKind, CaseDetailState, CaseModal, CaseUpdate, Document, NoticeVariant,
    DOCUMENTS_SUCCESS_MESSAGE, UPDATE_FAILURE_MESSAGE, UPDATE_SUCCESS_MESSAGE,
};

use crate::common::{sample_case_json, Canned, StubApi};

#[tokio::test]
async fn put_body_contains_only_set_fields() {
    let stub = StubApi::new();
    let backend = stub.serve().await;
    let update = CaseUpdate {
        status: Some("Auditado".into()),
        audit_notes: Some("Sin observaciones".into()),
        ..CaseUpdate::default()
    };

    backend.update_case("c-1", &update).await.expect("update succeeds");

    let requests = stub.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "PUT");
    assert_eq!(requests[0].id.as_deref(), Some("c-1"));
    assert_eq!(
        requests[0].body,
        Some(json!({ "status": "Auditado", "auditNotes": "Sin observaciones" }))
    );
}

#[tokio::test]
async fn update_returns_server_copy() {
    let mut stored = sample_case_json();
    stored["status"] = json!("Agendado");
    let stub = StubApi::new().with_update(Canned::ok(stored));
    let backend = stub.serve().await;
    let update = CaseUpdate {
        schedule: Some("2026-02-01T09:30".into()),
        ..CaseUpdate::default()
    };

    let case = backend.update_case("c-1", &update).await.expect("update succeeds");

    assert_eq!(case.status, "Agendado");
}

#[tokio::test]
async fn error_body_message_is_surfaced() {
    let stub = StubApi::new().with_update(Canned::status(
        StatusCode::BAD_REQUEST,
        r#"{"error":"Estado inválido"}"#,
    ));
    let backend = stub.serve().await;

    let err = backend
        .update_case("c-1", &CaseUpdate::default())
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::BadRequest);
    assert_eq!(err.message, "Estado inválido");
}

#[tokio::test]
async fn unreadable_error_body_falls_back() {
    let stub = StubApi::new().with_update(Canned::status(
        StatusCode::INTERNAL_SERVER_ERROR,
        "<html>oops</html>",
    ));
    let backend = stub.serve().await;

    let err = backend
        .update_case("c-1", &CaseUpdate::default())
        .await
        .unwrap_err();

    assert_eq!(err.message, UPDATE_FAILURE_MESSAGE);
}

#[tokio::test]
async fn successful_update_replaces_record_and_closes_modals() {
    let mut stored = sample_case_json();
    stored["status"] = json!("Auditado");
    let stub = StubApi::new().with_update(Canned::ok(stored));
    let backend = stub.serve().await;
    let mut state = CaseDetailState::new("c-1");
    state.begin_fetch("c-1");
    state.apply_fetch("c-1", sync::load_case(&backend, "c-1").await);
    state.open(CaseModal::AuditCase);

    let update = CaseUpdate {
        status: Some("Auditado".into()),
        ..CaseUpdate::default()
    };
    let notice = state.apply_update("c-1", sync::dispatch_update(&backend, "c-1", &update).await);

    assert_eq!(notice.variant, NoticeVariant::Success);
    assert_eq!(notice.description, UPDATE_SUCCESS_MESSAGE);
    assert_eq!(state.case().map(|c| c.status.as_str()), Some("Auditado"));
    assert!(!state.has_open_modal());
}

#[tokio::test]
async fn failed_update_keeps_modal_open() {
    let stub = StubApi::new().with_update(Canned::status(
        StatusCode::CONFLICT,
        r#"{"error":"El caso fue modificado"}"#,
    ));
    let backend = stub.serve().await;
    let mut state = CaseDetailState::new("c-1");
    state.begin_fetch("c-1");
    state.apply_fetch("c-1", sync::load_case(&backend, "c-1").await);
    state.open(CaseModal::EditCase);
    let before = state.clone();

    let update = CaseUpdate {
        doctor: Some("Dr. Pérez".into()),
        ..CaseUpdate::default()
    };
    let notice = state.apply_update("c-1", sync::dispatch_update(&backend, "c-1", &update).await);

    assert_eq!(notice.variant, NoticeVariant::Error);
    assert_eq!(notice.description, "El caso fue modificado");
    assert_eq!(state, before);
}

#[tokio::test]
async fn save_documents_sends_document_list_only() {
    let stub = StubApi::new();
    let backend = stub.serve().await;
    let mut state = CaseDetailState::new("c-1");
    state.begin_fetch("c-1");
    state.apply_fetch("c-1", sync::load_case(&backend, "c-1").await);
    let docs = vec![Document {
        name: "Informe médico".into(),
        url: "https://files.example.com/informe.pdf".into(),
    }];

    let notice = state.apply_documents_saved(
        "c-1",
        sync::save_documents(&backend, "c-1", docs).await,
    );

    assert_eq!(notice.description, DOCUMENTS_SUCCESS_MESSAGE);
    let put = stub
        .requests()
        .into_iter()
        .find(|r| r.method == "PUT")
        .expect("PUT sent");
    assert_eq!(
        put.body,
        Some(json!({
            "documents": [
                { "name": "Informe médico", "url": "https://files.example.com/informe.pdf" }
            ]
        }))
    );
}

#[tokio::test]
async fn toggle_sends_full_service_list() {
    let stub = StubApi::new();
    let backend = stub.serve().await;
    let case = backend.fetch_case("c-1").await.expect("case loads");

    sync::toggle_service_attended(&backend, "c-1", case.services(), 0)
        .await
        .expect("toggle succeeds");

    let put = stub
        .requests()
        .into_iter()
        .find(|r| r.method == "PUT")
        .expect("PUT sent");
    assert_eq!(
        put.body,
        Some(json!({
            "services": [
                { "name": "Consulta", "type": "Consulta", "amount": 40.0, "attended": true },
                { "name": "Rayos X", "type": "Imagen", "amount": 85.5, "attended": true }
            ]
        }))
    );
}
