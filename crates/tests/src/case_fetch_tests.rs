use api::{sync, CaseBackend};
use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, CaseDetailState, PageView, FORBIDDEN_MESSAGE};

use crate::common::{Canned, StubApi};

#[tokio::test]
async fn fetch_decodes_camel_case_record() {
    let stub = StubApi::new();
    let backend = stub.serve().await;

    let case = backend.fetch_case("c-1").await.expect("case loads");

    assert_eq!(case.id, "c-1");
    assert_eq!(case.patient_name, "Ana Rojas");
    assert_eq!(case.sinister_no, "S-4411");
    assert_eq!(case.holder_ci.as_deref(), Some("V-100"));
    assert_eq!(case.services().len(), 2);
    assert_eq!(case.services()[1].service_type, "Imagen");
    assert_eq!(case.doctor, None);
}

#[tokio::test]
async fn fetch_sends_percent_encoded_id() {
    let stub = StubApi::new();
    let backend = stub.serve().await;

    backend.fetch_case("abc 123&x=1").await.expect("case loads");

    let requests = stub.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].id.as_deref(), Some("abc 123&x=1"));
}

#[tokio::test]
async fn forbidden_maps_to_forbidden_kind() {
    let stub = StubApi::new().with_fetch(Canned::status(StatusCode::FORBIDDEN, "{}"));
    let backend = stub.serve().await;

    let err = backend.fetch_case("c-1").await.unwrap_err();

    assert!(err.is_forbidden());
    assert_eq!(err.message, "Failed to fetch case: Forbidden");
}

#[tokio::test]
async fn forbidden_fetch_renders_inline_without_notice() {
    let stub = StubApi::new().with_fetch(Canned::status(StatusCode::FORBIDDEN, "{}"));
    let backend = stub.serve().await;
    let mut state = CaseDetailState::new("c-1");
    state.begin_fetch("c-1");

    let notice = state.apply_fetch("c-1", sync::load_case(&backend, "c-1").await);

    assert_eq!(notice, None);
    assert_eq!(state.view(), PageView::Error(FORBIDDEN_MESSAGE));
}

#[tokio::test]
async fn server_error_carries_status_reason() {
    let stub = StubApi::new().with_fetch(Canned::status(
        StatusCode::INTERNAL_SERVER_ERROR,
        r#"{"error":"db down"}"#,
    ));
    let backend = stub.serve().await;

    let err = backend.fetch_case("c-1").await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::InternalError);
    assert_eq!(err.message, "Failed to fetch case: Internal Server Error");
}

#[tokio::test]
async fn missing_case_maps_to_not_found() {
    let stub = StubApi::new().with_fetch(Canned::status(StatusCode::NOT_FOUND, ""));
    let backend = stub.serve().await;

    let err = backend.fetch_case("nope").await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::NotFound);
    assert_eq!(err.message, "Failed to fetch case: Not Found");
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let stub = StubApi::new().with_fetch(Canned::status(StatusCode::OK, "not json"));
    let backend = stub.serve().await;

    let err = backend.fetch_case("c-1").await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Decode);
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    let backend = api::HttpBackend::new("http://127.0.0.1:1");

    let err = backend.fetch_case("c-1").await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Network);
    assert!(err.message.starts_with("Failed to fetch case:"));
}
