use api::{sync, CaseBackend};
use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{CurrentUserRole, Permissions, UserRole};

use crate::common::{Canned, StubApi};

#[tokio::test]
async fn role_response_is_parsed() {
    let stub = StubApi::new()
        .with_role(Canned::ok(json!({ "role": "Médico Auditor", "userId": "u-7" })));
    let backend = stub.serve().await;

    let identity = backend.current_user_role().await.expect("role loads");

    assert_eq!(identity.user_role(), Some(UserRole::MedicoAuditor));
    assert_eq!(identity.user_id(), Some("u-7"));
}

#[tokio::test]
async fn missing_fields_mean_no_role() {
    let stub = StubApi::new().with_role(Canned::ok(json!({})));
    let backend = stub.serve().await;

    let identity = backend.current_user_role().await.expect("role loads");

    assert_eq!(identity, CurrentUserRole::anonymous());
}

#[tokio::test]
async fn unknown_role_grants_nothing() {
    let stub = StubApi::new().with_role(Canned::ok(json!({ "role": "Invitado", "userId": "u-1" })));
    let backend = stub.serve().await;

    let identity = sync::resolve_role(&backend).await;

    assert_eq!(identity.user_role(), None);
    assert_eq!(Permissions::for_role(identity.user_role()), Permissions::default());
}

#[tokio::test]
async fn role_failure_resolves_to_anonymous() {
    let stub = StubApi::new().with_role(Canned::status(StatusCode::INTERNAL_SERVER_ERROR, ""));
    let backend = stub.serve().await;

    let identity = sync::resolve_role(&backend).await;

    assert_eq!(identity, CurrentUserRole::anonymous());
}
