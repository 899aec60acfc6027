#![allow(clippy::unwrap_used)]
// Integration tests for `ApiClient` using wiremock.

use serde_json::json;
use wiremock::matchers::{body_partial_json, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use tempo_api::types::{ListScope, PageQuery, ProjectDraft};
use tempo_api::{ApiClient, Error};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let client = ApiClient::from_reqwest(&server.uri(), reqwest::Client::new()).unwrap();
    (server, client)
}

fn project_json(id: &str, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "color": "#6366f1",
        "billable": true,
        "billableRate": 90.0,
        "estimatedTime": 40.0,
        "clientId": null,
        "archivedAt": null
    })
}

// ── Authentication tests ────────────────────────────────────────────

#[tokio::test]
async fn test_login_success() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": { "id": "u1", "name": "Ada", "email": "ada@example.com" }
        })))
        .mount(&server)
        .await;

    let secret: secrecy::SecretString = "hunter2".to_string().into();
    let user = client.login("ada@example.com", &secret).await.unwrap();
    assert_eq!(user.email, "ada@example.com");
}

#[tokio::test]
async fn test_login_failure_maps_to_authentication_error() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "message": "Invalid credentials" })),
        )
        .mount(&server)
        .await;

    let secret: secrecy::SecretString = "wrong".to_string().into();
    let result = client.login("ada@example.com", &secret).await;

    match result {
        Err(Error::Authentication { message }) => assert_eq!(message, "Invalid credentials"),
        other => panic!("expected Authentication error, got: {other:?}"),
    }
}

// ── Project tests ───────────────────────────────────────────────────

#[tokio::test]
async fn test_list_projects_unwraps_envelope_and_pagination() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/project/org1"))
        .and(query_param("type", "active"))
        .and(query_param("page", "2"))
        .and(query_param("pageSize", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "projects": [project_json("p1", "Website"), project_json("p2", "Mobile app")],
            "pagination": { "total": 12, "page": 2, "pageSize": 10, "totalPages": 2 }
        })))
        .mount(&server)
        .await;

    let page = client
        .list_projects("org1", ListScope::Active, PageQuery::new(2, 10))
        .await
        .unwrap();

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].name, "Website");
    let info = page.pagination.unwrap();
    assert_eq!(info.total, 12);
    assert_eq!(info.total_pages, 2);
}

#[tokio::test]
async fn test_create_project_sends_idempotency_key() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/project/create/org1"))
        .and(header_exists("Idempotency-Key"))
        .and(body_partial_json(json!({ "name": "Website" })))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({ "project": project_json("p1", "Website") })),
        )
        .mount(&server)
        .await;

    let draft = ProjectDraft {
        name: "Website".into(),
        ..ProjectDraft::default()
    };
    let project = client.create_project("org1", &draft).await.unwrap();
    assert_eq!(project.id, "p1");
    assert!(project.archived_at.is_none());
}

#[tokio::test]
async fn test_archive_project_returns_archived_entity() {
    let (server, client) = setup().await;

    let mut body = project_json("p1", "Website");
    body["archivedAt"] = json!("2026-03-01T12:00:00Z");

    Mock::given(method("PUT"))
        .and(path("/api/project/archive/p1/org1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "project": body })))
        .mount(&server)
        .await;

    let project = client.archive_project("org1", "p1").await.unwrap();
    assert!(project.archived_at.is_some());
}

// ── Error-shape tests ───────────────────────────────────────────────

#[tokio::test]
async fn test_error_body_message_is_extracted() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/api/project/p1/org1"))
        .respond_with(
            ResponseTemplate::new(403)
                .set_body_json(json!({ "message": "Only admins can delete projects" })),
        )
        .mount(&server)
        .await;

    let err = client.delete_project("org1", "p1").await.unwrap_err();
    match err {
        Error::Api { message, status } => {
            assert_eq!(status, 403);
            assert_eq!(message, "Only admins can delete projects");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_unauthorized_maps_to_session_expired() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = client.me().await.unwrap_err();
    assert!(matches!(err, Error::SessionExpired));
    assert!(err.is_auth_expired());
}

#[tokio::test]
async fn test_non_json_multibyte_body_yields_deserialization_error() {
    let (server, client) = setup().await;

    // 199 ASCII bytes followed by a three-byte char, so a naive byte
    // slice of the preview would land mid-character.
    let body = format!("{}€ and more trailing text", "a".repeat(199));
    Mock::given(method("GET"))
        .and(path("/api/tag/org1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    let err = client.list_tags("org1").await.unwrap_err();
    match err {
        Error::Deserialization { message, body } => {
            assert!(message.contains("body preview"), "message: {message}");
            assert!(body.contains('€'));
        }
        other => panic!("expected Deserialization error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_plain_text_error_body_falls_through() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/tag/org1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let err = client.list_tags("org1").await.unwrap_err();
    match err {
        Error::Api { message, status } => {
            assert_eq!(status, 500);
            assert_eq!(message, "upstream exploded");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

// ── Timer tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_running_timer_null_payload() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/time/org1/timer/running"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "timer": null })))
        .mount(&server)
        .await;

    let timer = client.get_running_timer("org1").await.unwrap();
    assert!(timer.is_none());
}

#[tokio::test]
async fn test_stop_timer_unwraps_data_envelope() {
    let (server, client) = setup().await;

    Mock::given(method("PATCH"))
        .and(path("/api/time/org1/timer/t1/stop"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "id": "t1",
                "description": "standup",
                "start": "2026-03-01T09:00:00Z",
                "end": "2026-03-01T09:15:00Z",
                "billable": false,
                "tags": []
            }
        })))
        .mount(&server)
        .await;

    let entry = client.stop_timer("org1", "t1").await.unwrap();
    assert_eq!(entry.id, "t1");
    assert!(entry.end.is_some());
}

// ── Time entry tests ────────────────────────────────────────────────

#[tokio::test]
async fn test_list_time_entries_uses_limit_and_date_params() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/time/org1"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "10"))
        .and(query_param("date", "2026-03-01"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [],
            "pagination": { "total": 0, "page": 1, "pageSize": 10, "totalPages": 0 }
        })))
        .mount(&server)
        .await;

    let date = tempo_api::types::DateFilter("2026-03-01".parse().unwrap());
    let page = client
        .list_time_entries("org1", PageQuery::new(1, 10), Some(date))
        .await
        .unwrap();
    assert!(page.items.is_empty());
}

#[tokio::test]
async fn test_bulk_delete_sends_ids_in_body() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/api/time/org1/bulk/delete"))
        .and(body_partial_json(json!({ "timeEntryIds": ["a", "b", "c"] })))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let ids = vec!["a".to_owned(), "b".to_owned(), "c".to_owned()];
    client.bulk_delete_time_entries("org1", &ids).await.unwrap();
}
