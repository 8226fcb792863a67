use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use comercia_rust::config::ClientOptions;
use comercia_rust::prelude::*;

fn login_envelope(token: &str, role: &str, email: &str) -> serde_json::Value {
    json!({
        "success": true,
        "message": "Login successful",
        "data": {
            "token": token,
            "type": "Bearer",
            "expiresIn": 86_400_000i64,
            "role": role,
            "email": email
        },
        "timestamp": "2024-05-01T10:00:00"
    })
}

#[tokio::test]
async fn login_stores_session() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({
            "email": "admin@example.com",
            "password": "secret"
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(login_envelope("test-token", "ADMIN", "admin@example.com")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let comercia = Comercia::new(&mock_server.uri());
    let response = comercia
        .auth()
        .login(&Credentials::new("admin@example.com", "secret"))
        .await
        .unwrap();

    assert_eq!(response.token, "test-token");
    assert_eq!(response.role, "ADMIN");

    let session = comercia.auth().current_session().unwrap();
    assert_eq!(session.access_token, "test-token");
    assert_eq!(session.email, "admin@example.com");
    assert_eq!(session.token_type, "Bearer");
    assert!(!session.is_expired());
}

#[tokio::test]
async fn rejected_login_surfaces_backend_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "success": false,
            "message": "Invalid credentials: bad password",
            "data": null,
            "timestamp": "2024-05-01T10:00:00"
        })))
        .mount(&mock_server)
        .await;

    let comercia = Comercia::new(&mock_server.uri());
    let err = comercia
        .auth()
        .login(&Credentials::new("admin@example.com", "wrong"))
        .await
        .unwrap_err();

    match err {
        Error::Api { status, message } => {
            assert_eq!(status, 400);
            assert!(message.contains("Invalid credentials"));
        }
        other => panic!("expected Api error, got {:?}", other),
    }
    assert!(comercia.auth().current_session().is_none());
}

#[tokio::test]
async fn register_returns_created_user() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "User registered successfully",
            "data": {
                "id": 7,
                "username": "clara",
                "email": "clara@example.com",
                "role": "EXTERNO",
                "activo": true
            },
            "timestamp": "2024-05-01T10:00:00"
        })))
        .mount(&mock_server)
        .await;

    let comercia = Comercia::new(&mock_server.uri());
    let user = User {
        username: "clara".to_string(),
        email: Some("clara@example.com".to_string()),
        ..Default::default()
    };

    let created = comercia.auth().register(&user).await.unwrap();
    assert_eq!(created.id, Some(7));
    assert_eq!(created.role.as_deref(), Some("EXTERNO"));
    assert_eq!(created.active, Some(true));
}

#[tokio::test]
async fn logout_clears_session() {
    let comercia = Comercia::new("http://localhost:8080/api");
    comercia
        .auth()
        .set_session(Session::new("test-token", "USER", "user@example.com"));
    assert!(comercia.auth().current_session().is_some());

    comercia.auth().logout().unwrap();
    assert!(comercia.auth().current_session().is_none());
}

#[tokio::test]
async fn session_persists_across_clients() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(login_envelope("persisted-token", "ADMIN", "admin@example.com")),
        )
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let session_file = dir.path().join("session.json");

    let first = Comercia::new_with_options(
        &mock_server.uri(),
        ClientOptions::default().with_session_file(&session_file),
    );
    first
        .auth()
        .login(&Credentials::new("admin@example.com", "secret"))
        .await
        .unwrap();

    // a second client rehydrates the same session from disk
    let second = Comercia::new_with_options(
        &mock_server.uri(),
        ClientOptions::default().with_session_file(&session_file),
    );
    assert!(second.auth().current_session().is_none());

    let restored = second.auth().restore_session().unwrap();
    assert_eq!(restored.access_token, "persisted-token");
    assert_eq!(restored.email, "admin@example.com");
    assert!(second.auth().current_session().is_some());
}

#[tokio::test]
async fn unauthorized_response_discards_session() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/empresas"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let comercia = Comercia::new(&mock_server.uri());
    comercia
        .auth()
        .set_session(Session::new("stale-token", "USER", "user@example.com"));

    let err = comercia.companies().list().await.unwrap_err();
    assert!(matches!(err, Error::Unauthorized));
    assert!(comercia.auth().current_session().is_none());
}

#[tokio::test]
async fn unauthorized_keeps_session_when_configured() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/empresas"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let comercia = Comercia::new_with_options(
        &mock_server.uri(),
        ClientOptions::default().with_clear_session_on_unauthorized(false),
    );
    comercia
        .auth()
        .set_session(Session::new("stale-token", "USER", "user@example.com"));

    let err = comercia.companies().list().await.unwrap_err();
    assert!(matches!(err, Error::Unauthorized));
    assert!(comercia.auth().current_session().is_some());
}
