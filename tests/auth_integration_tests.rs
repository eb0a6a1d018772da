use pge_models::domain::user::{AccessToken, LoginOutcome, LoginRequest, LoginResponse, User};
use pge_models::infrastructure::config::ApiConfig;
use pge_models::infrastructure::endpoints::{Endpoint, Method};
use serde_json::json;

#[test]
fn test_login_request_wire_format() {
    let req = LoginRequest::new("flow@example.com", "password123");
    let body = serde_json::to_value(&req).unwrap();
    assert_eq!(
        body,
        json!({ "email": "flow@example.com", "password": "password123" })
    );
}

#[test]
fn test_successful_login_response() {
    let body = json!({
        "success": true,
        "token": "eyJhbGciOiJIUzI1NiJ9.payload.sig",
        "user": { "id": 12, "name": "Maria" }
    });

    let resp: LoginResponse = serde_json::from_value(body).unwrap();
    assert!(resp.is_consistent());
    assert_eq!(
        resp.outcome(),
        LoginOutcome::Authenticated {
            token: "eyJhbGciOiJIUzI1NiJ9.payload.sig",
            user: &User {
                id: 12,
                name: "Maria".to_string()
            },
        }
    );
}

#[test]
fn test_failed_login_response_without_optional_fields() {
    let resp: LoginResponse = serde_json::from_str(r#"{"success": false}"#).unwrap();
    assert_eq!(resp, LoginResponse::rejected());
    assert_eq!(resp.outcome(), LoginOutcome::Rejected);

    let resp: LoginResponse =
        serde_json::from_str(r#"{"success": false, "token": null, "user": null}"#).unwrap();
    assert!(resp.is_consistent());
}

#[test]
fn test_inconsistent_login_response_is_accepted() {
    let body = json!({ "success": false, "token": "stale-token", "user": null });

    let resp: LoginResponse = serde_json::from_value(body).unwrap();
    assert!(!resp.is_consistent());
    assert_eq!(resp.outcome(), LoginOutcome::Inconsistent);
}

#[test]
fn test_backend_access_token() {
    let body = json!({
        "message": "Login exitoso",
        "acces_token": "17|abcdef",
        "token_type": "Bearer",
        "user": { "id": 3, "nombre": "carla", "email": "carla@example.com" }
    });

    let token: AccessToken = serde_json::from_value(body).unwrap();
    assert_eq!(token.access_token, "17|abcdef");
    assert_eq!(token.bearer(), "Bearer 17|abcdef");
    assert_eq!(token.user.id, Some(3));
    assert_eq!(token.user.initial().as_deref(), Some("C"));

    let round = serde_json::to_value(&token).unwrap();
    assert!(round.get("acces_token").is_some());
    assert!(round.get("access_token").is_none());
}

#[test]
fn test_login_endpoint() {
    let config = ApiConfig::default();
    assert_eq!(Endpoint::Login.method(), Method::Post);
    assert_eq!(Endpoint::Login.url(&config), "http://10.0.2.2:8000/api/login");
    assert_eq!(Endpoint::CurrentUser.url(&config), "http://10.0.2.2:8000/api/auth/me");
}
