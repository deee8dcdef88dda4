//! Authentication API integration tests
//!
//! Signup, login and the protected `/me` endpoints, driven through the full
//! router over an in-memory store.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use pretty_assertions::assert_eq;
use serde_json::json;
use uuid::Uuid;

use crate::common::{create_test_user, signup_body, TestApp, TEST_SECRET};
use crate::{assert_error, assert_status};
use newsrv::backend::auth::TokenService;

#[tokio::test]
async fn test_signup_login_me_flow() {
    let app = TestApp::new();

    let signup = app
        .post(
            "/signup",
            None,
            json!({
                "name": "Jo",
                "avatar": "http://x.com/a.png",
                "email": "a@b.com",
                "password": "p12345"
            }),
        )
        .await;
    assert_status!(signup, StatusCode::CREATED);
    assert!(signup.body.get("password").is_none());
    assert!(signup.body.get("password_hash").is_none());
    assert_eq!(signup.body["email"], "a@b.com");
    assert_eq!(signup.body["name"], "Jo");
    assert_eq!(signup.body["articles"], json!([]));

    let duplicate = app.post("/signup", None, signup_body("a@b.com", "other")).await;
    assert_error!(duplicate, StatusCode::CONFLICT, "Conflict: email already exists");

    let login = app
        .post("/login", None, json!({ "email": "a@b.com", "password": "p12345" }))
        .await;
    assert_status!(login, StatusCode::OK);
    let token = login.body["token"].as_str().unwrap().to_string();
    assert_eq!(login.body.as_object().unwrap().len(), 1);

    let me = app.get("/me", Some(&token)).await;
    assert_status!(me, StatusCode::OK);
    assert_eq!(me.body["email"], "a@b.com");
    assert_eq!(me.body["_id"], signup.body["_id"]);
}

#[tokio::test]
async fn test_signup_missing_fields() {
    let app = TestApp::new();

    for field in ["name", "avatar", "email", "password"] {
        let mut body = signup_body("a@b.com", "p12345");
        body.as_object_mut().unwrap().remove(field);

        let response = app.post("/signup", None, body).await;
        assert_error!(response, StatusCode::BAD_REQUEST, "Bad request");
    }

    // Nothing was created, so the email is still free.
    let response = app.post("/signup", None, signup_body("a@b.com", "p12345")).await;
    assert_status!(response, StatusCode::CREATED);
}

#[tokio::test]
async fn test_signup_invalid_fields() {
    let app = TestApp::new();

    let cases = [
        json!({ "name": "J", "avatar": "http://x.com/a.png", "email": "a@b.com", "password": "p" }),
        json!({ "name": "Jo", "avatar": "not a url", "email": "a@b.com", "password": "p" }),
        json!({ "name": "Jo", "avatar": "http://x.com/a.png", "email": "nope", "password": "p" }),
    ];

    for body in cases {
        let response = app.post("/signup", None, body).await;
        assert_error!(response, StatusCode::BAD_REQUEST, "Bad request");
    }
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = TestApp::new();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/signup")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.send(request).await;
    assert_error!(response, StatusCode::BAD_REQUEST, "Bad request");
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::new();
    create_test_user(&app, "a@b.com", "p12345").await;

    let wrong_password = app
        .post("/login", None, json!({ "email": "a@b.com", "password": "wrong" }))
        .await;
    let unknown_email = app
        .post("/login", None, json!({ "email": "x@b.com", "password": "p12345" }))
        .await;

    assert_error!(wrong_password, StatusCode::UNAUTHORIZED, "Unauthorized");
    assert_error!(unknown_email, StatusCode::UNAUTHORIZED, "Unauthorized");
}

#[tokio::test]
async fn test_login_missing_fields() {
    let app = TestApp::new();

    let response = app.post("/login", None, json!({ "email": "a@b.com" })).await;
    assert_error!(response, StatusCode::BAD_REQUEST, "Bad request");
}

#[tokio::test]
async fn test_me_requires_valid_token() {
    let app = TestApp::new();
    let user = create_test_user(&app, "a@b.com", "p12345").await;
    let user_id: Uuid = user.id.parse().unwrap();

    let missing = app.get("/me", None).await;
    assert_error!(missing, StatusCode::UNAUTHORIZED, "Unauthorized");

    let wrong_scheme = Request::builder()
        .uri("/me")
        .header(header::AUTHORIZATION, format!("Token {}", user.token))
        .body(Body::empty())
        .unwrap();
    let wrong_scheme = app.send(wrong_scheme).await;
    assert_error!(wrong_scheme, StatusCode::UNAUTHORIZED, "Unauthorized");

    let expired = TokenService::new(TEST_SECRET).issue_at(user_id, 1_000).unwrap();
    let response = app.get("/me", Some(&expired)).await;
    assert_error!(response, StatusCode::UNAUTHORIZED, "Unauthorized");

    let foreign = TokenService::new("another-secret").issue(user_id).unwrap();
    let response = app.get("/me", Some(&foreign)).await;
    assert_error!(response, StatusCode::UNAUTHORIZED, "Unauthorized");

    let mut tampered = user.token.clone();
    tampered.push('x');
    let response = app.get("/me", Some(&tampered)).await;
    assert_error!(response, StatusCode::UNAUTHORIZED, "Unauthorized");
}

#[tokio::test]
async fn test_me_for_unknown_user_is_not_found() {
    let app = TestApp::new();
    let token = TokenService::new(TEST_SECRET).issue(Uuid::new_v4()).unwrap();

    let response = app.get("/me", Some(&token)).await;
    assert_error!(response, StatusCode::NOT_FOUND, "Not found");

    let response = app.patch("/me", Some(&token), json!({ "name": "New" })).await;
    assert_error!(response, StatusCode::NOT_FOUND, "Not found");
}

#[tokio::test]
async fn test_update_me_is_partial() {
    let app = TestApp::new();
    let user = create_test_user(&app, "a@b.com", "p12345").await;

    let response = app
        .patch("/me", Some(&user.token), json!({ "name": "Renamed" }))
        .await;
    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body["name"], "Renamed");
    assert_eq!(response.body["avatar"], "http://x.com/a.png");

    let response = app
        .patch("/me", Some(&user.token), json!({ "avatar": "https://cdn.example.com/b.png" }))
        .await;
    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body["name"], "Renamed");
    assert_eq!(response.body["avatar"], "https://cdn.example.com/b.png");

    let me = app.get("/me", Some(&user.token)).await;
    assert_eq!(me.body, response.body);
}

#[tokio::test]
async fn test_update_me_without_body_returns_user() {
    let app = TestApp::new();
    let user = create_test_user(&app, "a@b.com", "p12345").await;
    let before = app.get("/me", Some(&user.token)).await;

    let response = app
        .request(Method::PATCH, "/me", Some(&user.token), None)
        .await;
    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body, before.body);

    let response = app.patch("/me", Some(&user.token), json!({})).await;
    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body, before.body);
}

#[tokio::test]
async fn test_update_me_rejects_invalid_values() {
    let app = TestApp::new();
    let user = create_test_user(&app, "a@b.com", "p12345").await;

    let response = app
        .patch("/me", Some(&user.token), json!({ "avatar": "not a url" }))
        .await;
    assert_error!(response, StatusCode::BAD_REQUEST, "Bad request");

    let response = app
        .patch("/me", Some(&user.token), json!({ "name": "x".repeat(31) }))
        .await;
    assert_error!(response, StatusCode::BAD_REQUEST, "Bad request");

    let me = app.get("/me", Some(&user.token)).await;
    assert_eq!(me.body["name"], "Jo");
}

#[tokio::test]
async fn test_health_and_fallback() {
    let app = TestApp::new();

    let health = app.get("/api/health", None).await;
    assert_status!(health, StatusCode::OK);
    assert_eq!(health.body, json!({ "ok": true }));

    let missing = app.get("/does-not-exist", None).await;
    assert_error!(missing, StatusCode::NOT_FOUND, "Route not found");
}
