//! Authentication test helpers
//!
//! Utilities for creating test users through the HTTP surface and building
//! bearer headers.

use axum::http::StatusCode;
use serde_json::{json, Value};

use super::TestApp;

/// Test user credentials
pub struct TestUser {
    pub id: String,
    pub email: String,
    pub password: String,
    pub token: String,
}

/// Signup body with valid defaults for every field
pub fn signup_body(email: &str, password: &str) -> Value {
    json!({
        "name": "Jo",
        "avatar": "http://x.com/a.png",
        "email": email,
        "password": password,
    })
}

/// Sign up and log in, returning the user's id and token
pub async fn create_test_user(app: &TestApp, email: &str, password: &str) -> TestUser {
    let signup = app.post("/signup", None, signup_body(email, password)).await;
    assert_eq!(signup.status, StatusCode::CREATED, "signup failed: {:?}", signup.body);

    let login = app
        .post("/login", None, json!({ "email": email, "password": password }))
        .await;
    assert_eq!(login.status, StatusCode::OK, "login failed: {:?}", login.body);

    TestUser {
        id: signup.body["_id"].as_str().unwrap().to_string(),
        email: email.to_string(),
        password: password.to_string(),
        token: login.body["token"].as_str().unwrap().to_string(),
    }
}

/// Create authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}
