//! PostgreSQL store tests
//!
//! Exercise `PgStore` against a real database: unique email mapping,
//! credential lookup, partial updates, card listing and deletion.

use std::sync::Arc;

use axum::http::StatusCode;
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use uuid::Uuid;

use crate::common::database::{test_store, unique_email};
use crate::common::signup_body;
use crate::{assert_error, assert_status};
use newsrv::backend::auth::users::{NewUser, UserUpdate};
use newsrv::backend::auth::TokenService;
use newsrv::backend::cards::model::NewCard;
use newsrv::backend::routes::build_router;
use newsrv::backend::store::{CardStore, PgStore, StoreError, UserStore};
use newsrv::backend::AppState;

fn new_user(email: &str) -> NewUser {
    NewUser {
        name: "Jo".to_string(),
        avatar: "http://x.com/a.png".to_string(),
        email: email.to_string(),
        password_hash: "$2b$10$abcdefghijklmnopqrstuuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0".to_string(),
    }
}

fn new_card(owner: Uuid, title: &str) -> NewCard {
    NewCard {
        owner,
        title: title.to_string(),
        description: "Something happened".to_string(),
        image: "https://img.example.com/1.png".to_string(),
        url: "https://news.example.com/story".to_string(),
        source: "Example News".to_string(),
        published_at: Utc.with_ymd_and_hms(2026, 2, 3, 0, 0, 0).unwrap(),
    }
}

#[tokio::test]
async fn test_migrations_create_tables() {
    let Some(store) = test_store().await else {
        return;
    };

    assert!(store
        .find_user_by_id(Uuid::new_v4())
        .await
        .unwrap()
        .is_none());
    assert!(store
        .list_cards_by_owner(Uuid::new_v4())
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_insert_user_and_duplicate_email() {
    let Some(store) = test_store().await else {
        return;
    };
    let email = unique_email();

    let user = store.insert_user(new_user(&email)).await.unwrap();
    assert_eq!(user.email, email);
    assert!(user.articles.is_empty());

    let err = store.insert_user(new_user(&email)).await.unwrap_err();
    assert!(
        matches!(&err, StoreError::Duplicate { field } if field == "email"),
        "expected duplicate email, got {err:?}"
    );
}

#[tokio::test]
async fn test_insert_user_validates() {
    let Some(store) = test_store().await else {
        return;
    };

    let mut user = new_user(&unique_email());
    user.name = "J".to_string();

    let err = store.insert_user(user).await.unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
}

#[tokio::test]
async fn test_find_credentials_by_email() {
    let Some(store) = test_store().await else {
        return;
    };
    let email = unique_email();
    let user = store.insert_user(new_user(&email)).await.unwrap();

    let credentials = store
        .find_credentials_by_email(&email)
        .await
        .unwrap()
        .expect("credentials for inserted user");
    assert_eq!(credentials.user, user);
    assert_eq!(credentials.password_hash, new_user(&email).password_hash);

    assert!(store
        .find_credentials_by_email(&unique_email())
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_update_user_is_partial() {
    let Some(store) = test_store().await else {
        return;
    };
    let user = store.insert_user(new_user(&unique_email())).await.unwrap();

    let renamed = store
        .update_user(
            user.id,
            UserUpdate {
                name: Some("Renamed".to_string()),
                avatar: None,
            },
        )
        .await
        .unwrap()
        .expect("user exists");
    assert_eq!(renamed.name, "Renamed");
    assert_eq!(renamed.avatar, user.avatar);

    let err = store
        .update_user(
            user.id,
            UserUpdate {
                name: None,
                avatar: Some("not a url".to_string()),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));

    let missing = store
        .update_user(
            Uuid::new_v4(),
            UserUpdate {
                name: Some("Ghost".to_string()),
                avatar: None,
            },
        )
        .await
        .unwrap();
    assert!(missing.is_none());

    let stored = store.find_user_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(stored, renamed);
}

#[tokio::test]
async fn test_cards_list_and_delete() {
    let Some(store) = test_store().await else {
        return;
    };
    let owner = store.insert_user(new_user(&unique_email())).await.unwrap();
    let other = store.insert_user(new_user(&unique_email())).await.unwrap();

    let first = store.insert_card(new_card(owner.id, "First")).await.unwrap();
    let second = store.insert_card(new_card(owner.id, "Second")).await.unwrap();
    store.insert_card(new_card(other.id, "Other")).await.unwrap();

    let listed = store.list_cards_by_owner(owner.id).await.unwrap();
    assert_eq!(listed, vec![first.clone(), second.clone()]);

    let found = store.find_card_by_id(first.id).await.unwrap();
    assert_eq!(found, Some(first.clone()));

    let deleted = store.delete_card(first.id).await.unwrap();
    assert_eq!(deleted, Some(first.clone()));
    assert_eq!(store.delete_card(first.id).await.unwrap(), None);

    let listed = store.list_cards_by_owner(owner.id).await.unwrap();
    assert_eq!(listed, vec![second]);
}

#[tokio::test]
async fn test_signup_conflict_through_router() {
    let Some(store) = test_store().await else {
        return;
    };
    let store = Arc::new(store);
    let state = AppState::new(store.clone(), store, TokenService::new("test-secret"));
    let app = crate::common::TestApp::with_router(build_router(state));
    let email = unique_email();

    let created = app.post("/signup", None, signup_body(&email, "p12345")).await;
    assert_status!(created, StatusCode::CREATED);
    assert!(created.body.get("password_hash").is_none());

    let duplicate = app.post("/signup", None, signup_body(&email, "p12345")).await;
    assert_error!(duplicate, StatusCode::CONFLICT, "Conflict: email already exists");

    let login = app
        .post(
            "/login",
            None,
            serde_json::json!({ "email": email, "password": "p12345" }),
        )
        .await;
    assert_status!(login, StatusCode::OK);
}
