/**
 * User Service
 *
 * Signup, login, fetch-self and update-self, built on the password hasher,
 * the token service and the user store.
 *
 * # Error Classification
 *
 * - Missing or empty input fields: `BadRequest`
 * - Store validation failure: `BadRequest`
 * - Duplicate email on signup: `Conflict`
 * - Unknown email or wrong password on login: `Unauthorized`, identical in
 *   both cases
 * - Identity that no longer resolves to a user: `NotFound`
 * - Anything else passes through unclassified
 */

use std::sync::Arc;

use uuid::Uuid;

use crate::backend::auth::handlers::types::{LoginRequest, SignupRequest, UpdateProfileRequest};
use crate::backend::auth::password::{hash_password, verify_password};
use crate::backend::auth::sessions::TokenService;
use crate::backend::auth::users::{NewUser, User, UserUpdate};
use crate::backend::error::{messages, BackendError};
use crate::backend::extract::present;
use crate::backend::store::{StoreError, UserStore};

/// User account operations
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
    tokens: TokenService,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>, tokens: TokenService) -> Self {
        Self { store, tokens }
    }

    /// Register a new user
    ///
    /// Returns the created record, which has no password field.
    pub async fn signup(&self, request: SignupRequest) -> Result<User, BackendError> {
        let (Some(name), Some(avatar), Some(email), Some(password)) = (
            present(request.name),
            present(request.avatar),
            present(request.email),
            present(request.password),
        ) else {
            tracing::warn!("Signup rejected: missing field");
            return Err(BackendError::bad_request());
        };

        let password_hash = hash_password(&password).await?;

        let user = self
            .store
            .insert_user(NewUser {
                name,
                avatar,
                email,
                password_hash,
            })
            .await
            .map_err(|err| match err {
                StoreError::Validation(e) => {
                    tracing::warn!("Signup rejected: {}", e);
                    BackendError::bad_request()
                }
                StoreError::Duplicate { .. } => {
                    tracing::warn!("Signup rejected: email already registered");
                    BackendError::conflict()
                }
                other => other.into(),
            })?;

        tracing::info!(user_id = %user.id, "User created successfully: {}", user.email);
        Ok(user)
    }

    /// Authenticate with email and password, returning a bearer token
    pub async fn login(&self, request: LoginRequest) -> Result<String, BackendError> {
        let (Some(email), Some(password)) = (present(request.email), present(request.password))
        else {
            tracing::warn!("Login rejected: missing field");
            return Err(BackendError::bad_request());
        };

        let user = self
            .find_user_by_credentials(&email, &password)
            .await
            .map_err(|reason| {
                tracing::warn!("Login failed for {}: {}", email, reason);
                BackendError::unauthorized()
            })?;

        let token = self.tokens.issue(user.id)?;

        tracing::info!(user_id = %user.id, "User logged in successfully: {}", user.email);
        Ok(token)
    }

    /// Look up a user by email and check the password against the stored
    /// hash. The error only describes the cause for logging; callers must
    /// not surface it.
    async fn find_user_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<User, CredentialsFailure> {
        let credentials = self
            .store
            .find_credentials_by_email(email)
            .await
            .map_err(|e| CredentialsFailure::Lookup(e.to_string()))?
            .ok_or(CredentialsFailure::UnknownEmail)?;

        let matched = verify_password(password, &credentials.password_hash)
            .await
            .map_err(|e| CredentialsFailure::Lookup(e.to_string()))?;

        if !matched {
            return Err(CredentialsFailure::WrongPassword);
        }

        Ok(credentials.user)
    }

    /// Fetch the authenticated user's record
    pub async fn get_current_user(&self, user_id: Uuid) -> Result<User, BackendError> {
        self.store.find_user_by_id(user_id).await?.ok_or_else(|| {
            tracing::warn!("User not found: {}", user_id);
            BackendError::not_found(messages::NOT_FOUND)
        })
    }

    /// Update the authenticated user's name and/or avatar
    ///
    /// Only non-empty supplied fields are changed. An update that changes
    /// nothing returns the current record without writing.
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        request: UpdateProfileRequest,
    ) -> Result<User, BackendError> {
        let update = UserUpdate {
            name: present(request.name),
            avatar: present(request.avatar),
        };

        if update.is_empty() {
            return self.get_current_user(user_id).await;
        }

        let user = self
            .store
            .update_user(user_id, update)
            .await
            .map_err(|err| match err {
                StoreError::Validation(e) => {
                    tracing::warn!("Profile update rejected: {}", e);
                    BackendError::bad_request()
                }
                other => other.into(),
            })?
            .ok_or_else(|| {
                tracing::warn!("User not found: {}", user_id);
                BackendError::not_found(messages::NOT_FOUND)
            })?;

        tracing::info!(user_id = %user.id, "Profile updated");
        Ok(user)
    }
}

#[derive(Debug, thiserror::Error)]
enum CredentialsFailure {
    #[error("unknown email")]
    UnknownEmail,
    #[error("wrong password")]
    WrongPassword,
    #[error("lookup failed: {0}")]
    Lookup(String),
}
