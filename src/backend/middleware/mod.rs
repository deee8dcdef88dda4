//! Middleware Module
//!
//! HTTP middleware run before handlers.
//!
//! - **`auth`** - Bearer token gate for protected routes
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{middleware::from_fn_with_state, routing::get, Router};
//! use newsrv::backend::{auth::get_me, middleware::auth_middleware, AppState};
//!
//! fn protected(state: AppState) -> Router<AppState> {
//!     Router::new()
//!         .route("/me", get(get_me))
//!         .route_layer(from_fn_with_state(state, auth_middleware))
//! }
//! ```

pub mod auth;

pub use auth::{auth_middleware, authenticate, bearer_token, AuthUser, AuthenticatedUser};
