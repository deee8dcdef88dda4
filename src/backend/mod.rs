//! Backend Module
//!
//! This module contains all server-side code: the Axum HTTP server, the
//! authentication and authorization contract, the user and card services
//! and the credential store they persist through.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Server initialization, application state, store connection
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Password hashing, bearer tokens, user service and handlers
//! - **`cards`** - Card model, card service and handlers
//! - **`store`** - Credential store ports and their adapters
//! - **`middleware`** - Bearer token gate for protected routes
//! - **`extract`** - JSON/path extractors that reject with `BackendError`
//! - **`error`** - Backend error kinds and their HTTP rendering
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication and users
//! ├── cards/          - News card bookmarks
//! ├── store/          - Credential store
//! ├── middleware/     - Request middleware
//! ├── extract.rs      - Request extractors
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! Every protected request passes through `middleware::auth_middleware`,
//! which verifies the bearer token and attaches the caller's identity.
//! The handler then calls the relevant service, which talks to the store
//! and returns either a record or a classified `BackendError`.
//!
//! # Thread Safety
//!
//! The only state shared between requests is the store handle held in
//! `AppState`. Each request is handled independently.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// News card bookmarks
pub mod cards;

/// Credential store ports and adapters
pub mod store;

/// Middleware for request processing
pub mod middleware;

/// Request extractors
pub mod extract;

/// Re-export commonly used types
pub use server::create_app;
pub use server::state::AppState;
pub use error::BackendError;
