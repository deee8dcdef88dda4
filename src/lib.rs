//! newsrv - Main Library
//!
//! newsrv is a small authenticated REST backend for user accounts and
//! "news card" bookmarks: users sign up and log in, receive a bearer token,
//! and then manage the cards that reference external articles they saved.
//!
//! # Module Structure
//!
//! The library is organized into two main modules:
//!
//! - **`shared`** - Platform-agnostic types
//!   - Application configuration (`AppConfig`)
//!   - Shared validation error type
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP server, routes and auth middleware
//!   - User and card services
//!   - Credential store ports with PostgreSQL and in-memory adapters
//!
//! # Usage
//!
//! ```rust,no_run
//! use newsrv::backend::server::init::create_app;
//! use newsrv::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `Result<T, E>` for fallible operations
//! - `shared::SharedError` for field validation failures
//! - `backend::BackendError` for everything that reaches an HTTP response

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
