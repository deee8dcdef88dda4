//! Route Configuration Module
//!
//! Routes are organized by functionality into focused submodules.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Router assembly, health check, fallback
//! ├── api_routes.rs   - Signup, login and /me
//! └── card_routes.rs  - Card endpoints
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use newsrv::backend::auth::TokenService;
//! use newsrv::backend::routes::build_router;
//! use newsrv::backend::AppState;
//!
//! let app = build_router(AppState::in_memory(TokenService::new("secret")));
//! ```

/// Router assembly
pub mod router;

/// Account routes
pub mod api_routes;

/// Card routes
pub mod card_routes;

pub use router::build_router;
