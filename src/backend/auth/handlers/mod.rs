//! Authentication Handlers Module
//!
//! HTTP handlers for the user endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── signup.rs   - User registration handler
//! ├── login.rs    - User authentication handler
//! └── me.rs       - Get and update current user handlers
//! ```
//!
//! # Handlers
//!
//! - **`signup`** - POST /signup - User registration
//! - **`login`** - POST /login - User authentication
//! - **`get_me`** - GET /me - Current user info
//! - **`update_me`** - PATCH /me - Update name and/or avatar

/// Request and response types
pub mod types;

/// Signup handler
pub mod signup;

/// Login handler
pub mod login;

/// Current user handlers
pub mod me;

// Re-export commonly used types
pub use types::{LoginRequest, SignupRequest, TokenResponse, UpdateProfileRequest};

// Re-export handlers
pub use signup::signup;
pub use login::login;
pub use me::{get_me, update_me};
