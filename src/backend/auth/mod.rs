//! Authentication Module
//!
//! User registration, login and profile management, plus the two
//! primitives they rest on: password hashing and bearer tokens.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model
//! ├── password.rs     - bcrypt hashing
//! ├── sessions.rs     - JWT issuance and verification
//! ├── service.rs      - User service
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: name, avatar, email, password → password hashed → user created
//! 2. **Login**: email, password → credentials verified → token returned
//! 3. **Me**: token → verified by middleware → user returned or updated
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt (cost 10) before storage
//! - Tokens expire after 7 days
//! - Invalid credentials return 401 without saying which part was wrong

/// User data model
pub mod users;

/// Password hashing
pub mod password;

/// JWT token generation and validation
pub mod sessions;

/// User service
pub mod service;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::{get_me, login, signup, update_me};
pub use service::UserService;
pub use sessions::{InvalidToken, TokenService};
pub use users::User;
