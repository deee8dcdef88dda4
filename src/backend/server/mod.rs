//! Server Module
//!
//! Everything needed to turn an `AppConfig` into a running Axum router.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Store selection and startup errors
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use newsrv::backend::server::create_app;
//! use newsrv::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(&config).await?;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Store loading and startup errors
pub mod config;

/// Server initialization
pub mod init;

pub use config::{load_store, StartupError, Stores};
pub use init::create_app;
pub use state::AppState;
