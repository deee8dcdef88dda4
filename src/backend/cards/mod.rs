//! Cards Module
//!
//! News card bookmarks: each card references an external article and belongs
//! to the user who saved it.
//!
//! # Module Structure
//!
//! ```text
//! cards/
//! ├── mod.rs          - Module exports and documentation
//! ├── model.rs        - Card record
//! ├── service.rs      - List, create and owner-only delete
//! └── handlers/       - HTTP handlers and request types
//! ```

/// Card record
pub mod model;

/// Card operations
pub mod service;

/// HTTP handlers for card endpoints
pub mod handlers;

pub use model::Card;
pub use service::CardService;
pub use handlers::{create_card, delete_card, list_cards};
