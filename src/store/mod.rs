//! In-memory user storage.
//!
//! # Data Flow
//! ```text
//! handler (http/handlers.rs)
//!     → UserStore (memory.rs)
//!         lock → read/mutate map + id counter → unlock
//!     → User / StoreError (types.rs)
//! ```
//!
//! # Design Decisions
//! - One exclusive lock guards both the map and the id counter
//! - Reads take the same lock as writes
//! - Ids are never reused, even after delete
//! - Nothing is persisted; the store lives as long as the process

pub mod memory;
pub mod types;

pub use memory::UserStore;
pub use types::{StoreError, User, UserId};
