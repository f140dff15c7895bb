//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Config → Bind listener → Build store + router → Serve
//!
//! Shutdown (shutdown.rs):
//!     Signal received → Stop accepting → Drain in-flight requests → Exit
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - Fail fast: a bind failure is fatal to the process
//! - Listener binds last, once everything else is built

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
