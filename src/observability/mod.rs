//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and store produce:
//!     → tracing events (structured fields: user_id, request_id)
//!     → logging.rs subscriber (pretty or JSON to stdout)
//! HTTP layer produces:
//!     → TraceLayer spans per request (tower-http)
//! ```
//!
//! # Design Decisions
//! - Structured logging via the tracing crate
//! - `RUST_LOG` overrides the configured level
//! - No metrics exporter

pub mod logging;
