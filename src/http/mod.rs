//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware: request ID, tracing, timeout, body limit)
//!     → request.rs (extract user id from path/query, decode JSON body)
//!     → handlers.rs (call the store)
//!     → response.rs (map errors to status + JSON body)
//!     → Send to client
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::{JsonBody, UserIdParam, UserIdQuery, UserPayload};
pub use response::ApiError;
pub use server::{build_router, AppState, HttpServer};
