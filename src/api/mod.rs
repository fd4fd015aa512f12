//! API Lambda handler and request processing

pub mod handler;
pub mod helpers;
pub mod page;
pub mod parsing;
pub mod relay;

// Re-export the main handler for convenience
pub use handler::{AppState, handler, route};
