//! Vibecards - a small web front for summarising text and turning it into flashcards.
//!
//! The crate runs as a single API Lambda behind API Gateway:
//! 1. Two relay handlers (`/api/summarise`, `/api/flashcards`) that forward the
//!    request body to an external text-processing worker and pass its JSON back
//! 2. A server-rendered page (`/`) that drives those relays and shows the results
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda for serverless execution
//! - reqwest for the outbound worker calls
//! - minijinja for rendering the page
//! - Tokio for async runtime
//!
//! # Example
//!
//! ```no_run
//! use vibecards::api::AppState;
//! use vibecards::core::config::AppConfig;
//! use vibecards::ui::{LocalRelay, Page, render_page};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     vibecards::setup_logging();
//!
//!     let state = AppState::new(AppConfig::default());
//!     let mut page = Page::new();
//!     page.set_input("The cat sat on the mat.");
//!     page.request_summary(&LocalRelay::new(&state.worker)).await;
//!
//!     println!("{}", render_page(&page)?);
//!     Ok(())
//! }
//! ```
// Module declarations
pub mod api;
pub mod clients;
pub mod core;
pub mod errors;
pub mod form_parser;
pub mod ui;

pub use errors::{ConfigError, PageError, RelayError};

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. Calling it again after a subscriber is
/// installed is a no-op.
///
/// # Example
///
/// ```
/// vibecards::setup_logging();
/// vibecards::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}
