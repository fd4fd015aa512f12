//! The page: state, how it reaches the relays, and how it is drawn.

pub mod relay_client;
pub mod render;
pub mod state;

pub use relay_client::{LocalRelay, RelayClient};
pub use render::render_page;
pub use state::{CallOutcome, CallStatus, Page, Slot};
