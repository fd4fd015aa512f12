use std::sync::Arc;

use lambda_runtime::{Error, run, service_fn};
use tracing::{error, info};
use vibecards::api::{AppState, handler};

#[tokio::main]
async fn main() -> Result<(), Error> {
    vibecards::setup_logging();

    let state = AppState::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;
    info!(worker_base_url = %state.config().worker_base_url, "Configuration loaded");

    let state = Arc::new(state);
    run(service_fn(move |event| {
        let state = Arc::clone(&state);
        async move { handler(&state, event).await }
    }))
    .await
}
