use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{config, error, info, server::start_api_server};

/// Runs the web service until the process is interrupted.
///
/// Mixes submitted through `/submit` run in the background of this process,
/// their outcome shows up in this terminal.
pub async fn serve() {
    info!("Mixer listening on http://{}", config::server_addr());
    if let Some(seed) = config::mix_seed() {
        info!("Shuffles are seeded with {}", seed);
    }

    if let Err(e) = start_api_server(Arc::new(Mutex::new(None))).await {
        error!("Server stopped: {}", e);
    }
}
