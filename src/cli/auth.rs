use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{config, info, spotify};

pub async fn auth() {
    info!(
        "Waiting for the Spotify login callback on {}",
        config::spotify_redirect_uri()
    );
    spotify::auth::auth(Arc::new(Mutex::new(None))).await;
}
