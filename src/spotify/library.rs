use tokio::sync::Mutex;

use crate::{
    Res,
    management::{TokenManager, TrackSink, TrackSource},
    spotify::{playlist, user},
    types::{PlaylistRef, TrackId, TrackList},
    utils,
};

/// The signed-in user's Spotify library, as seen by a mix.
///
/// Wraps the cached token so concurrent mixes can share one library; the token
/// is refreshed under the lock when it is about to expire.
pub struct SpotifyLibrary {
    tokens: Mutex<TokenManager>,
}

impl SpotifyLibrary {
    pub fn new(tokens: TokenManager) -> Self {
        Self {
            tokens: Mutex::new(tokens),
        }
    }

    /// Library backed by the token cached by `mixer auth`.
    pub async fn load() -> Result<Self, String> {
        TokenManager::load()
            .await
            .map(Self::new)
            .map_err(|e| format!("no usable token, please run mixer auth ({})", e))
    }

    pub async fn access_token(&self) -> String {
        self.tokens.lock().await.get_valid_token().await
    }
}

impl TrackSource for SpotifyLibrary {
    async fn fetch_track_ids(&self, source: &PlaylistRef) -> Res<TrackList> {
        let token = self.access_token().await;
        Ok(playlist::get_track_ids(&token, &source.id).await?)
    }
}

impl TrackSink for SpotifyLibrary {
    /// Refuses playlists the user neither owns nor collaborates on, Spotify
    /// would reject the write half way through otherwise. Also refuses a
    /// destination whose owner no longer matches the submitted `owner_id`.
    async fn replace_track_ids(&self, dest: &PlaylistRef, tracks: &[TrackId]) -> Res<()> {
        let token = self.access_token().await;
        let me = user::get_current_user(&token).await?;
        let target = playlist::get_playlist(&token, &dest.id).await?;
        utils::check_destination(dest, &target, &me.id)?;

        Ok(playlist::replace_tracks(&token, &dest.id, tracks).await?)
    }
}
