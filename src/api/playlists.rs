use axum::{http::StatusCode, response::Json};

use crate::{
    api::{ApiError, api_error},
    spotify::{SpotifyLibrary, playlist, user},
    types::PlaylistsResponse,
};

/// Lists the signed-in user's playlists together with their user ID, which
/// the form needs to tell writable destinations apart.
pub async fn playlists() -> Result<Json<PlaylistsResponse>, ApiError> {
    let library = SpotifyLibrary::load()
        .await
        .map_err(|e| api_error(StatusCode::UNAUTHORIZED, e))?;
    let token = library.access_token().await;

    let me = user::get_current_user(&token)
        .await
        .map_err(|e| api_error(StatusCode::BAD_GATEWAY, e.to_string()))?;
    let playlists = playlist::get_playlists(&token)
        .await
        .map_err(|e| api_error(StatusCode::BAD_GATEWAY, e.to_string()))?;

    Ok(Json(PlaylistsResponse {
        user_id: me.id,
        playlists,
    }))
}
