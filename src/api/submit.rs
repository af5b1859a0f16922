use std::sync::Arc;

use axum::{http::StatusCode, response::Json};

use crate::{
    api::{ApiError, api_error},
    config, info,
    management::spawn_mix,
    spotify::SpotifyLibrary,
    types::{Submission, SubmitResponse},
    utils,
};

/// Accepts a mix and runs it in the background.
///
/// Answers `202 Accepted` with the mix ID as soon as the submission is valid
/// and the mix is spawned. How the mix ends is only visible in the server log.
pub async fn submit(
    Json(submission): Json<Submission>,
) -> Result<(StatusCode, Json<SubmitResponse>), ApiError> {
    utils::validate_submission(&submission).map_err(|e| api_error(StatusCode::BAD_REQUEST, e))?;

    let library = SpotifyLibrary::load()
        .await
        .map_err(|e| api_error(StatusCode::UNAUTHORIZED, e))?;

    let (mix_id, _) = spawn_mix(Arc::new(library), submission, config::mix_seed());
    info!("Accepted mix {}", mix_id);

    Ok((StatusCode::ACCEPTED, Json(SubmitResponse { mix_id })))
}
