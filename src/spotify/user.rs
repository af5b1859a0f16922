use reqwest::Client;

use crate::{config, types::UserProfile};

/// Profile of the user the token belongs to (`GET /me`).
pub async fn get_current_user(token: &str) -> Result<UserProfile, reqwest::Error> {
    let api_url = format!("{uri}/me", uri = &config::spotify_apiurl());

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    response.json::<UserProfile>().await
}
