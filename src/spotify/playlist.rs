use reqwest::{Client, Method};
use serde::de::DeserializeOwned;

use crate::{
    config,
    types::{
        GetUserPlaylistsResponse, Playlist, PlaylistTrackPage, SnapshotResponse, TrackList,
        TrackUrisRequest,
    },
    utils,
};

const PLAYLIST_PAGE_SIZE: u32 = 50;
const TRACK_FETCH_PAGE_SIZE: u32 = 100;
/// Spotify accepts at most 100 URIs per add/replace request.
const TRACK_WRITE_BATCH_SIZE: usize = 100;

/// Retrieves every playlist the current user owns or follows.
///
/// Follows the `next` links of `GET /me/playlists` until the last page.
pub async fn get_playlists(token: &str) -> Result<Vec<Playlist>, reqwest::Error> {
    let client = Client::new();
    let mut next_url = Some(format!(
        "{uri}/me/playlists?limit={limit}",
        uri = &config::spotify_apiurl(),
        limit = PLAYLIST_PAGE_SIZE
    ));

    let mut playlists: Vec<Playlist> = Vec::new();
    while let Some(url) = next_url {
        let page: GetUserPlaylistsResponse = get_json(&client, &url, token).await?;
        playlists.extend(page.items);
        next_url = page.next;
    }

    Ok(playlists)
}

pub async fn get_playlist(token: &str, playlist_id: &str) -> Result<Playlist, reqwest::Error> {
    let client = Client::new();
    let url = format!(
        "{uri}/playlists/{id}?fields=id,name,collaborative,public,owner(id,display_name),tracks(total)",
        uri = &config::spotify_apiurl(),
        id = playlist_id
    );

    get_json(&client, &url, token).await
}

/// Retrieves the IDs of all tracks in a playlist, in playlist order.
///
/// Pages through `GET /playlists/{id}/tracks` requesting only the track IDs.
/// Entries without an ID (local files, tracks removed from the catalog) cannot
/// be written back and are skipped. Tracks added or removed between two pages
/// can make the result slightly inconsistent.
pub async fn get_track_ids(token: &str, playlist_id: &str) -> Result<TrackList, reqwest::Error> {
    let client = Client::new();
    let mut next_url = Some(format!(
        "{uri}/playlists/{id}/tracks?limit={limit}&fields=items(track(id)),next",
        uri = &config::spotify_apiurl(),
        id = playlist_id,
        limit = TRACK_FETCH_PAGE_SIZE
    ));

    let mut track_ids: TrackList = Vec::new();
    while let Some(url) = next_url {
        let page: PlaylistTrackPage = get_json(&client, &url, token).await?;
        track_ids.extend(
            page.items
                .into_iter()
                .filter_map(|item| item.track.and_then(|track| track.id)),
        );
        next_url = page.next;
    }

    Ok(track_ids)
}

/// Replaces the contents of a playlist with `track_ids`, keeping their order.
///
/// The first batch goes out as `PUT`, which drops everything that was in the
/// playlist; an empty `track_ids` therefore clears it. Remaining batches are
/// appended with `POST` in order.
pub async fn replace_tracks(
    token: &str,
    playlist_id: &str,
    track_ids: &[String],
) -> Result<(), reqwest::Error> {
    let client = Client::new();
    let api_url = format!(
        "{uri}/playlists/{id}/tracks",
        uri = &config::spotify_apiurl(),
        id = playlist_id
    );

    let mut batches = track_ids.chunks(TRACK_WRITE_BATCH_SIZE);
    let first = batches.next().unwrap_or(&[]);
    write_batch(&client, Method::PUT, &api_url, token, first).await?;

    for batch in batches {
        write_batch(&client, Method::POST, &api_url, token, batch).await?;
    }

    Ok(())
}

async fn write_batch(
    client: &Client,
    method: Method,
    url: &str,
    token: &str,
    batch: &[String],
) -> Result<SnapshotResponse, reqwest::Error> {
    let body = TrackUrisRequest {
        uris: batch.iter().map(|id| utils::track_uri(id)).collect(),
    };

    client
        .request(method, url)
        .bearer_auth(token)
        .json(&body)
        .send()
        .await?
        .error_for_status()?
        .json::<SnapshotResponse>()
        .await
}

async fn get_json<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    token: &str,
) -> Result<T, reqwest::Error> {
    client
        .get(url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?
        .json::<T>()
        .await
}
