use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    error,
    spotify::{SpotifyLibrary, playlist, user},
    types::{Playlist, PlaylistTableRow},
    utils, warning,
};

pub async fn list_playlists(search: Option<String>, writable_only: bool) {
    let library = match SpotifyLibrary::load().await {
        Ok(library) => library,
        Err(e) => error!("{}", e),
    };

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching playlists...");
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let token = library.access_token().await;
    let fetched = match user::get_current_user(&token).await {
        Ok(me) => playlist::get_playlists(&token)
            .await
            .map(|playlists| (me.id, playlists)),
        Err(e) => Err(e),
    };
    pb.finish_and_clear();

    let (user_id, mut playlists) = match fetched {
        Ok(fetched) => fetched,
        Err(e) => error!("Failed to fetch playlists: {}", e),
    };

    playlists.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    if let Some(search) = search {
        let search_term = search.to_lowercase();
        playlists.retain(|p| p.name.to_lowercase().contains(&search_term));
    }
    if writable_only {
        playlists.retain(|p| utils::is_writable(p, &user_id));
    }

    if playlists.is_empty() {
        warning!("No playlists found.");
        return;
    }

    let rows: Vec<PlaylistTableRow> = playlists
        .iter()
        .map(|p| playlist_row(p, &user_id))
        .collect();
    println!("{}", Table::new(rows));
}

fn playlist_row(playlist: &Playlist, user_id: &str) -> PlaylistTableRow {
    PlaylistTableRow {
        name: playlist.name.clone(),
        owner: playlist
            .owner
            .display_name
            .clone()
            .unwrap_or_else(|| playlist.owner.id.clone()),
        tracks: playlist.tracks.as_ref().map_or(0, |t| t.total),
        writable: if utils::is_writable(playlist, user_id) {
            "yes".to_string()
        } else {
            "no".to_string()
        },
        id: playlist.id.clone(),
    }
}
