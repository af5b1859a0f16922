//! Configuration management for Mixer.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. Spotify credentials, the local server address and
//! the optional shuffle seed are all read from here.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (Spotify's public endpoints)

use std::{env, path::PathBuf};

use crate::error;

const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8080";
const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
const DEFAULT_SCOPE: &str = "playlist-read-private playlist-read-collaborative playlist-modify-public playlist-modify-private";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the `mixer` data directory if needed and loads `mixer/.env` from it
/// when the file exists. A missing file is not an error since every value can
/// also come straight from the environment.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/mixer/.env`
/// - macOS: `~/Library/Application Support/mixer/.env`
/// - Windows: `%LOCALAPPDATA%/mixer/.env`
///
/// # Errors
///
/// Returns an error string if the directory cannot be created or the `.env`
/// file exists but cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Root of everything Mixer keeps on disk.
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("mixer");
    path
}

/// Address the local server binds to, `SERVER_ADDRESS` or `127.0.0.1:8080`.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string())
}

/// Returns the Spotify API client ID for authentication.
///
/// # Exits
///
/// Terminates the program when `SPOTIFY_API_AUTH_CLIENT_ID` is not set, nothing
/// talking to Spotify can work without it.
pub fn spotify_client_id() -> String {
    required("SPOTIFY_API_AUTH_CLIENT_ID")
}

/// Returns the Spotify OAuth redirect URI.
///
/// Must match the redirect URI registered for the application and point at the
/// `/callback` route of [`server_addr`].
pub fn spotify_redirect_uri() -> String {
    env::var("SPOTIFY_API_REDIRECT_URI").unwrap_or_else(|_| format!("http://{}/callback", server_addr()))
}

/// Scopes requested during OAuth, reading and modifying playlists by default.
pub fn spotify_scope() -> String {
    env::var("SPOTIFY_API_AUTH_SCOPE").unwrap_or_else(|_| DEFAULT_SCOPE.to_string())
}

pub fn spotify_apiauth_url() -> String {
    env::var("SPOTIFY_API_AUTH_URL").unwrap_or_else(|_| DEFAULT_AUTH_URL.to_string())
}

pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL").unwrap_or_else(|_| DEFAULT_TOKEN_URL.to_string())
}

/// Fixed shuffle seed from `MIXER_SEED`, if one is configured.
///
/// Every mix builds its own generator from this seed, so two mixes with the
/// same sources and options produce the same order. Unparsable values are
/// ignored.
pub fn mix_seed() -> Option<u64> {
    env::var("MIXER_SEED")
        .ok()
        .and_then(|seed| seed.trim().parse::<u64>().ok())
}

fn required(key: &str) -> String {
    match env::var(key) {
        Ok(value) => value,
        Err(_) => error!("{} must be set, add it to {}", key, data_dir().join(".env").display()),
    }
}
