//! # Spotify Integration Module
//!
//! This module is Mixer's interface to the Spotify Web API. It covers the
//! authentication flow and the handful of playlist endpoints a mix needs: who is
//! signed in, which playlists exist, what tracks a playlist holds, and replacing
//! a playlist's contents.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI, web handlers, mix jobs)
//!          ↓
//! SpotifyLibrary (TrackSource + TrackSink)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (OAuth 2.0 PKCE)
//!     ├── User (current profile)
//!     └── Playlists (list, read track IDs, replace tracks)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! - [`auth`] - OAuth 2.0 PKCE flow with a local callback server, token
//!   exchange and refresh
//! - [`user`] - `GET /me`
//! - [`playlist`] - paginated playlist listing, paginated track-ID reads and
//!   batched playlist replacement
//! - [`library`] - [`SpotifyLibrary`], the token-holding handle mixes run
//!   against
//!
//! ## API Coverage
//!
//! - `GET /me` - current user profile
//! - `GET /me/playlists` - the user's playlists, 50 per page
//! - `GET /playlists/{id}` - owner and collaborative flag of one playlist
//! - `GET /playlists/{id}/tracks` - track IDs, 100 per page
//! - `PUT /playlists/{id}/tracks` - replace contents (first 100 URIs)
//! - `POST /playlists/{id}/tracks` - append further batches of 100 URIs
//! - `POST /api/token` - code exchange and token refresh
//!
//! ## Error Handling
//!
//! API functions return `reqwest::Error` for network failures and non-success
//! statuses alike. There is no retry: a failed request fails the operation and
//! the caller decides how to report it. Token errors are plain `String`s.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let library = spotify::SpotifyLibrary::load().await?;
//! let ids = library.fetch_track_ids(&PlaylistRef::new("37i9dQZF1DXcBWIGoYBM5M")).await?;
//! library.replace_track_ids(&PlaylistRef::new("my-playlist"), &ids).await?;
//! ```

pub mod auth;
pub mod library;
pub mod playlist;
pub mod user;

pub use library::SpotifyLibrary;
