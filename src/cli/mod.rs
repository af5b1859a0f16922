//! # CLI Module
//!
//! This module provides the command-line interface layer for Mixer. It
//! implements the user-facing commands and connects them to the Spotify client,
//! the mix orchestration and the local web service.
//!
//! ## Commands
//!
//! - [`auth`] - Spotify OAuth login with PKCE, caches the token locally
//! - [`list_playlists`] - table of the user's playlists, optionally filtered to
//!   the ones a mix can write to
//! - [`mix`] - mixes source playlists into a destination in the foreground
//! - [`serve`] - runs the web service; mixes submitted there run in the
//!   background of the server process
//!
//! ## Architecture Design
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Management Layer (token cache, mix orchestration)
//!     ↓                     ↓
//! Spotify Layer        Combination Engine
//!     ↓
//! Network Layer (HTTP Requests)
//! ```
//!
//! ## Error Handling
//!
//! Commands run in the foreground, so a missing token or a failed request ends
//! the command through the `error!` macro with a hint on how to recover.
//! Background mixes started by [`serve`] never exit the process; their failures
//! are logged and the server keeps running.
//!
//! ## Usage Patterns
//!
//! ```bash
//! mixer auth                                   # Authenticate with Spotify
//! mixer playlists --writable                   # Find a destination
//! mixer mix --source A --source B --dest C --dedup --round-robin
//! mixer serve                                  # JSON API on SERVER_ADDRESS
//! ```

mod auth;
mod mix;
mod playlists;
mod serve;

pub use auth::auth;
pub use mix::mix;
pub use playlists::list_playlists;
pub use serve::serve;
