//! Spotify Playlist Mixer Library
//!
//! This library combines several Spotify playlists into one destination playlist.
//! Source playlists can be deduplicated, shuffled, padded to a common length and
//! merged either one after the other or round-robin. The combination itself is a
//! pure engine; the rest of the crate fetches playlists, writes the result back
//! and offers both a command line and a small local web service to drive it.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the local web service
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `engine` - The playlist combination engine
//! - `management` - Token cache and mix orchestration
//! - `server` - Local HTTP server (OAuth callback and mix submissions)
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use mixer::{config, cli};
//!
//! #[tokio::main]
//! async fn main() -> mixer::Res<()> {
//!     config::load_env().await?;
//!     // Use CLI functions...
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod engine;
pub mod management;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Used by everything that talks to the outside world. The boxed error keeps
/// `Send + Sync` so results can cross tokio task boundaries, which background
/// mixes rely on.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Fetching {} source playlists...", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Wrote {} tracks to {}", combined.len(), dest);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only for fatal conditions in the foreground commands. Background mixes must
/// never use it, they report through [`management::MixJournal`] instead.
///
/// # Example
///
/// ```
/// error!("Failed to load token. Please run mixer auth");
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// # Example
///
/// ```
/// warning!("Playlist {} is not writable, skipping", id);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
