//! # API Module
//!
//! JSON endpoints of Mixer's local HTTP service. The service completes the
//! OAuth login, lists the user's playlists and accepts mix submissions.
//!
//! ## Endpoints
//!
//! - [`health`] - `GET /health`, status and version
//! - [`callback`] - `GET /callback`, finishes the PKCE login by exchanging the
//!   authorization code for a token
//! - [`playlists`] - `GET /playlists`, the user's ID and playlists as JSON
//! - [`submit`] - `POST /submit`, validates a [`Submission`](crate::types::Submission)
//!   and starts the mix in the background
//!
//! ## Errors
//!
//! Failing handlers answer with a status code and a `{"error": "..."}` body.
//! Bodies that do not deserialize into a submission are rejected by axum's JSON
//! extractor before any handler code runs.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Router, routing::{get, post}};
//! use mixer::api::{health, playlists, submit};
//!
//! let app = Router::new()
//!     .route("/health", get(health))
//!     .route("/playlists", get(playlists))
//!     .route("/submit", post(submit));
//! ```

mod callback;
mod health;
mod playlists;
mod submit;

pub use callback::callback;
pub use health::health;
pub use playlists::playlists;
pub use submit::submit;

use axum::{http::StatusCode, response::Json};
use serde_json::{Value, json};

pub type ApiError = (StatusCode, Json<Value>);

pub fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, Json(json!({ "error": message.into() })))
}
