use std::collections::HashSet;

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

use crate::types::{Playlist, PlaylistRef, Submission};

pub fn generate_code_verifier() -> String {
    random_alphanumeric(128)
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Short random ID used to tell concurrent mixes apart in the logs.
pub fn generate_mix_id() -> String {
    random_alphanumeric(8).to_lowercase()
}

fn random_alphanumeric(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

pub fn track_uri(track_id: &str) -> String {
    format!("spotify:track:{}", track_id)
}

/// A playlist can be written when the user owns it or it is collaborative.
pub fn is_writable(playlist: &Playlist, user_id: &str) -> bool {
    playlist.collaborative || playlist.owner.id == user_id
}

/// Checks that `target`, the playlist fetched for `dest`, may be overwritten.
///
/// An `owner_id` sent with the submission has to match the actual owner, so a
/// playlist that changed hands since it was picked is not overwritten.
pub fn check_destination(
    dest: &PlaylistRef,
    target: &Playlist,
    user_id: &str,
) -> Result<(), String> {
    if let Some(expected) = dest.owner_id.as_deref() {
        if expected != target.owner.id {
            return Err(format!(
                "playlist '{}' is owned by {}, expected {}",
                target.name, target.owner.id, expected
            ));
        }
    }

    if !is_writable(target, user_id) {
        return Err(format!(
            "playlist '{}' is owned by {} and not collaborative",
            target.name, target.owner.id
        ));
    }

    Ok(())
}

pub fn validate_submission(submission: &Submission) -> Result<(), String> {
    if submission.source_lists.is_empty() {
        return Err("at least one source list is required".to_string());
    }

    if submission.dest_list.id.trim().is_empty() {
        return Err("destination list id cannot be empty".to_string());
    }

    let mut seen_ids = HashSet::new();
    for (index, source) in submission.source_lists.iter().enumerate() {
        let id = source.id.trim();
        if id.is_empty() {
            return Err(format!("source list {} has an empty id", index));
        }
        if !seen_ids.insert(id) {
            return Err(format!("source list '{}' is listed more than once", id));
        }
    }

    if seen_ids.contains(submission.dest_list.id.trim()) {
        return Err(format!(
            "destination list '{}' cannot also be a source list",
            submission.dest_list.id
        ));
    }

    Ok(())
}
