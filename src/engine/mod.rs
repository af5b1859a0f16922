//! # Combination Engine
//!
//! This module turns several ordered source track lists into the single ordered
//! track list that gets written to the destination playlist. It is the only part
//! of Mixer that does real work on track data; everything around it (fetching
//! playlists, writing the result, authentication) lives in [`crate::spotify`]
//! and [`crate::management`].
//!
//! ## Pipeline
//!
//! ```text
//! source lists
//!      ↓
//! Deduplicator   (options.dedup)
//!      ↓
//! Randomizer     (options.shuffle, pads at the same time when options.pad)
//!      ↓
//! Padder         (options.pad && !options.shuffle)
//!      ↓
//! Interleaver    (sequential or options.round_robin)
//!      ↓
//! combined list
//! ```
//!
//! Every stage is a pure transform over `Vec<TrackList>`. Nothing here blocks,
//! performs I/O or touches shared state. Randomness comes from the generator the
//! caller passes in, so each mix owns its generator and a fixed seed reproduces
//! a shuffle exactly.
//!
//! ## Stages
//!
//! - [`dedup`] - drops repeated track IDs, shorter lists keep their tracks first
//! - [`shuffle`] - independent Fisher-Yates shuffle per list, optionally padded
//! - [`pad`] - cyclic repetition up to the longest list
//! - [`interleave`] - merges the lists into the combined list
//!
//! ## Example
//!
//! ```rust,ignore
//! use mixer::{engine, types::MixOptions};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let lists = vec![
//!     vec!["1".to_string(), "2".to_string()],
//!     vec!["3".to_string(), "4".to_string(), "5".to_string()],
//! ];
//! let options = MixOptions { round_robin: true, ..Default::default() };
//! let mut rng = StdRng::seed_from_u64(7);
//!
//! let combined = engine::combine(lists, &options, &mut rng)?;
//! assert_eq!(combined, vec!["1", "3", "2", "4", "5"]);
//! ```

pub mod dedup;
pub mod interleave;
pub mod pad;
pub mod shuffle;

use std::fmt;

use rand::Rng;

use crate::types::{MixOptions, TrackList};

/// Errors raised when the engine is called outside its input domain.
///
/// Given at least one source list the engine is total, so the only failure is
/// a caller handing it nothing to combine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombineError {
    NoSourceLists,
}

impl fmt::Display for CombineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CombineError::NoSourceLists => write!(f, "at least one source list is required"),
        }
    }
}

impl std::error::Error for CombineError {}

/// Combines the source lists into one list according to `options`.
///
/// Stages run in a fixed order: dedup, then shuffle (which also pads when
/// `options.pad` is set), then plain cyclic padding when padding was requested
/// without shuffling, and finally the interleave. The length of the result is
/// the sum of the list lengths after the earlier stages ran.
///
/// # Errors
///
/// Returns [`CombineError::NoSourceLists`] when `source_lists` is empty. Empty
/// lists *inside* `source_lists` are fine.
pub fn combine<R: Rng + ?Sized>(
    source_lists: Vec<TrackList>,
    options: &MixOptions,
    rng: &mut R,
) -> Result<TrackList, CombineError> {
    if source_lists.is_empty() {
        return Err(CombineError::NoSourceLists);
    }

    let mut lists = source_lists;
    if options.dedup {
        lists = dedup::dedup_source_lists(lists);
    }
    if options.shuffle {
        lists = shuffle::shuffle_source_lists(&lists, options.pad, rng);
    }
    // shuffle already padded when both flags are set
    if options.pad && !options.shuffle {
        lists = pad::pad_source_lists(&lists);
    }

    Ok(interleave::interleave(&lists, options.round_robin))
}

/// Length of the longest list, or 0 when there are none.
pub(crate) fn max_len(lists: &[TrackList]) -> usize {
    lists.iter().map(Vec::len).max().unwrap_or(0)
}
