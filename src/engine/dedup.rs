use std::collections::HashSet;

use crate::types::TrackList;

/// Removes track IDs that already appeared in an earlier list.
///
/// Lists are first ordered by ascending length and then scanned in that order,
/// so a track shared between lists stays in the shortest one. The sort is
/// stable: lists of equal length keep their submission order. Within a list the
/// surviving tracks keep their relative order, and a repeat inside a single
/// list is dropped as well.
///
/// The returned vector has the same number of lists as the input, but in the
/// sorted order.
pub fn dedup_source_lists(mut source_lists: Vec<TrackList>) -> Vec<TrackList> {
    source_lists.sort_by_key(Vec::len);

    let mut seen_ids: HashSet<String> = HashSet::new();
    source_lists
        .into_iter()
        .map(|mut list| {
            list.retain(|track| seen_ids.insert(track.clone()));
            list
        })
        .collect()
}
