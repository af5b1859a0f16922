use crate::{engine::max_len, types::TrackList};

/// Repeats every list cyclically up to the length of the longest list.
///
/// Output position `i` holds the source track at `i % n`. Empty lists stay
/// empty.
pub fn pad_source_lists(source_lists: &[TrackList]) -> Vec<TrackList> {
    let target_len = max_len(source_lists);

    source_lists
        .iter()
        .map(|list| {
            if list.is_empty() {
                return Vec::new();
            }
            list.iter().cycle().take(target_len).cloned().collect()
        })
        .collect()
}
