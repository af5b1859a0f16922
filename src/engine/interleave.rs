use crate::types::TrackList;

/// Merges the processed lists into the combined list.
///
/// Sequential mode drains list 0, then list 1, and so on. Round-robin mode takes
/// one track from each list per round and skips lists that ran out. Empty lists
/// are never selected. Every track of every list ends up in the result exactly
/// once and in its per-list order.
pub fn interleave(lists: &[TrackList], round_robin: bool) -> TrackList {
    let total_len: usize = lists.iter().map(Vec::len).sum();
    let mut combined: TrackList = Vec::with_capacity(total_len);
    if total_len == 0 {
        return combined;
    }

    let exhausted =
        |cursors: &[usize], list: usize| -> bool { cursors[list] >= lists[list].len() };

    let mut cursors = vec![0usize; lists.len()];
    let mut current = 0;
    while exhausted(&cursors, current) {
        current = (current + 1) % lists.len();
    }

    loop {
        combined.push(lists[current][cursors[current]].clone());
        cursors[current] += 1;

        if combined.len() == total_len {
            break;
        }

        if round_robin {
            current = (current + 1) % lists.len();
        }
        // total_len not reached, so some list still has tracks left
        while exhausted(&cursors, current) {
            current = (current + 1) % lists.len();
        }
    }

    combined
}
