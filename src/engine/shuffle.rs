use rand::Rng;

use crate::{engine::max_len, types::TrackList};

/// Shuffles every list independently, optionally padding to the longest list.
///
/// Without padding each list becomes a uniform random permutation of itself.
/// With padding each list of length `n` is stretched to the length of the
/// longest list, and every block of `n` output positions is its own independent
/// shuffle of the `n` source tracks. A track therefore never repeats before the
/// whole list has been played once.
///
/// Empty lists stay empty, there is nothing to repeat.
pub fn shuffle_source_lists<R: Rng + ?Sized>(
    source_lists: &[TrackList],
    pad: bool,
    rng: &mut R,
) -> Vec<TrackList> {
    let target_len = max_len(source_lists);

    source_lists
        .iter()
        .map(|list| {
            let len = if pad { target_len } else { list.len() };
            shuffle_list(list, len, &mut *rng)
        })
        .collect()
}

/// Inside-out Fisher-Yates over consecutive blocks of `source.len()` positions.
///
/// Position `i` belongs to block `i / n` at offset `i % n`. The first position of
/// a block takes its source track directly; every later position swaps with a
/// uniformly chosen earlier-or-same position of the same block.
fn shuffle_list<R: Rng + ?Sized>(source: &[String], target_len: usize, rng: &mut R) -> TrackList {
    let n = source.len();
    if n == 0 {
        return Vec::new();
    }

    let mut shuffled: TrackList = Vec::with_capacity(target_len);
    for i in 0..target_len {
        let offset = i % n;
        let incoming = source[offset].clone();

        if offset == 0 {
            shuffled.push(incoming);
            continue;
        }

        let j = (i / n) * n + rng.random_range(0..=offset);
        if j == i {
            shuffled.push(incoming);
        } else {
            let displaced = std::mem::replace(&mut shuffled[j], incoming);
            shuffled.push(displaced);
        }
    }

    shuffled
}
