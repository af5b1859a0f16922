use std::collections::HashMap;

use mixer::engine::{
    CombineError, combine, dedup::dedup_source_lists, interleave::interleave,
    pad::pad_source_lists, shuffle::shuffle_source_lists,
};
use mixer::types::{MixOptions, TrackList};
use rand::{SeedableRng, rngs::StdRng};

// Helper function to build a track list from string literals
fn list(ids: &[&str]) -> TrackList {
    ids.iter().map(|id| id.to_string()).collect()
}

fn sorted(mut tracks: TrackList) -> TrackList {
    tracks.sort();
    tracks
}

fn all_option_combinations() -> Vec<MixOptions> {
    (0..16u8)
        .map(|bits| MixOptions {
            dedup: bits & 1 != 0,
            shuffle: bits & 2 != 0,
            pad: bits & 4 != 0,
            round_robin: bits & 8 != 0,
        })
        .collect()
}

#[test]
fn test_combine_without_options_concatenates() {
    let lists = vec![list(&["a", "b"]), list(&["c"]), list(&["a", "d", "e"])];
    let mut rng = StdRng::seed_from_u64(1);

    let combined = combine(lists, &MixOptions::default(), &mut rng).unwrap();

    assert_eq!(combined, list(&["a", "b", "c", "a", "d", "e"]));
}

#[test]
fn test_combine_rejects_empty_source_set() {
    let mut rng = StdRng::seed_from_u64(1);

    let result = combine(Vec::new(), &MixOptions::default(), &mut rng);

    assert_eq!(result, Err(CombineError::NoSourceLists));
    assert!(
        CombineError::NoSourceLists
            .to_string()
            .contains("at least one source list")
    );
}

#[test]
fn test_combine_with_only_empty_lists() {
    let mut rng = StdRng::seed_from_u64(1);

    for options in all_option_combinations() {
        let combined = combine(vec![Vec::new(), Vec::new()], &options, &mut rng).unwrap();
        assert!(combined.is_empty(), "options {:?}", options);
    }
}

#[test]
fn test_dedup_keeps_track_in_shorter_list() {
    let lists = vec![list(&["x", "y"]), list(&["x"])];

    let deduped = dedup_source_lists(lists);

    // shorter list is processed first and therefore comes first
    assert_eq!(deduped, vec![list(&["x"]), list(&["y"])]);
}

#[test]
fn test_dedup_priority_through_combine() {
    let lists = vec![list(&["x", "y"]), list(&["x"])];
    let options = MixOptions {
        dedup: true,
        ..Default::default()
    };
    let mut rng = StdRng::seed_from_u64(1);

    let combined = combine(lists, &options, &mut rng).unwrap();

    assert_eq!(combined, list(&["x", "y"]));
}

#[test]
fn test_dedup_equal_lengths_keep_submission_order() {
    let lists = vec![
        list(&["a", "b", "c"]),
        list(&["d", "a"]),
        list(&["b", "e"]),
        list(&["f"]),
    ];

    let deduped = dedup_source_lists(lists);

    assert_eq!(
        deduped,
        vec![list(&["f"]), list(&["d", "a"]), list(&["b", "e"]), list(&["c"])]
    );
}

#[test]
fn test_dedup_removes_repeats_within_a_list() {
    let deduped = dedup_source_lists(vec![list(&["a", "a", "b", "a"])]);

    assert_eq!(deduped, vec![list(&["a", "b"])]);
}

#[test]
fn test_dedup_preserves_relative_order() {
    let lists = vec![list(&["q", "w", "e", "r", "t"]), list(&["e", "q"])];

    let deduped = dedup_source_lists(lists);

    assert_eq!(deduped, vec![list(&["e", "q"]), list(&["w", "r", "t"])]);
}

#[test]
fn test_dedup_is_idempotent() {
    let lists = vec![
        list(&["a", "b", "c", "d"]),
        list(&["b", "c", "e"]),
        list(&["a"]),
        list(&["f", "g", "a", "h", "i"]),
    ];

    let once = dedup_source_lists(lists);
    let twice = dedup_source_lists(once.clone());

    // a second pass removes nothing; it may only re-sort lists that shrank
    let mut once_sorted = once.clone();
    let mut twice_sorted = twice.clone();
    once_sorted.sort();
    twice_sorted.sort();
    assert_eq!(once_sorted, twice_sorted);
    assert_eq!(dedup_source_lists(twice.clone()), twice);
}

#[test]
fn test_shuffle_is_permutation() {
    let lists = vec![
        list(&["a", "b", "c", "d", "e", "f", "g"]),
        list(&["h"]),
        list(&["i", "j", "i", "k"]),
        Vec::new(),
    ];

    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let shuffled = shuffle_source_lists(&lists, false, &mut rng);

        assert_eq!(shuffled.len(), lists.len());
        for (input, output) in lists.iter().zip(&shuffled) {
            assert_eq!(output.len(), input.len());
            assert_eq!(sorted(output.clone()), sorted(input.clone()));
        }
    }
}

#[test]
fn test_shuffle_reaches_every_permutation() {
    let source = vec![list(&["a", "b", "c"])];
    let mut rng = StdRng::seed_from_u64(2024);
    let mut counts: HashMap<TrackList, usize> = HashMap::new();

    for _ in 0..3000 {
        let shuffled = shuffle_source_lists(&source, false, &mut rng);
        *counts.entry(shuffled[0].clone()).or_default() += 1;
    }

    // 6 permutations, about 500 each when uniform
    assert_eq!(counts.len(), 6);
    assert!(counts.values().all(|&count| count > 350), "{:?}", counts);
}

#[test]
fn test_shuffle_is_reproducible_with_seed() {
    let lists = vec![list(&["a", "b", "c", "d", "e"]), list(&["f", "g"])];

    let first = shuffle_source_lists(&lists, true, &mut StdRng::seed_from_u64(99));
    let second = shuffle_source_lists(&lists, true, &mut StdRng::seed_from_u64(99));

    assert_eq!(first, second);
}

#[test]
fn test_shuffle_with_pad_reshuffles_every_block() {
    let lists = vec![list(&["a", "b", "c"]), list(&["1", "2", "3", "4", "5", "6", "7"])];

    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let shuffled = shuffle_source_lists(&lists, true, &mut rng);

        assert_eq!(shuffled[0].len(), 7);
        assert_eq!(shuffled[1].len(), 7);
        assert_eq!(sorted(shuffled[1].clone()), sorted(lists[1].clone()));

        // two full blocks, each a complete shuffle of the source
        assert_eq!(sorted(shuffled[0][0..3].to_vec()), list(&["a", "b", "c"]));
        assert_eq!(sorted(shuffled[0][3..6].to_vec()), list(&["a", "b", "c"]));
        // partial last block only holds the first source track
        assert_eq!(shuffled[0][6], "a");
    }
}

#[test]
fn test_shuffle_with_pad_partial_block_uses_prefix() {
    let lists = vec![list(&["a", "b", "c", "d"]), list(&["1", "2", "3", "4", "5", "6"])];

    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let shuffled = shuffle_source_lists(&lists, true, &mut rng);

        assert_eq!(sorted(shuffled[0][0..4].to_vec()), list(&["a", "b", "c", "d"]));
        assert_eq!(sorted(shuffled[0][4..6].to_vec()), list(&["a", "b"]));
    }
}

#[test]
fn test_shuffle_with_pad_leaves_empty_list_empty() {
    let lists = vec![Vec::new(), list(&["a", "b"])];
    let mut rng = StdRng::seed_from_u64(5);

    let shuffled = shuffle_source_lists(&lists, true, &mut rng);

    assert!(shuffled[0].is_empty());
    assert_eq!(shuffled[1].len(), 2);
}

#[test]
fn test_pad_without_shuffle_is_cyclic() {
    let lists = vec![list(&["a", "b", "c"]), list(&["1", "2", "3", "4", "5", "6", "7"])];

    let padded = pad_source_lists(&lists);

    assert_eq!(padded[0], list(&["a", "b", "c", "a", "b", "c", "a"]));
    assert_eq!(padded[1], lists[1]);
}

#[test]
fn test_pad_leaves_empty_list_empty() {
    let padded = pad_source_lists(&[Vec::new(), list(&["a", "b", "c"])]);

    assert!(padded[0].is_empty());
    assert_eq!(padded[1], list(&["a", "b", "c"]));
}

#[test]
fn test_pad_through_combine_sequential() {
    let lists = vec![list(&["a"]), list(&["b", "c", "d"])];
    let options = MixOptions {
        pad: true,
        ..Default::default()
    };
    let mut rng = StdRng::seed_from_u64(1);

    let combined = combine(lists, &options, &mut rng).unwrap();

    assert_eq!(combined, list(&["a", "a", "a", "b", "c", "d"]));
}

#[test]
fn test_round_robin_interleave() {
    let lists = vec![list(&["1", "2"]), list(&["3", "4", "5"])];
    let options = MixOptions {
        round_robin: true,
        ..Default::default()
    };
    let mut rng = StdRng::seed_from_u64(1);

    let combined = combine(lists, &options, &mut rng).unwrap();

    assert_eq!(combined, list(&["1", "3", "2", "4", "5"]));
}

#[test]
fn test_sequential_interleave() {
    let lists = vec![list(&["1", "2"]), list(&["3", "4", "5"])];
    let mut rng = StdRng::seed_from_u64(1);

    let combined = combine(lists, &MixOptions::default(), &mut rng).unwrap();

    assert_eq!(combined, list(&["1", "2", "3", "4", "5"]));
}

#[test]
fn test_round_robin_with_three_uneven_lists() {
    let lists = vec![list(&["a"]), list(&["b", "c", "d"]), list(&["e", "f"])];

    let combined = interleave(&lists, true);

    assert_eq!(combined, list(&["a", "b", "e", "c", "f", "d"]));
}

#[test]
fn test_round_robin_skips_list_emptied_by_dedup() {
    let lists = vec![list(&["x"]), list(&["x"]), list(&["y", "z", "w"])];
    let options = MixOptions {
        dedup: true,
        round_robin: true,
        ..Default::default()
    };
    let mut rng = StdRng::seed_from_u64(1);

    let combined = combine(lists, &options, &mut rng).unwrap();

    assert_eq!(combined, list(&["x", "y", "z", "w"]));
}

#[test]
fn test_interleave_skips_empty_lists() {
    let lists = vec![Vec::new(), list(&["a"]), Vec::new(), list(&["b", "c"])];

    assert_eq!(interleave(&lists, true), list(&["a", "b", "c"]));
    assert_eq!(interleave(&lists, false), list(&["a", "b", "c"]));
    assert!(interleave(&[Vec::new(), Vec::new()], true).is_empty());
}

#[test]
fn test_round_robin_with_pad_alternates_evenly() {
    let lists = vec![list(&["a", "b"]), list(&["1", "2", "3", "4"])];
    let options = MixOptions {
        pad: true,
        round_robin: true,
        ..Default::default()
    };
    let mut rng = StdRng::seed_from_u64(1);

    let combined = combine(lists, &options, &mut rng).unwrap();

    assert_eq!(combined, list(&["a", "1", "b", "2", "a", "3", "b", "4"]));
}

#[test]
fn test_total_length_for_all_option_combinations() {
    let lists = vec![
        list(&["a", "b", "c", "d"]),
        list(&["b", "e"]),
        list(&["f", "a", "g", "h", "i", "j"]),
        list(&["e"]),
    ];

    for options in all_option_combinations() {
        let mut rng = StdRng::seed_from_u64(7);
        let combined = combine(lists.clone(), &options, &mut rng).unwrap();

        let staged = if options.dedup {
            dedup_source_lists(lists.clone())
        } else {
            lists.clone()
        };
        let longest = staged.iter().map(Vec::len).max().unwrap_or(0);
        let expected: usize = staged
            .iter()
            .map(|l| if options.pad && !l.is_empty() { longest } else { l.len() })
            .sum();

        assert_eq!(combined.len(), expected, "options {:?}", options);
    }
}

#[test]
fn test_combined_tracks_come_from_sources() {
    let lists = vec![list(&["a", "b", "c"]), list(&["c", "d"]), list(&["e"])];

    for options in all_option_combinations() {
        let mut rng = StdRng::seed_from_u64(11);
        let combined = combine(lists.clone(), &options, &mut rng).unwrap();

        assert!(
            combined
                .iter()
                .all(|track| lists.iter().any(|l| l.contains(track))),
            "options {:?}",
            options
        );
        if options.dedup && !options.pad {
            assert_eq!(sorted(combined), list(&["a", "b", "c", "d", "e"]));
        }
    }
}

#[test]
fn test_combine_keeps_per_list_order_without_shuffle() {
    let lists = vec![list(&["a1", "a2", "a3"]), list(&["b1", "b2"])];
    let options = MixOptions {
        round_robin: true,
        ..Default::default()
    };
    let mut rng = StdRng::seed_from_u64(3);

    let combined = combine(lists, &options, &mut rng).unwrap();

    let a: TrackList = combined.iter().filter(|t| t.starts_with('a')).cloned().collect();
    let b: TrackList = combined.iter().filter(|t| t.starts_with('b')).cloned().collect();
    assert_eq!(a, list(&["a1", "a2", "a3"]));
    assert_eq!(b, list(&["b1", "b2"]));
}
