use std::{
    future::Future,
    sync::Arc,
    time::{Duration, Instant},
};

use rand::{SeedableRng, rngs::StdRng};
use tokio::task::{JoinError, JoinHandle};

use crate::{
    Res, engine,
    management::{JournalEntry, MixJournal},
    types::{PlaylistRef, Submission, TrackId, TrackList},
    utils,
};

/// Supplies the current track IDs of a playlist, in playlist order.
pub trait TrackSource {
    fn fetch_track_ids(
        &self,
        playlist: &PlaylistRef,
    ) -> impl Future<Output = Res<TrackList>> + Send;
}

/// Replaces the contents of a playlist with the given track IDs.
pub trait TrackSink {
    fn replace_track_ids(
        &self,
        playlist: &PlaylistRef,
        tracks: &[TrackId],
    ) -> impl Future<Output = Res<()>> + Send;
}

#[derive(Debug, Clone)]
pub struct MixReport {
    pub mix_id: String,
    pub source_lengths: Vec<usize>,
    pub combined_len: usize,
    pub elapsed: Duration,
}

/// Runs one mix from start to finish.
///
/// Fetches every source playlist in submission order, combines them with a
/// generator owned by this mix and writes the result to the destination. Any
/// fetch or write failure ends the mix with that error. Nothing is written when
/// a fetch fails.
///
/// With `seed` set the shuffle is reproducible, otherwise the generator is
/// seeded from the OS.
pub async fn run_mix<S>(
    store: &S,
    submission: &Submission,
    seed: Option<u64>,
    journal: &mut MixJournal,
) -> Res<MixReport>
where
    S: TrackSource + TrackSink + Sync,
{
    let started = Instant::now();
    utils::validate_submission(submission)?;

    let source_ids: Vec<&str> = submission
        .source_lists
        .iter()
        .map(|list| list.id.as_str())
        .collect();
    let options = &submission.options;
    journal.info(format!(
        "mixing [{}] into {}",
        source_ids.join(", "),
        submission.dest_list.id
    ));
    journal.info(format!(
        "round robin: {}, shuffle: {}, dedup: {}, pad: {}",
        options.round_robin, options.shuffle, options.dedup, options.pad
    ));

    let mut source_lists: Vec<TrackList> = Vec::with_capacity(submission.source_lists.len());
    for source in &submission.source_lists {
        let track_ids = store
            .fetch_track_ids(source)
            .await
            .map_err(|e| format!("failed to fetch playlist {}: {}", source.id, e))?;
        journal.info(format!("fetched {} tracks from {}", track_ids.len(), source.id));
        source_lists.push(track_ids);
    }
    let source_lengths: Vec<usize> = source_lists.iter().map(Vec::len).collect();

    let combined = {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        engine::combine(source_lists, options, &mut rng)?
    };

    store
        .replace_track_ids(&submission.dest_list, &combined)
        .await
        .map_err(|e| format!("failed to write playlist {}: {}", submission.dest_list.id, e))?;

    let report = MixReport {
        mix_id: journal.mix_id().to_string(),
        source_lengths,
        combined_len: combined.len(),
        elapsed: started.elapsed(),
    };
    journal.success(format!(
        "wrote {} tracks to {} in {:?}",
        report.combined_len, submission.dest_list.id, report.elapsed
    ));

    Ok(report)
}

/// Starts a mix in the background and returns its ID right away.
///
/// The mix runs on its own task. The outer task is the failure boundary: it
/// waits for the mix, logs errors and panics through the mix journal and never
/// hands them back to whoever submitted the mix. A panic is logged after the
/// lines the mix had already written, together with its message. The returned
/// handle resolves to the flushed journal once the outcome has been logged.
pub fn spawn_mix<S>(
    store: Arc<S>,
    submission: Submission,
    seed: Option<u64>,
) -> (String, JoinHandle<Vec<JournalEntry>>)
where
    S: TrackSource + TrackSink + Send + Sync + 'static,
{
    let mix_id = utils::generate_mix_id();
    let mut journal = MixJournal::new(mix_id.clone());

    let handle = tokio::spawn(async move {
        let mut mix_journal = journal.clone();
        let job = tokio::spawn(async move {
            let result = run_mix(store.as_ref(), &submission, seed, &mut mix_journal).await;
            if let Err(e) = result {
                mix_journal.warning(format!("mix failed: {}", e));
            }
        });

        if let Err(e) = job.await {
            journal.warning(abort_message(e));
        }
        journal.flush()
    });

    (mix_id, handle)
}

fn abort_message(e: JoinError) -> String {
    if !e.is_panic() {
        return format!("mix task was cancelled: {}", e);
    }

    let payload = e.into_panic();
    let reason = payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned());
    match reason {
        Some(reason) => format!("mix panicked and was aborted: {}", reason),
        None => "mix panicked and was aborted".to_string(),
    }
}
