use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    config, error,
    management::{MixJournal, run_mix},
    spotify::SpotifyLibrary,
    success,
    types::{MixOptions, PlaylistRef, Submission},
    utils,
};

/// Mixes `sources` into `dest` in the foreground.
///
/// `seed` overrides `MIXER_SEED` for this run.
pub async fn mix(sources: Vec<String>, dest: String, options: MixOptions, seed: Option<u64>) {
    let submission = Submission {
        source_lists: sources.into_iter().map(PlaylistRef::new).collect(),
        dest_list: PlaylistRef::new(dest),
        options,
    };
    if let Err(e) = utils::validate_submission(&submission) {
        error!("Invalid mix: {}", e);
    }

    let library = match SpotifyLibrary::load().await {
        Ok(library) => library,
        Err(e) => error!("{}", e),
    };

    let pb = ProgressBar::new_spinner();
    pb.set_message(format!(
        "Mixing {} playlists into {}...",
        submission.source_lists.len(),
        submission.dest_list.id
    ));
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let mut journal = MixJournal::new(utils::generate_mix_id());
    let result = run_mix(
        &library,
        &submission,
        seed.or_else(config::mix_seed),
        &mut journal,
    )
    .await;
    pb.finish_and_clear();
    journal.flush();

    match result {
        Ok(report) => success!(
            "Mixed {} tracks from {} playlists in {:?}",
            report.combined_len,
            report.source_lengths.len(),
            report.elapsed
        ),
        Err(e) => error!("Mix failed: {}", e),
    }
}
