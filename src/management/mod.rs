mod auth;
mod journal;
mod mix;

pub use auth::TokenManager;
pub use journal::JournalEntry;
pub use journal::JournalLevel;
pub use journal::MixJournal;
pub use mix::MixReport;
pub use mix::TrackSink;
pub use mix::TrackSource;
pub use mix::run_mix;
pub use mix::spawn_mix;
