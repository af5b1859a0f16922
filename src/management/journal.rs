use std::{
    io::Write,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use chrono::{SecondsFormat, Utc};
use colored::Colorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JournalLevel {
    Info,
    Success,
    Warning,
}

pub type JournalEntry = (JournalLevel, String);

/// Log lines of one mix, written out as a single block.
///
/// Background mixes run concurrently, so writing line by line would interleave
/// their output. Lines are buffered here and [`MixJournal::flush`] writes them
/// while holding the stdout lock.
///
/// Clones share one buffer, so a clone kept outside a task still sees the
/// lines the task wrote before it died.
#[derive(Debug, Clone)]
pub struct MixJournal {
    mix_id: String,
    lines: Arc<Mutex<Vec<JournalEntry>>>,
}

impl MixJournal {
    pub fn new(mix_id: impl Into<String>) -> Self {
        Self {
            mix_id: mix_id.into(),
            lines: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn mix_id(&self) -> &str {
        &self.mix_id
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.buffer().push((JournalLevel::Info, message.into()));
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.buffer().push((JournalLevel::Success, message.into()));
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.buffer().push((JournalLevel::Warning, message.into()));
    }

    /// Snapshot of the lines buffered so far.
    pub fn lines(&self) -> Vec<JournalEntry> {
        self.buffer().clone()
    }

    /// Writes all buffered lines to stdout, clears the buffer and returns
    /// the lines written.
    pub fn flush(&mut self) -> Vec<JournalEntry> {
        let written: Vec<JournalEntry> = self.buffer().drain(..).collect();
        let stamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        let mut out = std::io::stdout().lock();
        for (level, message) in &written {
            let marker = match level {
                JournalLevel::Info => "o".blue().bold(),
                JournalLevel::Success => "✓".green().bold(),
                JournalLevel::Warning => "!".yellow().bold(),
            };
            // stdout going away is not worth failing a mix over
            let _ = writeln!(out, "[{}] {} mix {}: {}", marker, stamp, self.mix_id, message);
        }
        let _ = out.flush();

        written
    }

    // pushes and drains cannot stop half way, a poisoned buffer is still whole
    fn buffer(&self) -> MutexGuard<'_, Vec<JournalEntry>> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
