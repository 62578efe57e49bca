// WHY: Run-level counters for batch resolution, written as JSON on request
// Lets callers audit how often each heuristic fired across a phrase list

use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use tokio::fs;

use crate::article::{Article, Reason, Resolution};
use crate::reader::ReadStats;

/// Aggregate statistics for one CLI run
#[derive(Serialize, Debug, Default, Clone)]
pub struct RunStats {
    /// Seconds since the Unix epoch when the run started
    pub run_start: u64,
    pub phrases_resolved: u64,
    pub a_count: u64,
    pub an_count: u64,
    /// Phrases decided by letter-name reading
    pub initialisms: u64,
    /// Phrases decided by a silent-consonant or consonant-sound rule
    pub exceptions: u64,
    /// Empty or whitespace-only phrases
    pub empty_inputs: u64,
    pub sources: Vec<ReadStats>,
    pub total_time_ms: u64,
}

impl RunStats {
    pub fn new() -> Self {
        let run_start = std::time::SystemTime::now()
            .duration_since(std::time::SystemTime::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        Self {
            run_start,
            ..Default::default()
        }
    }

    /// Count one resolved phrase
    pub fn record(&mut self, resolution: &Resolution<'_>) {
        self.phrases_resolved += 1;
        match resolution.article {
            Article::A => self.a_count += 1,
            Article::An => self.an_count += 1,
        }
        match resolution.reason {
            Reason::Initialism { .. } => self.initialisms += 1,
            Reason::EmptyInput => self.empty_inputs += 1,
            reason if reason.is_exception() => self.exceptions += 1,
            _ => {}
        }
    }

    pub fn add_source(&mut self, stats: ReadStats) {
        self.sources.push(stats);
    }

    /// Sources that reported a read error
    pub fn failed_sources(&self) -> usize {
        self.sources.iter().filter(|s| s.read_error.is_some()).count()
    }

    /// Write stats as pretty JSON
    pub async fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        fs::write(path, content).await?;
        Ok(())
    }
}
