//! Sequential list -> enrich -> persist run.

use anyhow::Result;
use chrono::{DateTime, Utc};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use tracing::info;

use crate::api::PokeApi;
use crate::config::HarvestConfig;
use crate::enricher::Enricher;
use crate::lister::list_names;
use crate::persister::Persister;

/// Outcome of a completed run.
#[derive(Debug, Clone)]
pub struct HarvestSummary {
    pub total: usize,
    pub retrieved: usize,
    pub failed: usize,
    pub checkpoints: usize,
    pub output: PathBuf,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

pub struct Harvester<A: PokeApi> {
    api: A,
    config: HarvestConfig,
}

impl<A: PokeApi> Harvester<A> {
    pub fn new(api: A, config: HarvestConfig) -> Self {
        Self { api, config }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Process the whole catalog.
    ///
    /// Per-entity failures are logged and skipped. Only table writes abort the run.
    pub async fn run(&self) -> Result<HarvestSummary> {
        let started_at = Utc::now();
        let names = list_names(&self.api, self.config.limit).await;
        let total = names.len();

        let enricher = Enricher::new(&self.api);
        let mut persister = Persister::new(&self.config);
        let mut checkpoints = 0;
        let pb = progress_bar(total as u64, self.config.progress);

        for (idx, name) in names.iter().enumerate() {
            let position = idx + 1;

            // Log lines are printed above the bar, not through it.
            match enricher.enrich(name).await {
                Ok(record) => {
                    persister.push(record);
                    pb.suspend(|| info!("{position}/{total} - {name} - Data Retrieved!"));
                }
                Err(_) => {
                    pb.suspend(|| info!("{position}/{total} - {name} - Failed to retrieve"));
                }
            }
            pb.inc(1);

            if persister.checkpoint_due(position) {
                let path = persister.write_backup()?;
                checkpoints += 1;
                pb.suspend(|| {
                    info!(rows = persister.row_count(), "Backup saved to '{}'", path.display())
                });
            }

            if !self.config.pause.is_zero() {
                tokio::time::sleep(self.config.pause).await;
            }
        }
        pb.finish_and_clear();

        let output = persister.write_final()?.to_path_buf();
        info!(rows = persister.row_count(), "All data saved to '{}'", output.display());

        let summary = HarvestSummary {
            total,
            retrieved: persister.row_count(),
            failed: total - persister.row_count(),
            checkpoints,
            output,
            started_at,
            finished_at: Utc::now(),
        };
        info!(
            total = summary.total,
            retrieved = summary.retrieved,
            failed = summary.failed,
            checkpoints = summary.checkpoints,
            elapsed_secs = (summary.finished_at - summary.started_at).num_seconds(),
            "Harvest complete"
        );

        Ok(summary)
    }
}

/// Catalog progress bar. Hidden when disabled; indicatif also skips drawing
/// when stderr is not a terminal.
pub fn progress_bar(total: u64, enabled: bool) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(total);
    let style = ProgressStyle::default_bar()
        .template("{msg} [{bar:40.green/dim}] {pos}/{len} [{elapsed_precise}<{eta_precise}]")
        .map(|style| style.progress_chars("█▓░"))
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    pb.set_style(style);
    pb.set_message("Collecting Pokémon data");
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_progress_bar_is_hidden() {
        let pb = progress_bar(1200, false);
        assert!(pb.is_hidden());
    }

    #[test]
    fn progress_bar_tracks_catalog_length() {
        let pb = progress_bar(3, true);
        pb.inc(1);
        pb.inc(1);

        assert_eq!(pb.length(), Some(3));
        assert_eq!(pb.position(), 2);
        assert_eq!(pb.message(), "Collecting Pokémon data");
    }
}
