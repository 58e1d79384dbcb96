//! In-memory result set with periodic CSV snapshots.

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::config::HarvestConfig;
use crate::record::{PokemonRecord, COLUMNS};

/// Owns the accumulated records for one run.
#[derive(Debug)]
pub struct Persister {
    records: Vec<PokemonRecord>,
    checkpoint_every: usize,
    backup_path: PathBuf,
    final_path: PathBuf,
}

impl Persister {
    pub fn new(config: &HarvestConfig) -> Self {
        Self {
            records: Vec::new(),
            checkpoint_every: config.checkpoint_every,
            backup_path: config.backup_path(),
            final_path: config.final_path(),
        }
    }

    /// Append a record. No deduplication.
    pub fn push(&mut self, record: PokemonRecord) {
        self.records.push(record);
    }

    pub fn row_count(&self) -> usize {
        self.records.len()
    }

    /// Whether a backup is due after the item at 1-indexed `position`.
    pub fn checkpoint_due(&self, position: usize) -> bool {
        self.checkpoint_every > 0 && position > 0 && position % self.checkpoint_every == 0
    }

    /// Overwrite the backup table with everything accumulated so far.
    pub fn write_backup(&self) -> Result<&Path> {
        write_table(&self.backup_path, &self.records)?;
        Ok(&self.backup_path)
    }

    /// Write the final table.
    pub fn write_final(&self) -> Result<&Path> {
        write_table(&self.final_path, &self.records)?;
        Ok(&self.final_path)
    }
}

/// Write `records` as CSV to `path`, replacing any existing file.
///
/// The header row is always written, even for an empty result set. The
/// table is staged in a sibling temp file and renamed into place.
pub fn write_table(path: &Path, records: &[PokemonRecord]) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let staged = NamedTempFile::new_in(&dir)
        .with_context(|| format!("Failed to create temp file in {}", dir.display()))?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(staged);
    writer
        .write_record(COLUMNS)
        .context("Failed to write CSV header")?;
    for record in records {
        writer
            .serialize(record.to_row())
            .with_context(|| format!("Failed to write row for {}", record.name))?;
    }

    let mut staged = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV: {}", e.error()))?;
    staged.flush().context("Failed to flush CSV")?;
    staged
        .persist(path)
        .with_context(|| format!("Failed to save {}", path.display()))?;

    Ok(())
}
