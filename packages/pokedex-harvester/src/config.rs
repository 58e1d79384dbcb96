use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = pokeapi_client::DEFAULT_BASE_URL;
pub const CATALOG_LIMIT: u32 = 1200;
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
pub const CHECKPOINT_EVERY: usize = 100;
pub const PAUSE_BETWEEN_ITEMS: Duration = Duration::from_secs(1);
pub const BACKUP_FILE: &str = "backup_pokemon.csv";
pub const FINAL_FILE: &str = "pokemon_data.csv";

/// Harvest run configuration.
///
/// `Default` is the fixed production setup and the only one the binary uses.
/// Nothing is read from the environment; the `with_*` builders exist for
/// tests that point a run at a scratch directory or a local server.
#[derive(Debug, Clone)]
pub struct HarvestConfig {
    pub base_url: String,
    pub limit: u32,
    pub timeout: Duration,
    pub checkpoint_every: usize,
    pub pause: Duration,
    pub output_dir: PathBuf,
    pub backup_file: String,
    pub final_file: String,
    pub progress: bool,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            limit: CATALOG_LIMIT,
            timeout: REQUEST_TIMEOUT,
            checkpoint_every: CHECKPOINT_EVERY,
            pause: PAUSE_BETWEEN_ITEMS,
            output_dir: PathBuf::from("."),
            backup_file: BACKUP_FILE.to_string(),
            final_file: FINAL_FILE.to_string(),
            progress: true,
        }
    }
}

impl HarvestConfig {
    pub fn with_output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.output_dir = dir.as_ref().to_path_buf();
        self
    }

    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_checkpoint_every(mut self, every: usize) -> Self {
        self.checkpoint_every = every;
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Draw the terminal progress bar (hidden when stderr is not a terminal anyway).
    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    pub fn backup_path(&self) -> PathBuf {
        self.output_dir.join(&self.backup_file)
    }

    pub fn final_path(&self) -> PathBuf {
        self.output_dir.join(&self.final_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixed_constants() {
        let config = HarvestConfig::default();

        assert_eq!(config.base_url, "https://pokeapi.co/api/v2");
        assert_eq!(config.limit, 1200);
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.checkpoint_every, 100);
        assert_eq!(config.pause, Duration::from_secs(1));
        assert_eq!(config.backup_path(), PathBuf::from("./backup_pokemon.csv"));
        assert_eq!(config.final_path(), PathBuf::from("./pokemon_data.csv"));
    }

    #[test]
    fn environment_does_not_change_defaults() {
        std::env::set_var("HARVEST_LIMIT", "3");
        std::env::set_var("HARVEST_PAUSE_MS", "0");
        std::env::set_var("POKEAPI_BASE_URL", "http://localhost:1");

        let config = HarvestConfig::default();

        assert_eq!(config.limit, 1200);
        assert_eq!(config.pause, Duration::from_secs(1));
        assert_eq!(config.base_url, "https://pokeapi.co/api/v2");
        assert!(config.progress);
    }

    #[test]
    fn builders_override_fields() {
        let config = HarvestConfig::default()
            .with_output_dir("/tmp/harvest")
            .with_pause(Duration::ZERO)
            .with_limit(3);

        assert_eq!(config.pause, Duration::ZERO);
        assert_eq!(config.limit, 3);
        assert_eq!(
            config.final_path(),
            PathBuf::from("/tmp/harvest/pokemon_data.csv")
        );
    }
}
