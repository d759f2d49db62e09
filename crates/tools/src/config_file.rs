//! Optional TOML settings for the command-line tools.
//!
//! ```toml
//! seed = 1234
//!
//! [generator]
//! size = 32
//! guard_count = 6
//!
//! [layout]
//! cell_size = 2.0
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use dungeon::{GeneratorConfig, WorldLayout};
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ToolConfig {
    pub seed: Option<u64>,
    pub generator: GeneratorConfig,
    pub layout: WorldLayout,
}

impl ToolConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid config file: {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn empty_file_yields_defaults() {
        let config = ToolConfig::parse("").expect("parse");
        assert_eq!(config, ToolConfig::default());
        assert_eq!(config.generator.walker_count, 2);
        assert_eq!(config.layout.cell_size, 2.0);
    }

    #[test]
    fn partial_tables_keep_remaining_defaults() {
        let config = ToolConfig::parse(
            "seed = 77\n[generator]\nsize = 35\nguard_count = 4\n[layout]\ncell_size = 1.5\n",
        )
        .expect("parse");

        assert_eq!(config.seed, Some(77));
        assert_eq!(config.generator.size, 35);
        assert_eq!(config.generator.guard_count, 4);
        assert_eq!(config.generator.walker_count, 2);
        assert_eq!(config.layout.cell_size, 1.5);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(ToolConfig::parse("[generator]\nwalkers = 3\n").is_err());
        assert!(ToolConfig::parse("colour = \"red\"\n").is_err());
    }

    #[test]
    fn load_reads_from_disk_and_reports_missing_files() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("dungeon.toml");
        fs::write(&path, "[generator]\nsize = 44\n").expect("write");

        let config = ToolConfig::load(&path).expect("load");
        assert_eq!(config.generator.size, 44);

        let missing = ToolConfig::load(&dir.path().join("absent.toml"));
        let message = format!("{:#}", missing.expect_err("missing file should fail"));
        assert!(message.contains("absent.toml"), "error should name the file: {message}");
    }
}
