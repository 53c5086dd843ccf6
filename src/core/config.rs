//! Configuration management with layered hierarchy

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// fuelgen configuration with layered hierarchy
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default seed for reproducible runs
    pub seed: Option<u64>,

    /// Directory relative output paths are resolved against
    pub output_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from all sources, merging in priority order
    pub fn load() -> Self {
        let mut config = Config::default();

        // 1. Built-in defaults (already in Default impl)

        // 2. Global user config (~/.config/fuelgen/config.yaml)
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                if let Ok(contents) = std::fs::read_to_string(&global_path) {
                    if let Ok(global) = serde_yml::from_str::<Config>(&contents) {
                        config.merge(global);
                    }
                }
            }
        }

        // 3. Working-directory config (fuelgen.yaml)
        let local_path = Path::new("fuelgen.yaml");
        if local_path.exists() {
            if let Ok(contents) = std::fs::read_to_string(local_path) {
                if let Ok(local) = serde_yml::from_str::<Config>(&contents) {
                    config.merge(local);
                }
            }
        }

        // 4. Environment variables
        if let Ok(seed) = std::env::var("FUELGEN_SEED") {
            if let Ok(seed) = seed.parse() {
                config.seed = Some(seed);
            }
        }
        if let Ok(dir) = std::env::var("FUELGEN_OUTPUT_DIR") {
            config.output_dir = Some(PathBuf::from(dir));
        }

        config
    }

    /// Get the path to the global config file
    fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "fuelgen")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        if other.seed.is_some() {
            self.seed = other.seed;
        }
        if other.output_dir.is_some() {
            self.output_dir = other.output_dir;
        }
    }

    /// Resolve a relative output path against the configured directory
    pub fn resolve_output(&self, path: &Path) -> PathBuf {
        match &self.output_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path.to_path_buf(),
        }
    }
}
