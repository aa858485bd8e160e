use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".locxrc.json";

/// Scratch directory name under the system temp dir when none is configured.
pub const DEFAULT_SCRATCH_DIR_NAME: &str = "locx";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scratch_dir: Option<String>,
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
    #[serde(default)]
    pub extra_key_fields: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_ttl_secs: Option<u64>,
}

fn default_ignores() -> Vec<String> {
    vec!["**/__MACOSX/**".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scratch_dir: None,
            ignores: default_ignores(),
            extra_key_fields: Vec::new(),
            session_ttl_secs: None,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` is invalid.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        if self.session_ttl_secs == Some(0) {
            anyhow::bail!("'sessionTtlSecs' must be greater than zero");
        }

        Ok(())
    }

    /// Root under which each session gets its own scratch directory.
    pub fn scratch_path(&self) -> PathBuf {
        match &self.scratch_dir {
            Some(dir) => PathBuf::from(dir),
            None => std::env::temp_dir().join(DEFAULT_SCRATCH_DIR_NAME),
        }
    }

    pub fn session_ttl(&self) -> Option<Duration> {
        self.session_ttl_secs.map(Duration::from_secs)
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            tracing::debug!(path = %path.display(), "loaded config");
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
