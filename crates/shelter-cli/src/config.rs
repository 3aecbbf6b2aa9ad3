//! Run configuration: defaults, an optional TOML file, then CLI overrides.
//!
//! ```toml
//! input = "./origin_db/main_animals.csv"
//! database = "./animals.db"
//! animal_dedupe = "by-id"   # or "by-value"
//! escape_names = true
//! replace = false
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use shelter_ingest::DEFAULT_INPUT_PATH;
use shelter_model::{AnimalDedupe, EscapeMode, NormalizeOptions};
use shelter_store::{DEFAULT_DATABASE_PATH, LoadMode};

use crate::pipeline::PipelineRequest;

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "shelter-normalizer.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Values read from a config file; unset fields fall back to defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub input: Option<PathBuf>,
    pub database: Option<PathBuf>,
    pub animal_dedupe: Option<AnimalDedupe>,
    pub escape_names: Option<bool>,
    pub replace: Option<bool>,
}

/// Values given on the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub input: Option<PathBuf>,
    pub database: Option<PathBuf>,
    pub animal_dedupe: Option<AnimalDedupe>,
    pub no_escape_names: bool,
    pub replace: bool,
    pub dry_run: bool,
}

/// Load the config file.
///
/// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`] in
/// `search_dir` is used if present, otherwise defaults apply.
pub fn load_config(explicit: Option<&Path>, search_dir: &Path) -> Result<FileConfig, ConfigError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let candidate = search_dir.join(DEFAULT_CONFIG_FILE);
            if !candidate.is_file() {
                debug!("no config file found, using defaults");
                return Ok(FileConfig::default());
            }
            candidate
        }
    };
    let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    let config = toml::from_str(&contents).map_err(|source| ConfigError::Toml {
        path: path.clone(),
        source,
    })?;
    debug!(path = %path.display(), "loaded config file");
    Ok(config)
}

/// Merge file values and CLI overrides; the command line wins.
pub fn resolve(file: FileConfig, overrides: Overrides) -> PipelineRequest {
    let escape = if overrides.no_escape_names || file.escape_names == Some(false) {
        EscapeMode::Verbatim
    } else {
        EscapeMode::DoubleQuotes
    };
    let animal_dedupe = overrides
        .animal_dedupe
        .or(file.animal_dedupe)
        .unwrap_or_default();
    let load_mode = if overrides.replace || file.replace.unwrap_or(false) {
        LoadMode::Replace
    } else {
        LoadMode::Append
    };
    PipelineRequest {
        input: overrides
            .input
            .or(file.input)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_PATH)),
        database: overrides
            .database
            .or(file.database)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE_PATH)),
        options: NormalizeOptions {
            animal_dedupe,
            escape,
        },
        load_mode,
        dry_run: overrides.dry_run,
    }
}
