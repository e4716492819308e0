use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::core::errors::{IngestError, Result};
use crate::core::models::ingest_mode::IngestMode;

/// Environment variable read for the passphrase unless the config names another.
pub const DEFAULT_PASSPHRASE_ENV: &str = "PGP_INGEST_PASSPHRASE";

/// Suffix marking a file as plaintext.
pub const DEFAULT_PLAINTEXT_SUFFIX: &str = ".csv";

pub const DEFAULT_DELIMITER: &str = ";";

/// Top-level configuration read from `config.toml`.
///
/// Every field is optional. The passphrase itself is never read from
/// this file, only the name of the environment variable that holds it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub key: KeySection,
    pub input: InputSection,
}

impl AppConfig {
    /// Load and validate the configuration at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(IngestError::InvalidConfig {
                detail: format!("config file {} not found", path.display()),
            });
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content).map_err(|e| IngestError::InvalidConfig {
            detail: format!("Failed to parse {}: {e}", path.display()),
        })?;

        validate_suffix(&config.input.plaintext_suffix)?;
        parse_delimiter(&config.input.delimiter)?;

        Ok(config)
    }

    /// Load `explicit` if given, else the per-user default file if it exists,
    /// else built-in defaults.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Per-user config location.
    ///
    /// - Linux: `~/.config/pgp-ingest/config.toml`
    /// - macOS: `~/Library/Application Support/pgp-ingest/config.toml`
    /// - Windows: `%APPDATA%/pgp-ingest/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("pgp-ingest").join("config.toml"))
    }
}

/// The `[key]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KeySection {
    /// Armored private key file.
    pub path: Option<PathBuf>,
    /// Name of the environment variable holding the passphrase.
    pub passphrase_env: String,
}

impl Default for KeySection {
    fn default() -> Self {
        Self {
            path: None,
            passphrase_env: DEFAULT_PASSPHRASE_ENV.into(),
        }
    }
}

/// The `[input]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputSection {
    pub plaintext_suffix: String,
    pub delimiter: String,
    pub mode: IngestMode,
}

impl Default for InputSection {
    fn default() -> Self {
        Self {
            plaintext_suffix: DEFAULT_PLAINTEXT_SUFFIX.into(),
            delimiter: DEFAULT_DELIMITER.into(),
            mode: IngestMode::default(),
        }
    }
}

/// Turn a one-character string into a field delimiter byte.
///
/// Must be a single ASCII character other than a quote or line break.
pub fn parse_delimiter(raw: &str) -> Result<u8> {
    let invalid = |why: &str| IngestError::InvalidConfig {
        detail: format!("delimiter {raw:?} {why}"),
    };

    let mut chars = raw.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return Err(invalid("must be exactly one character"));
    };

    if !c.is_ascii() {
        return Err(invalid("must be an ASCII character"));
    }

    if matches!(c, '"' | '\r' | '\n') {
        return Err(invalid("cannot be a quote or line break"));
    }

    Ok(c as u8)
}

/// Reject an empty plaintext suffix, which would classify every file as plaintext.
pub fn validate_suffix(suffix: &str) -> Result<()> {
    if suffix.is_empty() {
        return Err(IngestError::InvalidConfig {
            detail: "plaintext suffix cannot be empty".into(),
        });
    }
    Ok(())
}
