use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::app_config::{self, AppConfig};
use crate::core::errors::Result;
use crate::core::models::ingest_mode::IngestMode;
use crate::core::models::passphrase::Passphrase;

/// Effective settings for one run: flags over environment over config
/// file over defaults.
#[derive(Debug)]
pub struct Settings {
    pub key_path: Option<PathBuf>,
    pub passphrase: Option<Passphrase>,
    pub plaintext_suffix: String,
    pub delimiter: u8,
    pub mode: IngestMode,
}

impl Settings {
    /// Resolve settings from parsed arguments and the process environment.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let config = AppConfig::load_or_default(cli.config.as_deref())?;
        Self::merge(cli, &config, |name| std::env::var(name).ok())
    }

    /// Merge flags with `config`, looking up environment variables via `env`.
    pub fn merge<E>(cli: &Cli, config: &AppConfig, env: E) -> Result<Self>
    where
        E: Fn(&str) -> Option<String>,
    {
        let plaintext_suffix = cli
            .suffix
            .clone()
            .unwrap_or_else(|| config.input.plaintext_suffix.clone());
        app_config::validate_suffix(&plaintext_suffix)?;

        let delimiter = app_config::parse_delimiter(
            cli.delimiter.as_deref().unwrap_or(&config.input.delimiter),
        )?;

        // --passphrase already covers $PGP_INGEST_PASSPHRASE through clap
        let passphrase = cli
            .passphrase
            .clone()
            .or_else(|| env(&config.key.passphrase_env))
            .map(Passphrase::new);

        Ok(Self {
            key_path: cli.key.clone().or_else(|| config.key.path.clone()),
            passphrase,
            plaintext_suffix,
            delimiter,
            mode: cli.mode.unwrap_or(config.input.mode),
        })
    }
}
