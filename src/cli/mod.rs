pub mod commands;
pub mod context;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::models::ingest_mode::IngestMode;

/// Decrypt OpenPGP-protected CSV exports and read their header row.
#[derive(Parser, Debug)]
#[command(name = "pgp-ingest", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the config file
    #[arg(long, global = true, env = "PGP_INGEST_CONFIG")]
    pub config: Option<PathBuf>,

    /// ASCII-armored private key file
    #[arg(long, global = true)]
    pub key: Option<PathBuf>,

    /// Passphrase for the key (prefer the environment variable)
    #[arg(long, global = true, env = "PGP_INGEST_PASSPHRASE", hide_env_values = true)]
    pub passphrase: Option<String>,

    /// File name suffix that marks a file as plaintext
    #[arg(long, global = true)]
    pub suffix: Option<String>,

    /// Single-character field delimiter
    #[arg(long, global = true)]
    pub delimiter: Option<String>,

    /// Pipeline shape: buffered or streaming
    #[arg(long, global = true)]
    pub mode: Option<IngestMode>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode: only show errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the header row (first record) of a file
    Header {
        /// File to read (decrypted unless it ends in the plaintext suffix)
        file: PathBuf,
        /// Print the fields as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Decrypt a file, check it is text, and write it out
    Decrypt {
        /// File to decrypt
        file: PathBuf,
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
