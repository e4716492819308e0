use std::path::Path;

use crate::cli::context::Settings;
use crate::core::errors::Result;

/// Execute the `pgp-ingest header` command.
///
/// Prints the first record of `file`, one field per line, or as a JSON
/// array when `json` is set.
pub fn execute(file: &Path, json: bool, settings: Settings) -> Result<()> {
    let delimiter = settings.delimiter;
    let service = super::crypto_helpers::build_service(settings, file)?;

    let header = service.ingest(file, delimiter)?;

    if json {
        let encoded = serde_json::to_string(&header).map_err(std::io::Error::from)?;
        println!("{encoded}");
    } else {
        for field in &header {
            println!("{field}");
        }
    }

    Ok(())
}
