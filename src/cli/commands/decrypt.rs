use std::io::Write;
use std::path::Path;

use crate::cli::context::Settings;
use crate::cli::output;
use crate::core::errors::{IngestError, Result};

/// Execute the `pgp-ingest decrypt` command.
///
/// Runs every stage up to the text check and writes the validated
/// plaintext to `dest`, or to stdout when no destination is given.
pub fn execute(file: &Path, dest: Option<&Path>, settings: Settings) -> Result<()> {
    if dest.is_some_and(|dest| same_file(file, dest)) {
        return Err(IngestError::InvalidConfig {
            detail: "output path must differ from the input path".into(),
        });
    }

    let service = super::crypto_helpers::build_service(settings, file)?;

    if !service.needs_decryption(file) {
        output::warning(&format!(
            "{} ends in '{}' and is copied without decryption",
            file.display(),
            service.plaintext_suffix
        ));
    }

    let content = service.load_text(file)?;

    match dest {
        Some(dest) => {
            if dest.exists() {
                output::warning(&format!("Overwriting {}", dest.display()));
            }
            std::fs::write(dest, &content)?;
            output::success(&format!("Decrypted {}", file.display()));
            output::detail(&format!("Destination: {}", dest.display()));
            output::detail(&format!("{} bytes of UTF-8 text", content.len()));
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&content)?;
            stdout.flush()?;
        }
    }

    Ok(())
}

/// Whether `dest` names `file`, also through `./`, `..` or symlinks.
fn same_file(file: &Path, dest: &Path) -> bool {
    if file == dest {
        return true;
    }

    match (std::fs::canonicalize(file), std::fs::canonicalize(dest)) {
        (Ok(file), Ok(dest)) => file == dest,
        _ => false,
    }
}
