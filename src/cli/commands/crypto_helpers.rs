use std::path::Path;

use crate::adapters::cipher::pgp_backend::PgpDecryptor;
use crate::adapters::key_stores::armored_key_store::ArmoredKeyStore;
use crate::adapters::parsers::csv_record_reader::CsvRecordReader;
use crate::cli::context::Settings;
use crate::core::errors::{IngestError, Result};
use crate::core::services::ingest_service::IngestService;

/// Build the ingest service for `source`.
///
/// The key is only loaded when `source` actually needs decrypting, so
/// plaintext inputs work without any key configured.
pub fn build_service(
    settings: Settings,
    source: &Path,
) -> Result<IngestService<PgpDecryptor, CsvRecordReader>> {
    let mut service = IngestService {
        decryptor: None,
        reader: CsvRecordReader,
        plaintext_suffix: settings.plaintext_suffix,
        mode: settings.mode,
    };

    if !service.needs_decryption(source) {
        return Ok(service);
    }

    let key_path = settings.key_path.ok_or_else(|| IngestError::InvalidConfig {
        detail: format!(
            "{} needs decrypting but no private key is configured\n\n  \
             Solutions:\n    \
             → Pass --key <path-to-armored-key>\n    \
             → Or set [key] path in the config file",
            source.display()
        ),
    })?;

    let passphrase = settings
        .passphrase
        .ok_or_else(|| IngestError::InvalidConfig {
            detail: format!(
                "{} needs decrypting but no passphrase is configured\n\n  \
                 Solutions:\n    \
                 → Export PGP_INGEST_PASSPHRASE (or the variable named in [key] passphrase_env)\n    \
                 → Or pass --passphrase",
                source.display()
            ),
        })?;

    service.decryptor = Some(PgpDecryptor::from_key_file(
        &ArmoredKeyStore::new(),
        &key_path,
        passphrase,
    )?);

    Ok(service)
}
