use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::{debug, info};

use crate::core::errors::{IngestError, Result};
use crate::core::models::ingest_mode::IngestMode;
use crate::core::services::text_gate;
use crate::core::traits::cipher::Decryptor;
use crate::core::traits::record_reader::RecordReader;

/// Orchestrates open → classify → decrypt → text check → header read by
/// combining a `Decryptor` with a `RecordReader`.
///
/// The decryptor is optional: plaintext inputs never touch it, so a run
/// over plaintext files needs no key at all.
pub struct IngestService<D: Decryptor, P: RecordReader> {
    pub decryptor: Option<D>,
    pub reader: P,
    pub plaintext_suffix: String,
    pub mode: IngestMode,
}

impl<D: Decryptor, P: RecordReader> IngestService<D, P> {
    /// Whether `path` goes through the decryptor.
    ///
    /// Purely name based: anything not ending in the plaintext suffix is
    /// treated as encrypted, whatever its content.
    pub fn needs_decryption(&self, path: &Path) -> bool {
        !path
            .as_os_str()
            .to_string_lossy()
            .ends_with(self.plaintext_suffix.as_str())
    }

    /// Return the header record of the file at `path`.
    pub fn ingest(&self, path: &Path, delimiter: u8) -> Result<Vec<String>> {
        let content = self.load_text(path)?;

        let header = self.reader.read_header(&content, delimiter)?;
        debug!(
            format = self.reader.format(),
            fields = header.len(),
            "read header record"
        );
        Ok(header)
    }

    /// Run every stage before the tabular read and return validated text.
    pub fn load_text(&self, path: &Path) -> Result<Vec<u8>> {
        let encrypted = self.needs_decryption(path);
        info!(path = %path.display(), mode = %self.mode, encrypted, "loading input");

        let decryptor = if encrypted {
            let decryptor = self.decryptor_for(path)?;
            debug!(backend = decryptor.name(), "routing through decryptor");
            Some(decryptor)
        } else {
            None
        };

        let content = match self.mode {
            IngestMode::Buffered => Self::load_buffered(path, decryptor)?,
            IngestMode::Streaming => Self::load_streaming(path, decryptor)?,
        };

        text_gate::ensure_text(&content, path)?;
        debug!(bytes = content.len(), "content is valid text");
        Ok(content)
    }

    /// Read the whole file, then decrypt the buffer.
    fn load_buffered(path: &Path, decryptor: Option<&D>) -> Result<Vec<u8>> {
        let mut raw = Vec::new();
        open(path)?.read_to_end(&mut raw)?;

        match decryptor {
            Some(decryptor) => decryptor.decrypt(&raw),
            None => Ok(raw),
        }
    }

    /// Decrypt straight from the file handle; buffer only the output.
    fn load_streaming(path: &Path, decryptor: Option<&D>) -> Result<Vec<u8>> {
        let mut source = BufReader::new(open(path)?);
        let mut content = Vec::new();

        match decryptor {
            Some(decryptor) => {
                decryptor
                    .decrypt_reader(source)?
                    .read_to_end(&mut content)?;
            }
            None => {
                source.read_to_end(&mut content)?;
            }
        }

        Ok(content)
    }

    fn decryptor_for(&self, path: &Path) -> Result<&D> {
        self.decryptor
            .as_ref()
            .ok_or_else(|| IngestError::InvalidConfig {
                detail: format!(
                    "{} does not end in '{}' and must be decrypted, \
                     but no private key and passphrase are configured",
                    path.display(),
                    self.plaintext_suffix
                ),
            })
    }
}

fn open(path: &Path) -> Result<File> {
    if path.is_dir() {
        return Err(IngestError::NotFound {
            path: path.to_path_buf(),
        });
    }

    File::open(path).map_err(|_| IngestError::NotFound {
        path: path.to_path_buf(),
    })
}
