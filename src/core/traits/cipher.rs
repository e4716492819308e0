use std::io::Read;

use crate::core::errors::Result;
use crate::core::models::plaintext::PlaintextReader;

/// Port for decryption backends.
///
/// Implementations live in `adapters::cipher` (e.g. `PgpDecryptor`).
/// One interface, two call shapes: `decrypt_reader` consumes an
/// incremental byte source, `decrypt` takes a full buffer. Both must yield
/// byte-identical plaintext for the same input.
pub trait Decryptor: Send + Sync {
    /// Decrypt everything `source` yields into a single-pass plaintext reader.
    fn decrypt_reader<R: Read>(&self, source: R) -> Result<PlaintextReader>;

    /// Decrypt a fully buffered ciphertext and materialize the plaintext.
    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let mut body = self.decrypt_reader(ciphertext)?;
        let mut plaintext = Vec::with_capacity(body.remaining());
        body.read_to_end(&mut plaintext)?;
        Ok(plaintext)
    }

    /// Human-readable name of this backend (e.g. "openpgp").
    fn name(&self) -> &str;
}
