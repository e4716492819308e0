use std::io::{self, Read};
use std::path::Path;

use pgp::composed::Esk;
use pgp::{Deserializable, Message};
use tracing::debug;

use crate::core::errors::{IngestError, Result};
use crate::core::models::passphrase::Passphrase;
use crate::core::models::plaintext::PlaintextReader;
use crate::core::models::private_key::PrivateKey;
use crate::core::traits::cipher::Decryptor;
use crate::core::traits::key_store::KeyStore;

/// How the session key of a message is protected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Protection {
    /// Only passphrase-protected session key packets (`gpg --symmetric`).
    Symmetric,
    /// At least one session key wrapped to a public key.
    Asymmetric,
}

/// OpenPGP decryption backend bound to one private key and one passphrase.
///
/// Accepts binary (`gpg --encrypt`) and ASCII-armored (`gpg --encrypt
/// --armor`) messages. The passphrase is handed to the unlock step exactly
/// once per call and nothing derived from it survives the call.
///
/// The returned body is NOT checked against any signature it may carry.
pub struct PgpDecryptor {
    key: PrivateKey,
    passphrase: Passphrase,
}

impl PgpDecryptor {
    pub fn new(key: PrivateKey, passphrase: Passphrase) -> Self {
        Self { key, passphrase }
    }

    /// Load the key at `key_path` through `store` and bind it to `passphrase`.
    pub fn from_key_file<K: KeyStore>(
        store: &K,
        key_path: &Path,
        passphrase: Passphrase,
    ) -> Result<Self> {
        let key = store.load_private_key(key_path)?;
        Ok(Self::new(key, passphrase))
    }

    /// Parse, unlock and unpack one message read from `source`.
    fn open<R: Read>(&self, source: R) -> Result<Vec<u8>> {
        let message = read_message(source)?;
        let protection = protection_of(&message)?;

        debug!(?protection, "unlocking session key");
        let decrypted = self.unlock(&message, protection)?;

        let body = extract_body(decrypted)?;
        debug!(bytes = body.len(), "decrypted message body");
        Ok(body)
    }

    /// Single unlock attempt with the configured passphrase. No retry.
    fn unlock(&self, message: &Message, protection: Protection) -> Result<Message> {
        let passphrase = || self.passphrase.reveal();

        let decrypted = match protection {
            Protection::Symmetric => message.decrypt_with_password(passphrase),
            Protection::Asymmetric => message
                .decrypt(passphrase, &[self.key.as_secret_key()])
                .map(|(message, _key_ids)| message),
        };

        decrypted.map_err(|e| IngestError::DecryptionFailed {
            reason: e.to_string(),
        })
    }
}

impl Decryptor for PgpDecryptor {
    fn decrypt_reader<R: Read>(&self, source: R) -> Result<PlaintextReader> {
        Ok(PlaintextReader::new(self.open(source)?))
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.open(ciphertext)
    }

    fn name(&self) -> &str {
        "openpgp"
    }
}

/// Remembers the first read failure of the wrapped source.
///
/// rPGP folds I/O errors into its own error type; this keeps a failing
/// source reported as `Io` rather than as a malformed message.
struct WatchedSource<R> {
    inner: R,
    failure: Option<(io::ErrorKind, String)>,
}

impl<R: Read> Read for WatchedSource<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf).inspect_err(|e| {
            if self.failure.is_none() {
                self.failure = Some((e.kind(), e.to_string()));
            }
        })
    }
}

/// Parse one message, armored or binary, straight from `source`.
fn read_message<R: Read>(source: R) -> Result<Message> {
    let mut watched = WatchedSource {
        inner: source,
        failure: None,
    };

    let parsed = Message::from_reader_single(&mut watched).map(|(message, _headers)| message);

    parsed.map_err(|e| match watched.failure.take() {
        Some((kind, detail)) => IngestError::Io(io::Error::new(kind, detail)),
        None => IngestError::MalformedMessage {
            reason: e.to_string(),
        },
    })
}

fn protection_of(message: &Message) -> Result<Protection> {
    let Message::Encrypted { esk, .. } = message else {
        return Err(IngestError::MalformedMessage {
            reason: "message is not encrypted".into(),
        });
    };

    if esk.is_empty() {
        return Err(IngestError::MalformedMessage {
            reason: "encrypted message carries no session key packet".into(),
        });
    }

    if esk
        .iter()
        .all(|packet| matches!(packet, Esk::SymKeyEncryptedSessionKey(_)))
    {
        Ok(Protection::Symmetric)
    } else {
        Ok(Protection::Asymmetric)
    }
}

/// Peel compression layers and return the literal data.
///
/// A signed body is returned without checking the signature.
fn extract_body(mut message: Message) -> Result<Vec<u8>> {
    while matches!(message, Message::Compressed(_)) {
        message = message
            .decompress()
            .map_err(|e| IngestError::DecryptionFailed {
                reason: format!("decompression failed: {e}"),
            })?;
    }

    message
        .get_content()
        .map_err(|e| IngestError::DecryptionFailed {
            reason: e.to_string(),
        })?
        .ok_or_else(|| IngestError::MalformedMessage {
            reason: "decrypted message holds no literal data".into(),
        })
}
