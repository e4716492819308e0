use std::fmt;
use std::sync::Arc;

use pgp::SignedSecretKey;

/// A parsed OpenPGP secret key entity (primary key, subkeys and user ids).
///
/// Immutable once loaded. Cloning shares the same key read-only, so one
/// loaded key can back several decryptors. It cannot be serialized back out.
#[derive(Clone)]
pub struct PrivateKey {
    inner: Arc<SignedSecretKey>,
}

impl PrivateKey {
    pub(crate) fn new(key: SignedSecretKey) -> Self {
        Self {
            inner: Arc::new(key),
        }
    }

    /// Borrow the underlying secret key for decryption.
    pub(crate) fn as_secret_key(&self) -> &SignedSecretKey {
        &self.inner
    }

    /// Number of secret subkeys attached to the primary key.
    pub fn subkey_count(&self) -> usize {
        self.inner.secret_subkeys.len()
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("subkeys", &self.subkey_count())
            .finish_non_exhaustive()
    }
}
