use std::fmt;

use secrecy::{ExposeSecret, SecretString};

/// The single configured credential used to unlock session keys.
///
/// Never printed: `Debug` is redacted and there is no `Display`.
pub struct Passphrase(SecretString);

impl Passphrase {
    pub fn new(value: impl Into<String>) -> Self {
        Self(SecretString::from(value.into()))
    }

    /// Hand out a copy of the secret for one unlock attempt.
    pub(crate) fn reveal(&self) -> String {
        self.0.expose_secret().to_string()
    }
}

impl fmt::Debug for Passphrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Passphrase([REDACTED])")
    }
}
