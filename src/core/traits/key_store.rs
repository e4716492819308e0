use std::path::Path;

use crate::core::errors::Result;
use crate::core::models::private_key::PrivateKey;

/// Port for loading private keys from durable storage.
pub trait KeyStore: Send + Sync {
    /// Read and parse the single key entity stored at `path`.
    ///
    /// The file handle is released before this returns, on every path.
    fn load_private_key(&self, path: &Path) -> Result<PrivateKey>;
}
