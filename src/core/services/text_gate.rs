use std::path::Path;

use crate::core::errors::{IngestError, Result};

/// Whether the whole buffer is well-formed UTF-8.
///
/// Needs the complete buffer: a multi-byte sequence cut at the end of the
/// buffer counts as invalid.
pub fn is_valid_text(bytes: &[u8]) -> bool {
    std::str::from_utf8(bytes).is_ok()
}

/// Reject non-text payloads before anything downstream sees them.
///
/// No re-encoding and no partial recovery.
pub fn ensure_text(bytes: &[u8], origin: &Path) -> Result<()> {
    if is_valid_text(bytes) {
        Ok(())
    } else {
        Err(IngestError::NonTextPayload {
            path: origin.to_path_buf(),
        })
    }
}
