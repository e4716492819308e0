use crate::core::errors::Result;

/// Port for the tabular reader that consumes validated text.
///
/// Only the first record is ever requested by the pipeline.
pub trait RecordReader: Send + Sync {
    /// Read the first record of `content`, split on `delimiter`.
    fn read_header(&self, content: &[u8], delimiter: u8) -> Result<Vec<String>>;

    /// Human-readable format name (e.g. "csv").
    fn format(&self) -> &str;
}
