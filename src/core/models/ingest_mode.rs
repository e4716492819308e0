use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// How the pipeline acquires the bytes before the text check.
///
/// Both shapes must produce the same result for the same input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IngestMode {
    /// Read the whole file, then decrypt the buffer.
    Buffered,
    /// Decrypt from the open file handle; buffer only for the text check.
    #[default]
    Streaming,
}

impl FromStr for IngestMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "buffered" => Ok(Self::Buffered),
            "streaming" => Ok(Self::Streaming),
            other => Err(format!(
                "unknown mode '{other}'. Use 'buffered' or 'streaming'."
            )),
        }
    }
}

impl fmt::Display for IngestMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buffered => f.write_str("buffered"),
            Self::Streaming => f.write_str("streaming"),
        }
    }
}
