use crate::core::errors::{IngestError, Result};
use crate::core::traits::record_reader::RecordReader;

/// Delimiter-aware CSV reader that extracts only the first record.
///
/// Quoting follows RFC 4180 (`"a;b"` is one field). Records of uneven
/// length are tolerated since only the header is ever read.
pub struct CsvRecordReader;

impl RecordReader for CsvRecordReader {
    fn read_header(&self, content: &[u8], delimiter: u8) -> Result<Vec<String>> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .flexible(true)
            .from_reader(content);

        let mut record = csv::StringRecord::new();
        let found = reader
            .read_record(&mut record)
            .map_err(|e| IngestError::TabularParse {
                reason: e.to_string(),
            })?;

        if !found {
            return Err(IngestError::TabularParse {
                reason: "input holds no records".into(),
            });
        }

        Ok(record.iter().map(str::to_string).collect())
    }

    fn format(&self) -> &str {
        "csv"
    }
}
