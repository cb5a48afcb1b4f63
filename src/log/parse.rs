use crate::error::{Error, Result};
use crate::log::record::{DST_PORT_FIELD, LogRecord, MIN_FIELDS, PROTOCOL_FIELD};
use crate::text::split_fields;
use std::path::Path;

/// Decode one flow log line.
///
/// Expected fields (single-space separated, case-insensitive):
/// version account-id interface-id srcaddr dstaddr srcport dstport protocol ...
///
/// Example:
/// 2 123456789012 eni-0a1b2c3d 10.0.1.201 198.51.100.2 443 49153 6 ...
///
/// `source` and `lno` only locate the line in the error.
pub fn parse_record(line: &str, source: &Path, lno: usize) -> Result<LogRecord> {
    let line = line.to_lowercase();
    let fields = split_fields(&line, ' ');

    if fields.len() < MIN_FIELDS {
        return Err(Error::InvalidLogFileFormat {
            path: source.to_path_buf(),
            line: lno,
            found: fields.len(),
        });
    }

    Ok(LogRecord {
        dst_port: fields[DST_PORT_FIELD].to_string(),
        protocol: fields[PROTOCOL_FIELD].to_string(),
    })
}
