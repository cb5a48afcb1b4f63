use crate::error::{Error, Result};
use crate::lookup::table::LookupTable;
use crate::text::{composite_key, split_fields};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// Open and parse a lookup table file.
pub fn load_lookup_table(path: &Path) -> Result<LookupTable> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let table = parse_lookup_table(BufReader::new(file), path)?;
    if table.is_empty() {
        debug!(path = %path.display(), "lookup table has no rows; every record will be untagged");
    }
    info!(path = %path.display(), entries = table.len(), "loaded lookup table");
    Ok(table)
}

/// Parse lookup table rows from `reader`; `source` is only used in errors.
///
/// Expected shape (first line is a header and always skipped):
/// dstport,protocol,tag
/// 25,tcp,sv_P1
///
/// Rows are lowercased before splitting. A later row with the same
/// port/protocol pair replaces the earlier tag.
pub fn parse_lookup_table<R: BufRead>(reader: R, source: &Path) -> Result<LookupTable> {
    let mut lines = reader.lines();

    if let Some(header) = lines.next() {
        header.map_err(|e| Error::io(source, e))?;
    }

    let mut table = LookupTable::new();
    for (idx, line) in lines.enumerate() {
        // +1 for 1-based, +1 for the header.
        let lno = idx + 2;
        let line = line.map_err(|e| Error::io(source, e))?.to_lowercase();

        let fields = split_fields(&line, ',');
        let [dst_port, protocol, tag] = fields.as_slice() else {
            return Err(Error::InvalidTableFormat {
                path: source.to_path_buf(),
                line: lno,
                found: fields.len(),
            });
        };

        let key = composite_key(dst_port, protocol);
        if let Some(prev) = table.insert(key, tag.to_string()) {
            debug!(line = lno, port = %dst_port, protocol = %protocol, %prev, new = %tag, "duplicate lookup key overwritten");
        }
    }

    Ok(table)
}
