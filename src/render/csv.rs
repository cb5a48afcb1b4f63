use crate::error::{Error, Result};
use crate::model::FrequencyTable;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Write `header` verbatim, then `key,count` per entry in table order.
///
/// Keys are written as-is, so a port/protocol key yields `port,protocol,count`.
pub fn render_report<W: Write>(out: &mut W, header: &str, table: &FrequencyTable) -> io::Result<()> {
    out.write_all(header.as_bytes())?;
    for (key, count) in table {
        writeln!(out, "{key},{count}")?;
    }
    Ok(())
}

/// Create or truncate `path` and render the report into it.
pub fn write_report(path: &Path, header: &str, table: &FrequencyTable) -> Result<()> {
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut out = BufWriter::new(file);
    render_report(&mut out, header, table)
        .and_then(|()| out.flush())
        .map_err(|e| Error::io(path, e))?;

    info!(path = %path.display(), rows = table.len(), "wrote report");
    Ok(())
}
