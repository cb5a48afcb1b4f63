//! Aggregation model: classify each flow log record and count it twice,
//! once by tag and once by port/protocol pair.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::log::parse_record;
use crate::lookup::LookupTable;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::info;

/// Occurrence count per key. Ordered so reports are stable across runs.
pub type FrequencyTable = BTreeMap<String, u64>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregates {
    /// Number of log lines processed.
    pub lines: u64,
    /// Tag -> count, `untagged` included.
    pub tags: FrequencyTable,
    /// `"{port},{protocol}"` -> count.
    pub port_protocols: FrequencyTable,
}

impl Aggregates {
    fn record(&mut self, key: String, tag: &str) {
        self.lines += 1;
        *self.tags.entry(tag.to_string()).or_insert(0) += 1;
        *self.port_protocols.entry(key).or_insert(0) += 1;
    }
}

/// Open `path` and aggregate every line in it.
pub fn aggregate_file(path: &Path, lookup: &LookupTable, config: &Config) -> Result<Aggregates> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let data = aggregate(BufReader::new(file), path, lookup, config)?;
    info!(
        path = %path.display(),
        lines = data.lines,
        tags = data.tags.len(),
        combinations = data.port_protocols.len(),
        "aggregated log file"
    );
    Ok(data)
}

/// Single pass over `reader`. The first malformed line aborts the whole scan;
/// no partial tables are returned.
pub fn aggregate<R: BufRead>(
    reader: R,
    source: &Path,
    lookup: &LookupTable,
    config: &Config,
) -> Result<Aggregates> {
    let mut out = Aggregates::default();

    for (lineno, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| Error::io(source, e))?;
        let record = parse_record(&line, source, lineno + 1)?;

        let key = record.key();
        let tag = lookup.get(&key).unwrap_or(config.untagged_tag.as_str());
        out.record(key, tag);
    }

    Ok(out)
}
