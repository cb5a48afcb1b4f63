//! Run configuration: report names, headers and the untagged sentinel.
//!
//! Defaults reproduce the fixed output contract. A JSON file may override any
//! top-level field:
//! {
//!   "untagged_tag": "untagged",
//!   "tag_report": { "file_name": "tagCount.csv", "header": "Tag,Count\n" },
//!   "port_protocol_report": {
//!     "file_name": "portProtocolCombinationCount.csv",
//!     "header": "Port,Protocol,Count\n"
//!   }
//! }

use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const UNTAGGED: &str = "untagged";

pub const TAG_COUNT_FILENAME: &str = "tagCount.csv";
pub const TAG_COUNT_HEADER: &str = "Tag,Count\n";

pub const PORT_PROTOCOL_COUNT_FILENAME: &str = "portProtocolCombinationCount.csv";
pub const PORT_PROTOCOL_COUNT_HEADER: &str = "Port,Protocol,Count\n";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Tag counted for records whose key is missing from the lookup table.
    pub untagged_tag: String,
    pub tag_report: ReportSpec,
    pub port_protocol_report: ReportSpec,
}

/// One output artifact. The header is written verbatim, terminator included.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportSpec {
    pub file_name: String,
    pub header: String,
}

impl ReportSpec {
    fn new(file_name: &str, header: &str) -> Self {
        Self {
            file_name: file_name.to_string(),
            header: header.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            untagged_tag: UNTAGGED.to_string(),
            tag_report: ReportSpec::new(TAG_COUNT_FILENAME, TAG_COUNT_HEADER),
            port_protocol_report: ReportSpec::new(
                PORT_PROTOCOL_COUNT_FILENAME,
                PORT_PROTOCOL_COUNT_HEADER,
            ),
        }
    }
}

impl Config {
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_json_str(&text).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    fn from_json_str(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}
