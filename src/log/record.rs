use crate::text::composite_key;

/// Index of the destination port field in a log line.
pub const DST_PORT_FIELD: usize = 6;
/// Index of the protocol field in a log line.
pub const PROTOCOL_FIELD: usize = 7;
/// Shortest valid record; anything past the protocol is ignored.
pub const MIN_FIELDS: usize = PROTOCOL_FIELD + 1;

/// The parts of a flow log line that drive classification.
///
/// Both fields are the raw lowercased tokens; neither is checked to be a
/// number or a known protocol name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub dst_port: String,
    pub protocol: String,
}

impl LogRecord {
    pub fn key(&self) -> String {
        composite_key(&self.dst_port, &self.protocol)
    }
}
