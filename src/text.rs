//! Field splitting and composite keys shared by the lookup table and log parsers.

/// Split `line` on every occurrence of `delim`.
///
/// Consecutive delimiters produce empty fields so positions are preserved,
/// but trailing empty fields are dropped. An empty line is a single empty field.
pub fn split_fields(line: &str, delim: char) -> Vec<&str> {
    let mut fields: Vec<&str> = line.split(delim).collect();
    if line.is_empty() {
        return fields;
    }
    while fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    fields
}

/// Join a destination port and protocol into the `"{port},{protocol}"` key.
pub fn composite_key(dst_port: &str, protocol: &str) -> String {
    format!("{dst_port},{protocol}")
}
