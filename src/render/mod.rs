//! Report rendering: one `key,count` line per frequency table entry.

pub mod csv;

pub use csv::{render_report, write_report};
