//! Flow log record parsing.

pub mod parse;
pub mod record;

pub use parse::parse_record;
