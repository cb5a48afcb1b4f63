//! Lookup table loading: `dstport,protocol,tag` rows keyed by composite key.

pub mod parse;
pub mod table;

pub use parse::{load_lookup_table, parse_lookup_table};
pub use table::LookupTable;
