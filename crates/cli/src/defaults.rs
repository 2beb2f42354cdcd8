//! Shared default values for the command line.

pub const ORGANISM: &str = "e-coli";
pub const SEQUENCE_LENGTH: usize = 10_000;
pub const LOG_FILTER: &str = "warn";
