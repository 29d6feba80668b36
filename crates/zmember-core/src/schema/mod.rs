//! Serialized schema/data contracts.

/// Published root and per-participant witness records.
pub mod records;
