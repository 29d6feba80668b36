//! Zmember base primitives and schemas.

/// Field-element encodings and serde helpers shared across crates.
pub mod base;
/// Serialized/public schema models used across the workspace.
pub mod schema;
