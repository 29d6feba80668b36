//! Shared constants for CLI.

// -------------------------
// Environment variables
// -------------------------

// Build
pub const ZMEMBER_DEPTH: &str = "ZMEMBER_DEPTH";
pub const ZMEMBER_COUNT: &str = "ZMEMBER_COUNT";
pub const ZMEMBER_SECRETS_FILE: &str = "ZMEMBER_SECRETS_FILE";
pub const ZMEMBER_EXTERNAL_NULLIFIER: &str = "ZMEMBER_EXTERNAL_NULLIFIER";
pub const ZMEMBER_ROOT_OUT: &str = "ZMEMBER_ROOT_OUT";
pub const ZMEMBER_USERS_DIR: &str = "ZMEMBER_USERS_DIR";

// Verify
pub const ZMEMBER_ROOT_IN: &str = "ZMEMBER_ROOT_IN";
pub const ZMEMBER_WITNESS_IN: &str = "ZMEMBER_WITNESS_IN";

// -------------------------
// Default values
// -------------------------

// File paths
pub const DEFAULT_ROOT_FILE: &str = "public/root.json";
pub const DEFAULT_USERS_DIR: &str = "inputs/users";

// Logging
pub const DEFAULT_LOG_FILTER: &str = "info";

// Parsed values
pub const DEFAULT_DEPTH: &str = "16";
pub const DEFAULT_COUNT: &str = "8";
