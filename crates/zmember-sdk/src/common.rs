//! CLI-independent configuration types.

use std::path::PathBuf;

use zmember_core::base::FieldElement;

/// Where participant secrets come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretSource {
    /// Sample `count` fresh secrets from the OS random number generator.
    Generate {
        /// Number of participants.
        count: usize,
    },
    /// Read a JSON array of decimal strings.
    File(PathBuf),
}

/// Configuration for building a membership set and exporting its records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    /// Tree depth; the set holds at most `2^depth` participants.
    pub depth: u8,
    /// Participant secrets.
    pub secrets: SecretSource,
    /// Context value every nullifier in this batch is scoped to.
    pub external_nullifier: FieldElement,
    /// Output path of the root record.
    pub root_output_file: PathBuf,
    /// Directory receiving one `user_<idx>.json` witness record per participant.
    pub users_dir: PathBuf,
}
