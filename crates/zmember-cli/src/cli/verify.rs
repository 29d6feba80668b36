//! Verify subcommand arguments.

use std::path::PathBuf;

use super::constants::{DEFAULT_ROOT_FILE, ZMEMBER_ROOT_IN, ZMEMBER_WITNESS_IN};

/// Arguments for `verify`.
#[derive(Debug, clap::Args)]
pub struct VerifyArgs {
    /// Root record to check against.
    #[arg(long, env = ZMEMBER_ROOT_IN, default_value = DEFAULT_ROOT_FILE)]
    pub root: PathBuf,
    /// Witness record of one participant.
    #[arg(long, env = ZMEMBER_WITNESS_IN)]
    pub witness: PathBuf,
}
