//! Build subcommand arguments.

use std::path::PathBuf;

use zmember_core::base::FieldElement;
use zmember_sdk::common::{BuildConfig, SecretSource};

use super::constants::{
    DEFAULT_COUNT, DEFAULT_DEPTH, DEFAULT_ROOT_FILE, DEFAULT_USERS_DIR, ZMEMBER_COUNT,
    ZMEMBER_DEPTH, ZMEMBER_EXTERNAL_NULLIFIER, ZMEMBER_ROOT_OUT, ZMEMBER_SECRETS_FILE,
    ZMEMBER_USERS_DIR,
};
use super::{parse_depth, parse_field_element};

/// Arguments for `build`.
#[derive(Debug, clap::Args)]
pub struct BuildArgs {
    /// Tree depth. The set holds at most `2^depth` participants.
    #[arg(long, env = ZMEMBER_DEPTH, default_value = DEFAULT_DEPTH, value_parser = parse_depth)]
    pub depth: u8,
    /// Number of secrets to generate when no secrets file is given.
    #[arg(long, env = ZMEMBER_COUNT, default_value = DEFAULT_COUNT)]
    pub count: usize,
    /// JSON array of decimal secrets to use instead of generating them.
    #[arg(long, env = ZMEMBER_SECRETS_FILE, conflicts_with = "count")]
    pub secrets_file: Option<PathBuf>,
    /// Context value the nullifiers of this batch are scoped to (decimal field element).
    #[arg(long, env = ZMEMBER_EXTERNAL_NULLIFIER, value_parser = parse_field_element)]
    pub external_nullifier: FieldElement,
    /// Root record output file.
    #[arg(long, env = ZMEMBER_ROOT_OUT, default_value = DEFAULT_ROOT_FILE)]
    pub root_out: PathBuf,
    /// Directory for the per-participant witness records.
    #[arg(long, env = ZMEMBER_USERS_DIR, default_value = DEFAULT_USERS_DIR)]
    pub users_dir: PathBuf,
}

impl From<BuildArgs> for BuildConfig {
    fn from(args: BuildArgs) -> Self {
        let secrets = args.secrets_file.map_or(
            SecretSource::Generate { count: args.count },
            SecretSource::File,
        );
        Self {
            depth: args.depth,
            secrets,
            external_nullifier: args.external_nullifier,
            root_output_file: args.root_out,
            users_dir: args.users_dir,
        }
    }
}
