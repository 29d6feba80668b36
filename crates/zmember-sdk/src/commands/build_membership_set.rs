//! Membership set construction and export.

use eyre::Context as _;
use tracing::{info, instrument};
use zmember_core::base::{FieldElement, to_decimal};
use zmember_core::schema::records::{RootRecord, WitnessRecord};
use zmember_tree::{
    ExternalNullifier, MerkleTree, PoseidonHasher, Secret, commit, should_report_progress,
};

use super::nullifier_uniqueness::ensure_unique_nullifiers;
use crate::common::BuildConfig;
use crate::export::{root_record, witness_record, write_root_record, write_witness_records};
use crate::secrets::load_secrets;

/// Build the membership tree over the configured secrets and export its records.
///
/// Writes the root record and one witness record per participant. Any failing participant
/// aborts the whole batch before anything is written.
///
/// Returns the root.
///
/// # Errors
/// Returns an error if secrets cannot be loaded, the tree cannot be built, two participants
/// share a nullifier, or the records cannot be written.
#[instrument(skip_all, fields(depth = config.depth))]
pub async fn build_membership_set(config: BuildConfig) -> eyre::Result<FieldElement> {
    let secrets = load_secrets(&config.secrets, config.depth).await?;
    info!(participants = secrets.len(), "Loaded secrets");

    let external = ExternalNullifier::new(config.external_nullifier);
    let depth = config.depth;
    let (root, witnesses) =
        tokio::task::spawn_blocking(move || assemble_records(&secrets, depth, external))
            .await??;

    write_root_record(&config.root_output_file, &root).await?;
    write_witness_records(&config.users_dir, &witnesses).await?;

    info!(root = %to_decimal(&root.root), "Membership set built");
    Ok(root.root)
}

fn assemble_records(
    secrets: &[Secret<FieldElement>],
    depth: u8,
    external: ExternalNullifier<FieldElement>,
) -> eyre::Result<(RootRecord, Vec<WitnessRecord>)> {
    let hasher = PoseidonHasher;
    let leaves = secrets.iter().map(|s| commit(&hasher, s)).collect();

    let mut last_pct = 0;
    let tree = MerkleTree::build_with_progress(&hasher, leaves, depth, |done, total| {
        if should_report_progress(done, total, &mut last_pct) {
            info!(levels = done, total, "Hashing tree levels");
        }
    })
    .context("Failed to build the membership tree")?;

    let witnesses = secrets
        .iter()
        .zip(0_u64..)
        .map(|(secret, index)| witness_record(&hasher, &tree, index, secret, external))
        .collect::<eyre::Result<Vec<_>>>()?;
    ensure_unique_nullifiers(witnesses.iter().map(|w| w.nullifier_hash), "participant")?;

    Ok((root_record(&tree), witnesses))
}
