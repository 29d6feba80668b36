//! Offline check of an exported witness record against a published root.

use std::path::PathBuf;

use eyre::{Context as _, ContextCompat as _, ensure};
use tracing::info;
use zmember_core::base::to_decimal;
use zmember_core::schema::records::{RootRecord, WitnessRecord};
use zmember_tree::{
    Direction, ExternalNullifier, MerkleWitness, PoseidonHasher, Secret, commit, derive_nullifier,
};

/// Load a root record and a witness record and check that they agree.
///
/// # Errors
/// Returns an error if either file cannot be read or parsed, or if the check fails.
pub async fn verify_witness(root_file: PathBuf, witness_file: PathBuf) -> eyre::Result<()> {
    info!(file = ?root_file, "Loading root...");
    let root: RootRecord = serde_json::from_str(&tokio::fs::read_to_string(&root_file).await?)
        .context("Failed to parse root JSON")?;

    info!(file = ?witness_file, "Loading witness...");
    let witness: WitnessRecord = serde_json::from_str(&zeroize::Zeroizing::new(
        tokio::fs::read_to_string(&witness_file).await?,
    ))
    .context("Failed to parse witness JSON")?;

    check_witness_record(&root, &witness)?;
    info!(root = %to_decimal(&root.root), "Witness verified");
    Ok(())
}

/// Check that `witness` proves membership under `root` and carries the right nullifier.
///
/// The leaf is recomputed from the secret and the path is replayed up to the root.
///
/// # Errors
/// Returns an error describing the first mismatch found.
pub fn check_witness_record(root: &RootRecord, witness: &WitnessRecord) -> eyre::Result<()> {
    ensure!(
        witness.root == root.root,
        "Witness was exported for root {}, expected {}",
        to_decimal(&witness.root),
        to_decimal(&root.root)
    );

    let directions = witness
        .path_index
        .iter()
        .enumerate()
        .map(|(level, bit)| {
            Direction::from_bit(*bit)
                .with_context(|| format!("pathIndex[{level}] is {bit}, expected 0 or 1"))
        })
        .collect::<eyre::Result<Vec<_>>>()?;
    let path = MerkleWitness::new(witness.path_elements.clone(), directions)
        .context("pathElements and pathIndex disagree on the depth")?;

    let hasher = PoseidonHasher;
    let secret = Secret::new(witness.secret);
    let computed = path.compute_root(&hasher, commit(&hasher, &secret));
    ensure!(
        computed == root.root,
        "Path replays to {}, expected root {}",
        to_decimal(&computed),
        to_decimal(&root.root)
    );

    let external = ExternalNullifier::new(witness.external_nullifier);
    ensure!(
        derive_nullifier(&hasher, &secret, external) == witness.nullifier_hash,
        "nullifierHash does not match the secret and externalNullifier"
    );
    Ok(())
}
