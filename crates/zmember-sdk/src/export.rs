//! Export of the root record and per-participant witness records.
//!
//! Witness records carry the participant secret in clear, so they are written owner-only and
//! their serialized form is wiped from memory once written.

mod sensitive_output;

use std::path::{Path, PathBuf};

use eyre::{Context as _, ContextCompat as _};
use tracing::{debug, info};
use zeroize::Zeroizing;
use zmember_core::base::FieldElement;
use zmember_core::schema::records::{RootRecord, WitnessRecord};
use zmember_tree::{ExternalNullifier, FieldHasher, MerkleTree, Secret, commit, derive_nullifier};

use self::sensitive_output::write_owner_only;

/// File name of the witness record for participant `index`.
#[must_use]
pub fn user_file_name(index: usize) -> String {
    format!("user_{index}.json")
}

/// The published root of `tree`.
#[must_use]
pub const fn root_record(tree: &MerkleTree<FieldElement>) -> RootRecord {
    RootRecord { root: tree.root() }
}

/// Assemble the witness record for the participant at `leaf_index`.
///
/// # Errors
/// Returns an error if `leaf_index` is outside the tree, or if the leaf stored there is not
/// the commitment of `secret`.
pub fn witness_record<H>(
    hasher: &H,
    tree: &MerkleTree<FieldElement>,
    leaf_index: u64,
    secret: &Secret<FieldElement>,
    external: ExternalNullifier<FieldElement>,
) -> eyre::Result<WitnessRecord>
where
    H: FieldHasher<Field = FieldElement>,
{
    let leaf = tree
        .leaf(leaf_index)
        .with_context(|| format!("Leaf {leaf_index} is outside the tree"))?;
    eyre::ensure!(
        leaf == commit(hasher, secret),
        "Leaf {leaf_index} does not commit to the given secret"
    );

    let witness = tree
        .witness(leaf_index)
        .with_context(|| format!("Failed to derive the path of leaf {leaf_index}"))?;

    Ok(WitnessRecord {
        secret: secret.value(),
        path_elements: witness.siblings().to_vec(),
        path_index: witness.path_bits(),
        root: tree.root(),
        external_nullifier: external.value(),
        nullifier_hash: derive_nullifier(hasher, secret, external),
    })
}

/// Write the root record as pretty JSON, creating parent directories.
///
/// # Errors
/// Returns an error if serialization or any filesystem operation fails.
pub async fn write_root_record(path: &Path, record: &RootRecord) -> eyre::Result<()> {
    create_parent_dir(path).await?;
    let json = serde_json::to_string_pretty(record)?;
    tokio::fs::write(path, json)
        .await
        .with_context(|| format!("Failed to write root record to {}", path.display()))?;
    info!(file = ?path, "Exported root");
    Ok(())
}

/// Write one owner-only `user_<idx>.json` per record into `dir`, creating it if needed.
///
/// Witness files left in `dir` by an earlier export are removed first, so the directory only
/// ever holds paths to the root being published. Other files are left alone.
///
/// Returns the written paths in record order.
///
/// # Errors
/// Returns an error if serialization or any filesystem operation fails.
pub async fn write_witness_records(
    dir: &Path,
    records: &[WitnessRecord],
) -> eyre::Result<Vec<PathBuf>> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to create {}", dir.display()))?;
    remove_stale_witnesses(dir).await?;

    let mut paths = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let path = dir.join(user_file_name(index));
        let json = Zeroizing::new(serde_json::to_string_pretty(record)?);
        write_owner_only(&path, &json)
            .await
            .with_context(|| format!("Failed to write witness record to {}", path.display()))?;
        debug!(file = ?path, "Exported witness");
        paths.push(path);
    }

    info!(count = paths.len(), dir = ?dir, "Exported witnesses");
    Ok(paths)
}

fn is_witness_file_name(name: &str) -> bool {
    name.strip_prefix("user_")
        .and_then(|rest| rest.strip_suffix(".json"))
        .is_some_and(|index| !index.is_empty() && index.bytes().all(|b| b.is_ascii_digit()))
}

async fn remove_stale_witnesses(dir: &Path) -> eyre::Result<()> {
    let mut entries = tokio::fs::read_dir(dir)
        .await
        .with_context(|| format!("Failed to list {}", dir.display()))?;

    let mut removed = 0_usize;
    while let Some(entry) = entries.next_entry().await? {
        let stale = entry.file_name().to_str().is_some_and(is_witness_file_name)
            && entry.file_type().await?.is_file();
        if stale {
            let path = entry.path();
            tokio::fs::remove_file(&path)
                .await
                .with_context(|| format!("Failed to remove stale witness {}", path.display()))?;
            removed = removed.saturating_add(1);
        }
    }

    if removed > 0 {
        info!(count = removed, dir = ?dir, "Removed witnesses from a previous export");
    }
    Ok(())
}

async fn create_parent_dir(path: &Path) -> eyre::Result<()> {
    let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };
    tokio::fs::create_dir_all(parent)
        .await
        .with_context(|| format!("Failed to create {}", parent.display()))
}
