//! Participant secret provisioning.

use eyre::Context as _;
use rand_core::OsRng;
use tracing::{info, warn};
use zeroize::Zeroize;
use zmember_core::base::{FieldElement, parse_decimal};
use zmember_tree::{Secret, validate_leaf_count};

use crate::common::SecretSource;

/// Load or generate the participant secrets for a tree of `depth` levels, in leaf order.
///
/// # Errors
/// Returns an error if more secrets are requested than the tree holds, if the secrets file
/// cannot be read or is not a JSON array of strings, or if it holds a value that is not a
/// reduced decimal field element.
pub(super) async fn load_secrets(
    source: &SecretSource,
    depth: u8,
) -> eyre::Result<Vec<Secret<FieldElement>>> {
    let secrets = match source {
        SecretSource::Generate { count } => {
            validate_leaf_count(*count, depth)
                .context("Requested participant count does not fit the tree")?;
            info!(count, "Generating secrets");
            (0..*count).map(|_| Secret::random(&mut OsRng)).collect()
        }
        SecretSource::File(path) => {
            info!(file = ?path, "Loading secrets");
            // Wrap in Zeroizing immediately so the raw file is wiped on every return path.
            let contents = zeroize::Zeroizing::new(
                tokio::fs::read_to_string(path)
                    .await
                    .with_context(|| format!("Failed to read secrets from {}", path.display()))?,
            );
            parse_secrets(&contents)?
        }
    };

    if secrets.is_empty() {
        warn!("No participants; the tree will only contain padding");
    }
    Ok(secrets)
}

fn parse_secrets(json: &str) -> eyre::Result<Vec<Secret<FieldElement>>> {
    let mut values: Vec<String> =
        serde_json::from_str(json).context("Secrets file must be a JSON array of decimal strings")?;

    let parsed = values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            parse_decimal(value)
                .map(Secret::new)
                .with_context(|| format!("Invalid secret at index {index}"))
        })
        .collect::<eyre::Result<Vec<_>>>();

    values.iter_mut().for_each(Zeroize::zeroize);
    parsed
}
