//! Guard against two participants sharing a nullifier.

use std::collections::BTreeSet;

use eyre::ensure;
use ff::PrimeField as _;
use zmember_core::base::{FieldElement, to_decimal};

/// Ensure a batch does not contain duplicate nullifiers.
///
/// Within one context, a shared nullifier means a shared secret.
///
/// # Errors
/// Returns an error when a duplicate nullifier is found.
pub(super) fn ensure_unique_nullifiers<I>(nullifiers: I, context: &str) -> eyre::Result<()>
where
    I: IntoIterator<Item = FieldElement>,
{
    let mut seen = BTreeSet::new();
    for (index, nullifier) in nullifiers.into_iter().enumerate() {
        ensure!(
            seen.insert(nullifier.to_repr()),
            "Duplicate {context} entry for nullifier {} at index {index}",
            to_decimal(&nullifier)
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pasta_curves::pallas;

    use super::ensure_unique_nullifiers;

    #[test]
    fn accepts_unique_nullifiers() {
        let nullifiers = (1..=3_u64).map(pallas::Base::from);
        assert!(ensure_unique_nullifiers(nullifiers, "test").is_ok());
    }

    #[test]
    fn rejects_duplicate_nullifiers() {
        let nullifier = pallas::Base::from(7_u64);
        let err = ensure_unique_nullifiers([nullifier, nullifier], "test")
            .expect_err("duplicate must be rejected");
        assert!(err.to_string().contains("at index 1"), "{err}");
    }
}
