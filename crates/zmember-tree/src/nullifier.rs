//! Context-scoped nullifiers.
//!
//! A nullifier is `H2(secret, external_nullifier)`. The same participant acting twice in the
//! same context reveals the same nullifier, while nullifiers from different contexts cannot
//! be linked without the secret.

use ff::PrimeField;

use crate::hasher::FieldHasher;
use crate::secret::Secret;

/// Public identifier of the action or epoch a nullifier is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExternalNullifier<F>(F);

impl<F: PrimeField> ExternalNullifier<F> {
    /// Wrap a caller-supplied context value.
    #[must_use]
    pub const fn new(value: F) -> Self {
        Self(value)
    }

    /// The context value.
    #[must_use]
    pub const fn value(&self) -> F {
        self.0
    }
}

/// Derive the nullifier of `secret` in the context `external`.
#[must_use]
pub fn derive_nullifier<H>(
    hasher: &H,
    secret: &Secret<H::Field>,
    external: ExternalNullifier<H::Field>,
) -> H::Field
where
    H: FieldHasher,
    H::Field: PrimeField<Repr = [u8; 32]>,
{
    hasher.hash2(secret.value(), external.value())
}

#[cfg(test)]
mod tests {
    use pasta_curves::pallas;

    use super::*;
    use crate::commitment::commit;
    use crate::hasher::PoseidonHasher;

    fn secret(value: u64) -> Secret<pallas::Base> {
        Secret::new(pallas::Base::from(value))
    }

    fn context(value: u64) -> ExternalNullifier<pallas::Base> {
        ExternalNullifier::new(pallas::Base::from(value))
    }

    #[test]
    fn deterministic() {
        assert_eq!(
            derive_nullifier(&PoseidonHasher, &secret(1), context(12_345)),
            derive_nullifier(&PoseidonHasher, &secret(1), context(12_345))
        );
    }

    #[test]
    fn scoped_by_context() {
        assert_ne!(
            derive_nullifier(&PoseidonHasher, &secret(1), context(1)),
            derive_nullifier(&PoseidonHasher, &secret(1), context(2))
        );
    }

    #[test]
    fn bound_to_secret() {
        assert_ne!(
            derive_nullifier(&PoseidonHasher, &secret(1), context(42)),
            derive_nullifier(&PoseidonHasher, &secret(2), context(42))
        );
    }

    #[test]
    fn differs_from_leaf_commitment() {
        let s = secret(9);
        assert_ne!(
            derive_nullifier(&PoseidonHasher, &s, context(0)),
            commit(&PoseidonHasher, &s)
        );
    }
}
