//! Leaf commitments.

use ff::PrimeField;

use crate::hasher::FieldHasher;
use crate::secret::Secret;

/// Commit to a secret: `H1(secret)`.
#[must_use]
pub fn commit<H>(hasher: &H, secret: &Secret<H::Field>) -> H::Field
where
    H: FieldHasher,
    H::Field: PrimeField<Repr = [u8; 32]>,
{
    hasher.hash1(secret.value())
}

#[cfg(test)]
mod tests {
    use pasta_curves::pallas;

    use super::*;
    use crate::hasher::PoseidonHasher;

    #[test]
    fn commitment_is_the_unary_hash() {
        let secret = Secret::new(pallas::Base::from(77_u64));
        assert_eq!(
            commit(&PoseidonHasher, &secret),
            PoseidonHasher.hash1(pallas::Base::from(77_u64))
        );
    }

    #[test]
    fn commitment_hides_the_secret() {
        let secret = Secret::new(pallas::Base::from(77_u64));
        assert_ne!(commit(&PoseidonHasher, &secret), secret.value());
    }
}
