//! Field-native hashing used for commitments, internal nodes and nullifiers.
//!
//! Tree and witness logic only depend on [`FieldHasher`], so any arithmetic-friendly hash
//! over a prime field can be substituted. [`PoseidonHasher`] is the instance used for
//! exported records; proof circuits must use the same parameters to match.

use ff::PrimeField;
use halo2_gadgets::poseidon::primitives::{self as poseidon, ConstantLength, P128Pow5T3};
use pasta_curves::pallas;

/// A collision-resistant hash over a prime field.
///
/// Implementations must be pure: identical inputs give identical outputs across calls and
/// processes.
pub trait FieldHasher {
    /// The field the hash natively operates on.
    type Field: PrimeField;

    /// Unary hash, used to commit to a secret.
    fn hash1(&self, value: Self::Field) -> Self::Field;

    /// Binary compression, used for internal nodes and nullifiers.
    fn hash2(&self, left: Self::Field, right: Self::Field) -> Self::Field;
}

/// Poseidon over the Pallas base field (`P128Pow5T3`, width 3, rate 2).
///
/// The message length is part of the sponge's initial capacity element, so `hash1(x)` and
/// `hash2(x, 0)` are separated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoseidonHasher;

impl FieldHasher for PoseidonHasher {
    type Field = pallas::Base;

    fn hash1(&self, value: pallas::Base) -> pallas::Base {
        poseidon::Hash::<_, P128Pow5T3, ConstantLength<1>, 3, 2>::init().hash([value])
    }

    fn hash2(&self, left: pallas::Base, right: pallas::Base) -> pallas::Base {
        poseidon::Hash::<_, P128Pow5T3, ConstantLength<2>, 3, 2>::init().hash([left, right])
    }
}

#[cfg(test)]
mod tests {
    use ff::Field as _;

    use super::*;

    fn fe(value: u64) -> pallas::Base {
        pallas::Base::from(value)
    }

    fn decimal(value: &str) -> pallas::Base {
        zmember_core::base::parse_decimal(value).expect("pinned value is canonical")
    }

    // Pinned outputs guard against parameter or dependency drift across builds.
    #[test]
    fn known_answers() {
        let hasher = PoseidonHasher;
        assert_eq!(
            hasher.hash2(fe(1), fe(2)),
            decimal("24123908145095057026791623326467558304806014471451005010637196320467268264780")
        );
        assert_eq!(
            hasher.hash1(pallas::Base::ZERO),
            decimal("285791922607376805191929397159980379386958463190196601815593532551033840923")
        );
        assert_eq!(
            hasher.hash1(fe(7)),
            decimal("5619261442468376566786378358538614710688458977800307277614077949465897747652")
        );
    }

    #[test]
    fn deterministic() {
        let hasher = PoseidonHasher;
        assert_eq!(hasher.hash1(fe(7)), PoseidonHasher.hash1(fe(7)));
        assert_eq!(hasher.hash2(fe(1), fe(2)), PoseidonHasher.hash2(fe(1), fe(2)));
    }

    #[test]
    fn order_matters() {
        let hasher = PoseidonHasher;
        assert_ne!(hasher.hash2(fe(1), fe(2)), hasher.hash2(fe(2), fe(1)));
    }

    #[test]
    fn arity_is_domain_separated() {
        let hasher = PoseidonHasher;
        assert_ne!(hasher.hash1(fe(5)), hasher.hash2(fe(5), pallas::Base::ZERO));
    }

    #[test]
    fn distinct_inputs_give_distinct_outputs() {
        let hasher = PoseidonHasher;
        let outputs: Vec<pallas::Base> = (0..16).map(|v| hasher.hash1(fe(v))).collect();
        for (i, a) in outputs.iter().enumerate() {
            for b in outputs.iter().skip(i.saturating_add(1)) {
                assert_ne!(a, b);
            }
        }
        assert_ne!(hasher.hash1(pallas::Base::ZERO), pallas::Base::ZERO);
    }
}
