//! Property tests for the accumulator over random participant sets.
#![allow(
    clippy::arithmetic_side_effects,
    clippy::indexing_slicing,
    missing_docs,
    reason = "tests"
)]

use ff::Field as _;
use pasta_curves::pallas;
use proptest::prelude::*;
use zmember_tree::{
    Direction, ExternalNullifier, MerkleTree, PoseidonHasher, Secret, TreeError, capacity,
    commit, derive_nullifier,
};

fn commitments(seeds: &[u64]) -> Vec<pallas::Base> {
    seeds
        .iter()
        .map(|seed| commit(&PoseidonHasher, &Secret::new(pallas::Base::from(*seed))))
        .collect()
}

/// A depth in `1..=4` with a participant list that fits into it.
fn depth_and_seeds() -> impl Strategy<Value = (u8, Vec<u64>)> {
    (1_u8..=4).prop_flat_map(|depth| {
        let max = usize::try_from(capacity(depth).expect("valid depth")).expect("fits");
        (Just(depth), prop::collection::vec(any::<u64>(), 0..=max))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn root_is_deterministic((depth, seeds) in depth_and_seeds()) {
        let first = MerkleTree::build(&PoseidonHasher, commitments(&seeds), depth).expect("fits");
        let second = MerkleTree::build(&PoseidonHasher, commitments(&seeds), depth).expect("fits");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn explicit_zero_leaves_do_not_change_the_root((depth, seeds) in depth_and_seeds()) {
        let leaves = commitments(&seeds);
        let width = usize::try_from(capacity(depth).expect("valid depth")).expect("fits");
        let mut padded = leaves.clone();
        padded.resize(width, pallas::Base::ZERO);

        let sparse = MerkleTree::build(&PoseidonHasher, leaves, depth).expect("fits");
        let full = MerkleTree::build(&PoseidonHasher, padded, depth).expect("fits");
        prop_assert_eq!(sparse.root(), full.root());
    }

    #[test]
    fn every_member_authenticates((depth, seeds) in depth_and_seeds()) {
        let leaves = commitments(&seeds);
        let tree = MerkleTree::build(&PoseidonHasher, leaves.clone(), depth).expect("fits");

        for (index, leaf) in leaves.iter().enumerate() {
            let index = u64::try_from(index).expect("fits");
            let witness = tree.witness(index).expect("member index is in range");
            prop_assert_eq!(witness.depth(), usize::from(depth));
            prop_assert!(witness.verify(&PoseidonHasher, *leaf, tree.root()));

            // Index bits read back from the direction sequence.
            for (level, direction) in witness.directions().iter().enumerate() {
                let bit = (index >> level) & 1;
                prop_assert_eq!(u64::from(direction.bit()), bit);
                prop_assert_eq!(*direction, Direction::of(index >> level));
            }
        }
    }

    #[test]
    fn tampered_sibling_is_rejected(
        (depth, seeds) in depth_and_seeds(),
        level in 0_usize..4,
    ) {
        prop_assume!(!seeds.is_empty());
        let leaves = commitments(&seeds);
        let tree = MerkleTree::build(&PoseidonHasher, leaves.clone(), depth).expect("fits");
        let witness = tree.witness(0).expect("index is in range");
        let level = level % usize::from(depth);

        let mut siblings = witness.siblings().to_vec();
        siblings[level] += pallas::Base::ONE;
        let tampered = zmember_tree::MerkleWitness::new(siblings, witness.directions().to_vec())
            .expect("lengths match");
        prop_assert!(!tampered.verify(&PoseidonHasher, leaves[0], tree.root()));
    }

    #[test]
    fn nullifiers_are_unique_per_context(
        seeds in prop::collection::btree_set(any::<u64>(), 2..8),
        context in any::<u64>(),
    ) {
        let external = ExternalNullifier::new(pallas::Base::from(context));
        let nullifiers: std::collections::BTreeSet<[u8; 32]> = seeds
            .iter()
            .map(|seed| {
                let secret = Secret::new(pallas::Base::from(*seed));
                ff::PrimeField::to_repr(&derive_nullifier(&PoseidonHasher, &secret, external))
            })
            .collect();
        prop_assert_eq!(nullifiers.len(), seeds.len());
    }
}

#[test]
fn capacity_boundary() {
    for depth in 1_u8..=4 {
        let max = capacity(depth).expect("valid depth");
        let full: Vec<u64> = (0..max).collect();
        let over: Vec<u64> = (0..=max).collect();

        assert!(MerkleTree::build(&PoseidonHasher, commitments(&full), depth).is_ok());
        assert_eq!(
            MerkleTree::build(&PoseidonHasher, commitments(&over), depth),
            Err(TreeError::CapacityExceeded {
                leaves: over.len(),
                depth,
                capacity: max,
            })
        );
    }
}
