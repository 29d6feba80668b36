//! Fixed-depth membership accumulator.
//!
//! Secrets are committed with a unary field hash, the commitments become the leaves of a
//! zero-padded binary Merkle tree, and every participant gets a sibling path plus a
//! context-scoped nullifier.

mod commitment;
mod core;
mod hasher;
mod nullifier;
mod secret;
mod tree;
mod witness;

pub use commitment::commit;
pub use crate::core::{
    MAX_TREE_DEPTH, TreeError, capacity, should_report_progress, validate_leaf_count,
};
pub use hasher::{FieldHasher, PoseidonHasher};
pub use nullifier::{ExternalNullifier, derive_nullifier};
pub use secret::Secret;
pub use tree::MerkleTree;
pub use witness::{Direction, MerkleWitness};
pub use zmember_core::base::DomainError;
