//! Authentication paths from a leaf to the root.

use ff::PrimeField;

use crate::core::TreeError;
use crate::hasher::FieldHasher;
use crate::tree::MerkleTree;

/// Which side of its parent the current node sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Even position: the node is the left input, the sibling the right.
    Left,
    /// Odd position: the sibling is the left input, the node the right.
    Right,
}

impl Direction {
    /// Direction of the node at `position` within its level.
    #[must_use]
    pub const fn of(position: u64) -> Self {
        if position & 1 == 0 {
            Self::Left
        } else {
            Self::Right
        }
    }

    /// Exported bit: `0` for left, `1` for right.
    #[must_use]
    pub const fn bit(self) -> u8 {
        match self {
            Self::Left => 0,
            Self::Right => 1,
        }
    }

    /// Parse an exported bit. Anything but `0` or `1` is rejected.
    #[must_use]
    pub const fn from_bit(bit: u8) -> Option<Self> {
        match bit {
            0 => Some(Self::Left),
            1 => Some(Self::Right),
            _ => None,
        }
    }
}

/// The siblings and direction bits from a leaf up to the root, bottom-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerkleWitness<F> {
    siblings: Vec<F>,
    directions: Vec<Direction>,
}

impl<F: PrimeField> MerkleWitness<F> {
    /// Assemble a witness from its parts, e.g. when reading an exported record.
    ///
    /// # Errors
    /// Returns [`TreeError::PathLengthMismatch`] when the two sequences differ in length.
    pub fn new(siblings: Vec<F>, directions: Vec<Direction>) -> Result<Self, TreeError> {
        if siblings.len() != directions.len() {
            return Err(TreeError::PathLengthMismatch {
                siblings: siblings.len(),
                directions: directions.len(),
            });
        }
        Ok(Self {
            siblings,
            directions,
        })
    }

    /// Sibling nodes, starting next to the leaf.
    #[must_use]
    pub fn siblings(&self) -> &[F] {
        &self.siblings
    }

    /// Direction of the path node at each level, starting at the leaf.
    #[must_use]
    pub fn directions(&self) -> &[Direction] {
        &self.directions
    }

    /// Path length, equal to the depth of the tree it was taken from.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.siblings.len()
    }

    /// Directions as exported `0`/`1` bits.
    #[must_use]
    pub fn path_bits(&self) -> Vec<u8> {
        self.directions.iter().copied().map(Direction::bit).collect()
    }

    /// The leaf index encoded by the direction bits (little-endian, bit `l` at level `l`).
    #[must_use]
    pub fn leaf_index(&self) -> Option<u64> {
        self.directions.iter().rev().try_fold(0_u64, |index, d| {
            index.checked_mul(2)?.checked_add(u64::from(d.bit()))
        })
    }

    /// Fold the path over `leaf` and return the resulting root.
    #[must_use]
    pub fn compute_root<H>(&self, hasher: &H, leaf: F) -> F
    where
        H: FieldHasher<Field = F>,
    {
        self.siblings
            .iter()
            .zip(&self.directions)
            .fold(leaf, |node, (sibling, direction)| match direction {
                Direction::Left => hasher.hash2(node, *sibling),
                Direction::Right => hasher.hash2(*sibling, node),
            })
    }

    /// Whether the path authenticates `leaf` under `root`.
    #[must_use]
    pub fn verify<H>(&self, hasher: &H, leaf: F, root: F) -> bool
    where
        H: FieldHasher<Field = F>,
    {
        self.compute_root(hasher, leaf) == root
    }
}

impl<F: PrimeField> MerkleTree<F> {
    /// Authentication path for the leaf slot `leaf_index`.
    ///
    /// Any slot below `2^depth` has a path, including zero padding slots.
    ///
    /// # Errors
    /// Returns [`TreeError::IndexOutOfRange`] when `leaf_index >= 2^depth`.
    pub fn witness(&self, leaf_index: u64) -> Result<MerkleWitness<F>, TreeError> {
        if leaf_index >= self.capacity() {
            return Err(TreeError::IndexOutOfRange {
                index: leaf_index,
                depth: self.depth(),
            });
        }

        let depth = usize::from(self.depth());
        let mut siblings = Vec::with_capacity(depth);
        let mut directions = Vec::with_capacity(depth);

        let mut position = leaf_index;
        for level in 0..depth {
            directions.push(Direction::of(position));
            siblings.push(self.node_or_empty(level, position ^ 1));
            #[allow(clippy::arithmetic_side_effects, reason = "constant shift by one")]
            {
                position >>= 1_u32;
            }
        }

        Ok(MerkleWitness {
            siblings,
            directions,
        })
    }
}
