//! The fixed-depth accumulator.
#![allow(
    clippy::arithmetic_side_effects,
    reason = "Level math is bounded by MAX_TREE_DEPTH; depth and index are validated first"
)]

use std::num::NonZeroUsize;
use std::thread;

use ff::{Field as _, PrimeField};

use crate::core::{TreeError, validate_leaf_count};
use crate::hasher::FieldHasher;

/// Levels with fewer pairs than this are hashed on the calling thread.
const PARALLEL_PAIR_THRESHOLD: usize = 1 << 10;

/// A complete binary Merkle tree of fixed depth over zero-padded leaves.
///
/// Level 0 holds the leaves and level `depth` the root. Only the populated prefix of each
/// level is stored: every position past it holds the root of an all-zero subtree, which is
/// exactly what the fully padded `2^depth`-leaf tree has there. Lookups and witnesses fall
/// back to those precomputed empty roots, so the observable tree is the padded one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerkleTree<F> {
    depth: u8,
    levels: Vec<Vec<F>>,
    empty_roots: Vec<F>,
    root: F,
}

impl<F: PrimeField> MerkleTree<F> {
    /// Build the tree over `leaves`, padding to `2^depth` slots with zero.
    ///
    /// # Errors
    /// Returns [`TreeError::InvalidDepth`] for an unsupported depth and
    /// [`TreeError::CapacityExceeded`] when `leaves.len() > 2^depth`.
    pub fn build<H>(hasher: &H, leaves: Vec<F>, depth: u8) -> Result<Self, TreeError>
    where
        H: FieldHasher<Field = F> + Sync,
    {
        Self::build_with_progress(hasher, leaves, depth, |_, _| {})
    }

    /// Like [`MerkleTree::build`], calling `progress(levels_done, depth)` after each level.
    ///
    /// # Errors
    /// Same as [`MerkleTree::build`]. Nothing is built when validation fails.
    pub fn build_with_progress<H, P>(
        hasher: &H,
        leaves: Vec<F>,
        depth: u8,
        mut progress: P,
    ) -> Result<Self, TreeError>
    where
        H: FieldHasher<Field = F> + Sync,
        P: FnMut(usize, usize),
    {
        validate_leaf_count(leaves.len(), depth)?;

        let empty_roots = empty_roots(hasher, depth);
        let total = usize::from(depth);
        let mut levels = Vec::with_capacity(total + 1);

        let mut current = leaves;
        for (level, empty) in empty_roots.iter().take(total).enumerate() {
            let next = hash_level(hasher, &current, *empty);
            levels.push(current);
            current = next;
            progress(level + 1, total);
        }

        let root = current
            .first()
            .or_else(|| empty_roots.last())
            .copied()
            .unwrap_or(F::ZERO);
        levels.push(current);

        Ok(Self {
            depth,
            levels,
            empty_roots,
            root,
        })
    }

    /// Number of levels above the leaves.
    #[must_use]
    pub const fn depth(&self) -> u8 {
        self.depth
    }

    /// The root.
    #[must_use]
    pub const fn root(&self) -> F {
        self.root
    }

    /// Number of leaf slots, `2^depth`.
    #[must_use]
    pub const fn capacity(&self) -> u64 {
        1_u64 << self.depth
    }

    /// Number of leaves supplied at build time.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.levels.first().map_or(0, Vec::len)
    }

    /// The leaf at `index`; zero for padded slots, `None` past the capacity.
    #[must_use]
    pub fn leaf(&self, index: u64) -> Option<F> {
        self.node(0, index)
    }

    /// The node at `index` on `level`, or `None` if either is out of range.
    #[must_use]
    pub fn node(&self, level: u8, index: u64) -> Option<F> {
        if level > self.depth || index >= (1_u64 << (self.depth - level)) {
            return None;
        }
        Some(self.node_or_empty(usize::from(level), index))
    }

    /// The stored, non-padding prefix of `level`.
    #[must_use]
    pub fn populated_level(&self, level: u8) -> Option<&[F]> {
        self.levels.get(usize::from(level)).map(Vec::as_slice)
    }

    /// The full `2^(depth - level)` nodes of `level`, padding included.
    ///
    /// This allocates the whole level; prefer [`MerkleTree::node`] on deep trees.
    #[must_use]
    pub fn padded_level(&self, level: u8) -> Option<Vec<F>> {
        if level > self.depth {
            return None;
        }
        let width = usize::try_from(1_u64 << (self.depth - level)).ok()?;
        let populated = self.populated_level(level)?;

        let mut nodes = Vec::with_capacity(width);
        nodes.extend_from_slice(populated);
        nodes.resize(width, self.empty_root(usize::from(level)));
        Some(nodes)
    }

    pub(super) fn node_or_empty(&self, level: usize, index: u64) -> F {
        usize::try_from(index)
            .ok()
            .and_then(|index| self.levels.get(level)?.get(index).copied())
            .unwrap_or_else(|| self.empty_root(level))
    }

    fn empty_root(&self, level: usize) -> F {
        self.empty_roots.get(level).copied().unwrap_or(F::ZERO)
    }
}

/// Roots of all-zero subtrees: `E_0 = 0`, `E_{l+1} = H2(E_l, E_l)`.
fn empty_roots<H: FieldHasher>(hasher: &H, depth: u8) -> Vec<H::Field> {
    let mut roots = Vec::with_capacity(usize::from(depth) + 1);
    let mut node = H::Field::ZERO;
    roots.push(node);
    for _ in 0..depth {
        node = hasher.hash2(node, node);
        roots.push(node);
    }
    roots
}

fn hash_level<H>(hasher: &H, nodes: &[H::Field], empty: H::Field) -> Vec<H::Field>
where
    H: FieldHasher + Sync,
{
    let workers = if nodes.len().div_ceil(2) < PARALLEL_PAIR_THRESHOLD {
        1
    } else {
        thread::available_parallelism().map_or(1, NonZeroUsize::get)
    };
    hash_level_with_workers(hasher, nodes, empty, workers)
}

/// Compress adjacent pairs left to right. A trailing unpaired node is paired with `empty`.
fn hash_level_with_workers<H>(
    hasher: &H,
    nodes: &[H::Field],
    empty: H::Field,
    workers: usize,
) -> Vec<H::Field>
where
    H: FieldHasher + Sync,
{
    if workers <= 1 {
        return nodes
            .chunks(2)
            .map(|pair| compress_pair(hasher, pair, empty))
            .collect();
    }

    // Chunk lengths are even so that no pair straddles two workers.
    let chunk_len = nodes.len().div_ceil(2).div_ceil(workers).max(1) * 2;
    thread::scope(|scope| {
        #[allow(
            clippy::needless_collect,
            reason = "every worker must be spawned before the first join"
        )]
        let handles: Vec<_> = nodes
            .chunks(chunk_len)
            .map(|chunk| {
                scope.spawn(move || {
                    chunk
                        .chunks(2)
                        .map(|pair| compress_pair(hasher, pair, empty))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        handles
            .into_iter()
            .flat_map(|handle| {
                handle
                    .join()
                    .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
            })
            .collect()
    })
}

fn compress_pair<H: FieldHasher>(hasher: &H, pair: &[H::Field], empty: H::Field) -> H::Field {
    match pair {
        [left, right] => hasher.hash2(*left, *right),
        [left] => hasher.hash2(*left, empty),
        _ => hasher.hash2(empty, empty),
    }
}
