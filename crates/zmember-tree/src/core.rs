//! Shared accumulator errors and helpers.

use thiserror::Error;

/// The deepest supported tree (up to 2^32 leaves).
pub const MAX_TREE_DEPTH: u8 = 32;

/// Errors that can occur when building or querying the accumulator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// More leaves than the fixed depth can hold.
    #[error("{leaves} leaves exceed the capacity {capacity} of a depth-{depth} tree")]
    CapacityExceeded {
        /// Number of leaves supplied.
        leaves: usize,
        /// Requested depth.
        depth: u8,
        /// `2^depth`.
        capacity: u64,
    },

    /// A witness was requested for a position outside `0..2^depth`.
    #[error("Leaf index {index} is out of range for a depth-{depth} tree")]
    IndexOutOfRange {
        /// Requested leaf index.
        index: u64,
        /// Tree depth.
        depth: u8,
    },

    /// The depth is zero or larger than [`MAX_TREE_DEPTH`].
    #[error("Tree depth {0} is outside the supported range 1..={MAX_TREE_DEPTH}")]
    InvalidDepth(u8),

    /// A path has a different number of siblings and direction bits.
    #[error("Path has {siblings} siblings but {directions} direction bits")]
    PathLengthMismatch {
        /// Number of sibling nodes.
        siblings: usize,
        /// Number of direction bits.
        directions: usize,
    },
}

/// Number of leaf slots in a tree of the given depth.
///
/// # Errors
/// Returns [`TreeError::InvalidDepth`] if `depth` is zero or above [`MAX_TREE_DEPTH`].
pub const fn capacity(depth: u8) -> Result<u64, TreeError> {
    if depth == 0 || depth > MAX_TREE_DEPTH {
        return Err(TreeError::InvalidDepth(depth));
    }
    #[allow(
        clippy::arithmetic_side_effects,
        reason = "depth is bounded by MAX_TREE_DEPTH, so the shift cannot overflow"
    )]
    let slots = 1_u64 << depth;
    Ok(slots)
}

/// Validate that `leaf_count` leaves fit into a tree of `depth` levels.
///
/// # Errors
/// Returns an error if the depth is unsupported or the leaves exceed the capacity.
pub fn validate_leaf_count(leaf_count: usize, depth: u8) -> Result<(), TreeError> {
    let capacity = capacity(depth)?;
    let fits = u64::try_from(leaf_count).is_ok_and(|count| count <= capacity);
    if !fits {
        return Err(TreeError::CapacityExceeded {
            leaves: leaf_count,
            depth,
            capacity,
        });
    }
    Ok(())
}

/// Returns `true` each time progress crosses another 10% step.
pub const fn should_report_progress(current: usize, total: usize, last_pct: &mut usize) -> bool {
    if total == 0 {
        return false;
    }
    #[allow(clippy::arithmetic_side_effects)]
    let pct = current.saturating_mul(100).saturating_div(total);
    if pct >= last_pct.saturating_add(10) {
        *last_pct = pct;
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_bounds() {
        assert_eq!(capacity(1), Ok(2));
        assert_eq!(capacity(16), Ok(65_536));
        assert_eq!(capacity(MAX_TREE_DEPTH), Ok(1_u64 << 32));
        assert_eq!(capacity(0), Err(TreeError::InvalidDepth(0)));
        assert_eq!(capacity(33), Err(TreeError::InvalidDepth(33)));
    }

    #[test]
    fn leaf_count_boundary() {
        assert_eq!(validate_leaf_count(0, 3), Ok(()));
        assert_eq!(validate_leaf_count(8, 3), Ok(()));
        assert_eq!(
            validate_leaf_count(9, 3),
            Err(TreeError::CapacityExceeded {
                leaves: 9,
                depth: 3,
                capacity: 8
            })
        );
    }

    #[test]
    fn progress_is_reported_in_steps() {
        let mut last = 0;
        let reported: Vec<usize> = (1..=20)
            .filter(|current| should_report_progress(*current, 20, &mut last))
            .collect();
        assert_eq!(reported, vec![2, 4, 6, 8, 10, 12, 14, 16, 18, 20]);
        assert!(!should_report_progress(1, 0, &mut last));
    }
}
