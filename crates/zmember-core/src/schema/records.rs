//! Exported membership records.
//!
//! Field names and order are part of the contract with downstream proof circuits, which
//! index `pathElements[l]` / `pathIndex[l]` by tree level `l = 0..depth`.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use crate::base::{Decimal, FieldElement};

/// The published accumulator root.
#[serde_as]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RootRecord {
    /// Merkle root over all participant commitments.
    #[serde_as(as = "Decimal")]
    #[schemars(with = "String")]
    pub root: FieldElement,
}

/// Everything one participant needs to prove membership and claim once per context.
///
/// `Debug` redacts `secret`.
#[serde_as]
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WitnessRecord {
    /// The participant secret. The leaf is `H1(secret)`.
    #[serde_as(as = "Decimal")]
    #[schemars(with = "String")]
    pub secret: FieldElement,
    /// Sibling nodes from the leaf level up to just below the root.
    #[serde_as(as = "Vec<Decimal>")]
    #[schemars(with = "Vec<String>")]
    pub path_elements: Vec<FieldElement>,
    /// Per-level position bits: `0` when the current node is the left child, `1` when right.
    pub path_index: Vec<u8>,
    /// The root this path hashes up to.
    #[serde_as(as = "Decimal")]
    #[schemars(with = "String")]
    pub root: FieldElement,
    /// Public context identifier scoping the nullifier.
    #[serde_as(as = "Decimal")]
    #[schemars(with = "String")]
    pub external_nullifier: FieldElement,
    /// `H2(secret, externalNullifier)`.
    #[serde_as(as = "Decimal")]
    #[schemars(with = "String")]
    pub nullifier_hash: FieldElement,
}

impl WitnessRecord {
    /// Tree depth implied by the path, if both arrays agree on it.
    #[must_use]
    pub const fn depth(&self) -> Option<usize> {
        if self.path_elements.len() == self.path_index.len() {
            Some(self.path_elements.len())
        } else {
            None
        }
    }
}

impl fmt::Debug for WitnessRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WitnessRecord")
            .field("secret", &"<redacted>")
            .field("path_elements", &self.path_elements)
            .field("path_index", &self.path_index)
            .field("root", &self.root)
            .field("external_nullifier", &self.external_nullifier)
            .field("nullifier_hash", &self.nullifier_hash)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use pasta_curves::pallas;

    use super::*;

    fn record() -> WitnessRecord {
        WitnessRecord {
            secret: pallas::Base::from(11_u64),
            path_elements: vec![pallas::Base::from(1_u64), pallas::Base::from(2_u64)],
            path_index: vec![1, 0],
            root: pallas::Base::from(3_u64),
            external_nullifier: pallas::Base::from(12_345_u64),
            nullifier_hash: pallas::Base::from(4_u64),
        }
    }

    #[test]
    fn root_record_format() {
        let json = serde_json::to_string(&RootRecord {
            root: pallas::Base::from(99_u64),
        })
        .expect("serialize root record");
        assert_eq!(json, r#"{"root":"99"}"#);
    }

    #[test]
    fn witness_record_field_names_and_order() {
        let json = serde_json::to_string(&record()).expect("serialize witness record");
        assert_eq!(
            json,
            concat!(
                r#"{"secret":"11","pathElements":["1","2"],"pathIndex":[1,0],"#,
                r#""root":"3","externalNullifier":"12345","nullifierHash":"4"}"#
            )
        );

        let decoded: WitnessRecord = serde_json::from_str(&json).expect("deserialize record");
        assert_eq!(decoded, record());
        assert_eq!(decoded.depth(), Some(2));
    }

    #[test]
    fn depth_requires_matching_lengths() {
        let mut record = record();
        record.path_index.push(0);
        assert_eq!(record.depth(), None);
    }

    #[test]
    fn debug_redacts_the_secret() {
        let mut record = record();
        record.secret = pallas::Base::from(987_654_321_u64);
        let debug = format!("{record:?}");
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains(&format!("{:?}", record.secret)));
        assert!(!debug.contains("987654321"));
        assert!(debug.contains(&format!("{:?}", record.root)));
    }
}
