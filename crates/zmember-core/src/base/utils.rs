//! Serde helpers for field elements.

use serde::Deserialize as _;

use super::field::{FieldElement, parse_decimal, to_decimal};

/// A `serde_as` adapter that encodes field elements as canonical decimal strings.
pub struct Decimal;

impl serde_with::SerializeAs<FieldElement> for Decimal {
    fn serialize_as<S>(value: &FieldElement, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&to_decimal(value))
    }
}

impl<'de> serde_with::DeserializeAs<'de, FieldElement> for Decimal {
    fn deserialize_as<D>(deserializer: D) -> Result<FieldElement, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        parse_decimal(&text).map_err(serde::de::Error::custom)
    }
}
