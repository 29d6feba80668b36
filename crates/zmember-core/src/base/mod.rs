//! Foundational field-element types and serde helpers.

mod field;
mod utils;

pub use field::{
    DomainError, FIELD_ELEMENT_SIZE, FieldElement, from_canonical_bytes, parse_decimal, to_decimal,
};
pub use utils::Decimal;
