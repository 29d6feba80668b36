//! Canonical encodings of the accumulator's field elements.
//!
//! Every tree node, secret and nullifier is an element of the Pallas base field. Values
//! entering from outside (JSON records, CLI flags, raw bytes) are validated here, so that
//! the hashing code only ever sees reduced elements.

use ff::PrimeField as _;
use num_bigint::BigUint;
use pasta_curves::pallas;
use thiserror::Error;

/// The field every accumulator value lives in.
pub type FieldElement = pallas::Base;

/// Size of a canonical little-endian field element encoding.
pub const FIELD_ELEMENT_SIZE: usize = 32;

/// An input is not a valid reduced field element.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The value is negative.
    #[error("Field element must not be negative, got {0}")]
    Negative(String),

    /// The value is not a base-10 integer.
    #[error("Field element is not a decimal integer: {0:?}")]
    NotDecimal(String),

    /// The value is greater than or equal to the field modulus.
    #[error("Field element {0} is not reduced modulo the field prime")]
    NotReduced(String),

    /// The bytes are not the canonical encoding of a field element.
    #[error("Field element bytes are not a canonical encoding")]
    NonCanonical,
}

/// Parse a decimal string into a field element.
///
/// Leading and trailing whitespace is ignored. Signs, separators and values `>= p` are
/// rejected rather than reduced.
///
/// # Errors
/// Returns a [`DomainError`] if the string is negative, not decimal, or not reduced.
pub fn parse_decimal(value: &str) -> Result<FieldElement, DomainError> {
    let trimmed = value.trim();
    if trimmed.starts_with('-') {
        return Err(DomainError::Negative(trimmed.to_owned()));
    }
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DomainError::NotDecimal(trimmed.to_owned()));
    }

    let integer = BigUint::parse_bytes(trimmed.as_bytes(), 10)
        .ok_or_else(|| DomainError::NotDecimal(trimmed.to_owned()))?;
    let bytes = integer.to_bytes_le();

    let mut repr = [0_u8; FIELD_ELEMENT_SIZE];
    repr.get_mut(..bytes.len())
        .ok_or_else(|| DomainError::NotReduced(trimmed.to_owned()))?
        .copy_from_slice(&bytes);

    from_canonical_bytes(repr).map_err(|_| DomainError::NotReduced(trimmed.to_owned()))
}

/// Render a field element as its canonical decimal string.
#[must_use]
pub fn to_decimal(element: &FieldElement) -> String {
    BigUint::from_bytes_le(&element.to_repr()).to_string()
}

/// Decode a little-endian canonical encoding.
///
/// # Errors
/// Returns [`DomainError::NonCanonical`] if the bytes encode a value `>= p`.
pub fn from_canonical_bytes(bytes: [u8; FIELD_ELEMENT_SIZE]) -> Result<FieldElement, DomainError> {
    Option::from(pallas::Base::from_repr(bytes)).ok_or(DomainError::NonCanonical)
}
