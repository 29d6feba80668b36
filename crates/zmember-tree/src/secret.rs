//! Participant secrets.

use std::fmt;
use std::marker::PhantomData;

use ff::PrimeField;
use pasta_curves::pallas;
use rand_core::{CryptoRng, RngCore};
use secrecy::{ExposeSecret, SecretBox};

/// A participant secret, held as the canonical little-endian encoding of a field element.
///
/// The encoding lives in a [`SecretBox`] and is zeroized on drop. `Secret` is neither `Copy`
/// nor `Clone`, and `Debug` never prints the value.
pub struct Secret<F> {
    repr: SecretBox<[u8; 32]>,
    field: PhantomData<F>,
}

impl<F: PrimeField<Repr = [u8; 32]>> Secret<F> {
    /// Wrap an already-reduced field element.
    #[must_use]
    pub fn new(value: F) -> Self {
        Self {
            repr: SecretBox::init_with_mut(|repr| *repr = value.to_repr()),
            field: PhantomData,
        }
    }

    /// Decode the secret field element.
    #[must_use]
    pub fn value(&self) -> F {
        // Only canonical encodings are ever stored.
        Option::from(F::from_repr(*self.repr.expose_secret())).unwrap_or(F::ZERO)
    }
}

impl Secret<pallas::Base> {
    /// Sample a uniform 254-bit secret.
    ///
    /// Every 254-bit integer is below the Pallas modulus (`p > 2^254`), so clearing the top
    /// two bits of 32 random bytes yields a canonical encoding with no rejection.
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        Self {
            repr: SecretBox::init_with_mut(|repr: &mut [u8; 32]| {
                rng.fill_bytes(repr);
                if let Some(top) = repr.last_mut() {
                    *top &= 0x3f;
                }
            }),
            field: PhantomData,
        }
    }
}

impl<F> ExposeSecret<[u8; 32]> for Secret<F> {
    fn expose_secret(&self) -> &[u8; 32] {
        self.repr.expose_secret()
    }
}

impl<F> fmt::Debug for Secret<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(..)")
    }
}
