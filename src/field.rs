//! Arithmetic in the prime field Z/PZ
//!
//! Elements are plain [`BigUint`] values. Every operation reduces its inputs
//! before combining them and returns a value in [0, P), so callers may pass
//! unreduced integers (e.g. a raw x-coordinate) without special handling.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::domain::Modulus;
use crate::error::{Result, SharingError};

/// The prime field defined by a validated [`Modulus`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrimeField {
    modulus: Modulus,
}

impl PrimeField {
    #[must_use]
    pub fn new(modulus: Modulus) -> Self {
        Self { modulus }
    }

    #[must_use]
    pub fn modulus(&self) -> &Modulus {
        &self.modulus
    }

    #[must_use]
    pub fn prime(&self) -> &BigUint {
        &self.modulus
    }

    /// Whether `a` is already a canonical element, i.e. `a < P`
    #[must_use]
    pub fn contains(&self, a: &BigUint) -> bool {
        a < self.prime()
    }

    #[must_use]
    pub fn reduce(&self, a: &BigUint) -> BigUint {
        a % self.prime()
    }

    #[must_use]
    pub fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (self.reduce(a) + self.reduce(b)) % self.prime()
    }

    /// `a - b mod P`; P is added before the final reduction so the
    /// intermediate never goes negative
    #[must_use]
    pub fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        let p = self.prime();
        (self.reduce(a) + p - self.reduce(b)) % p
    }

    #[must_use]
    pub fn neg(&self, a: &BigUint) -> BigUint {
        self.sub(&BigUint::zero(), a)
    }

    #[must_use]
    pub fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (self.reduce(a) * self.reduce(b)) % self.prime()
    }

    #[must_use]
    pub fn pow(&self, a: &BigUint, exponent: &BigUint) -> BigUint {
        a.modpow(exponent, self.prime())
    }

    /// Multiplicative inverse via Fermat's little theorem: `a^(P-2) mod P`
    ///
    /// # Errors
    /// Returns [`SharingError::DivisionByZero`] if `a ≡ 0 (mod P)`; the
    /// exponentiation alone would silently return 0 there.
    pub fn inverse(&self, a: &BigUint) -> Result<BigUint> {
        let a = self.reduce(a);
        if a.is_zero() {
            return Err(SharingError::DivisionByZero);
        }
        let exponent = self.prime() - 2u32;
        Ok(self.pow(&a, &exponent))
    }
}
