//! Field modulus configuration

use std::str::FromStr;

use num_bigint::{BigUint, RandBigInt};
use num_traits::{One, Zero};
use rand::rngs::OsRng;

use crate::error::{Result, SharingError};

/// Fixed Miller-Rabin bases; together they are deterministic below 3.3 * 10^24
const WITNESS_PRIMES: [u32; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// Extra random Miller-Rabin rounds for moduli beyond the deterministic range
const RANDOM_ROUNDS: usize = 32;

/// Prime modulus P defining the field Z/PZ
///
/// Invariant: P is an odd prime (P >= 3), checked at construction with
/// Miller-Rabin. The modulus caps the representable secret: every secret and
/// every share value lies in [0, P).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modulus(BigUint);

impl Modulus {
    /// Bit length of the default modulus, the Mersenne prime 2^127 - 1
    pub const DEFAULT_BITS: u32 = 127;

    /// Creates a modulus from a candidate prime
    ///
    /// # Errors
    /// Returns [`SharingError::InvalidModulus`] if the value is below 3 or composite
    ///
    /// # Examples
    ///
    /// ```rust
    /// use num_bigint::BigUint;
    /// use primeshare::domain::Modulus;
    ///
    /// let modulus = Modulus::new(BigUint::from(2083u32)).unwrap();
    /// assert_eq!(modulus.to_string(), "2083");
    ///
    /// assert!(Modulus::new(BigUint::from(2084u32)).is_err());
    /// assert!(Modulus::new(BigUint::from(2u32)).is_err());
    /// ```
    pub fn new(value: BigUint) -> Result<Self> {
        if value < BigUint::from(3u32) {
            return Err(SharingError::InvalidModulus(format!(
                "modulus must be at least 3 (got {value})"
            )));
        }
        if !is_probable_prime(&value) {
            return Err(SharingError::InvalidModulus(format!(
                "{value} is not prime"
            )));
        }
        Ok(Self(value))
    }

    /// The Mersenne prime 2^127 - 1
    #[must_use]
    pub fn mersenne_127() -> Self {
        Self((BigUint::one() << Self::DEFAULT_BITS) - 1u32)
    }

    /// Number of bits needed to represent P
    #[must_use]
    pub fn bits(&self) -> u64 {
        self.0.bits()
    }
}

impl Default for Modulus {
    fn default() -> Self {
        Self::mersenne_127()
    }
}

impl FromStr for Modulus {
    type Err = SharingError;

    fn from_str(s: &str) -> Result<Self> {
        let value = s.trim().parse::<BigUint>().map_err(|e| {
            SharingError::InvalidModulus(format!("'{s}' is not a decimal integer: {e}"))
        })?;
        Self::new(value)
    }
}

impl std::ops::Deref for Modulus {
    type Target = BigUint;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for Modulus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Miller-Rabin primality test
fn is_probable_prime(n: &BigUint) -> bool {
    if *n < BigUint::from(2u32) {
        return false;
    }
    for p in WITNESS_PRIMES {
        if *n == BigUint::from(p) {
            return true;
        }
        if (n % p).is_zero() {
            return false;
        }
    }

    // n is odd and larger than every fixed witness from here on
    let n_minus_one = n - 1u32;
    let s = n_minus_one.trailing_zeros().unwrap_or(0);
    let d = &n_minus_one >> s;

    let low = BigUint::from(2u32);
    let mut rng = OsRng;
    let random_witnesses = (0..RANDOM_ROUNDS).map(|_| rng.gen_biguint_range(&low, &n_minus_one));

    WITNESS_PRIMES
        .iter()
        .map(|&p| BigUint::from(p))
        .chain(random_witnesses)
        .all(|a| passes_round(n, &n_minus_one, &d, s, &a))
}

/// One Miller-Rabin round with witness `a`, where n - 1 = d * 2^s
fn passes_round(n: &BigUint, n_minus_one: &BigUint, d: &BigUint, s: u64, a: &BigUint) -> bool {
    let mut x = a.modpow(d, n);
    if x.is_one() || x == *n_minus_one {
        return true;
    }
    for _ in 1..s {
        x = (&x * &x) % n;
        if x == *n_minus_one {
            return true;
        }
        if x.is_one() {
            return false;
        }
    }
    false
}
