//! Share generation: a random polynomial with the secret as constant term

use num_bigint::{BigUint, RandBigInt};
use num_traits::Zero;
use rand::{CryptoRng, RngCore};

use crate::domain::{Share, ShareIndex, SplitConfig};
use crate::error::Result;
use crate::field::PrimeField;

/// Coefficients `[a0, a1, .., a(k-1)]` of `f(x) = a0 + a1*x + .. + a(k-1)*x^(k-1)`
///
/// Lives only for the duration of one split.
struct Polynomial {
    coefficients: Vec<BigUint>,
}

impl Polynomial {
    /// `a0 = secret`, the remaining `degree` coefficients uniform over [0, P)
    fn random<R>(field: &PrimeField, secret: &BigUint, degree: usize, rng: &mut R) -> Self
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        let low = BigUint::zero();
        let mut coefficients = Vec::with_capacity(degree + 1);
        coefficients.push(field.reduce(secret));
        coefficients.extend((0..degree).map(|_| rng.gen_biguint_range(&low, field.prime())));
        Self { coefficients }
    }

    /// Horner evaluation, every step reduced mod P
    fn evaluate(&self, field: &PrimeField, x: &BigUint) -> BigUint {
        self.coefficients
            .iter()
            .rev()
            .fold(BigUint::zero(), |acc, coefficient| {
                field.add(&field.mul(&acc, x), coefficient)
            })
    }
}

/// Evaluates a fresh random polynomial of degree `k - 1` at `x = 1..=n`
///
/// The caller is responsible for the preconditions (`secret < P`, `n < P`);
/// the service facade enforces them.
///
/// # Errors
/// Only if an x-coordinate cannot be represented as a [`ShareIndex`], which
/// cannot happen for `x >= 1`.
pub fn generate_shares<R>(
    field: &PrimeField,
    secret: &BigUint,
    config: SplitConfig,
    rng: &mut R,
) -> Result<Vec<Share>>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let degree = (*config.threshold() - 1) as usize;
    let polynomial = Polynomial::random(field, secret, degree, rng);

    (1..=*config.share_count())
        .map(|x| {
            let index = ShareIndex::new(x)?;
            let y = polynomial.evaluate(field, &BigUint::from(x));
            Ok(Share::new(index, y))
        })
        .collect()
}
