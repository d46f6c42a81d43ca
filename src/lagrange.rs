//! Secret reconstruction by Lagrange interpolation at x = 0

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::domain::Share;
use crate::error::{Result, SharingError};
use crate::field::PrimeField;

/// Fewest shares that can define a non-constant polynomial
pub const MIN_SHARES: usize = 2;

/// Recovers `f(0)` from a set of shares
///
/// Every supplied share takes part in the interpolation. Passing fewer shares
/// than the threshold used at split time does not fail: it returns a
/// well-defined field element that is not the original secret.
///
/// # Errors
/// - [`SharingError::InsufficientShares`] if fewer than [`MIN_SHARES`] shares are given
/// - [`SharingError::InvalidShare`] if a `y` is not a canonical field element
/// - [`SharingError::DivisionByZero`] if two shares have the same x (mod P)
pub fn reconstruct_secret(field: &PrimeField, shares: &[Share]) -> Result<BigUint> {
    if shares.len() < MIN_SHARES {
        return Err(SharingError::InsufficientShares {
            required: MIN_SHARES,
            provided: shares.len(),
        });
    }
    if let Some(share) = shares.iter().find(|share| !field.contains(&share.y)) {
        return Err(SharingError::InvalidShare(format!(
            "share x = {} has y outside [0, {})",
            *share.x,
            field.prime()
        )));
    }

    let xs: Vec<BigUint> = shares.iter().map(|share| BigUint::from(*share.x)).collect();

    shares.iter().enumerate().try_fold(BigUint::zero(), |secret, (i, share)| {
        let (numerator, denominator) = xs
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .fold((BigUint::one(), BigUint::one()), |(num, den), (_, xj)| {
                (
                    field.mul(&num, &field.neg(xj)),
                    field.mul(&den, &field.sub(&xs[i], xj)),
                )
            });

        let basis = field.mul(&numerator, &field.inverse(&denominator)?);
        Ok(field.add(&secret, &field.mul(&share.y, &basis)))
    })
}
