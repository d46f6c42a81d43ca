//! Stateless facade over share generation and reconstruction
//!
//! [`SharingService`] is the surface outer layers (CLI, WASM bindings) call.
//! It validates the structural preconditions, delegates to
//! [`polynomial`](crate::polynomial) and [`lagrange`](crate::lagrange), and
//! returns plain documents ready for serialization.

use num_bigint::{BigInt, BigUint, Sign};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::{Modulus, Share, SplitConfig};
use crate::error::{Result, SharingError};
use crate::field::PrimeField;
use crate::lagrange::{self, MIN_SHARES};
use crate::polynomial;

pub const ALGORITHM: &str = "Shamir's Secret Sharing";
pub const DESCRIPTION: &str = "Splits a secret into n shares, requires k shares to reconstruct";

/// Result of a split
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitOutput {
    pub threshold: u32,
    pub total_shares: u32,
    pub shares: Vec<Share>,
}

/// Result of a reconstruction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconstructOutput {
    #[serde(with = "crate::codec::decimal")]
    pub secret: BigUint,
}

/// Descriptive information about the configured scheme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInfo {
    pub algorithm: String,
    pub description: String,
    #[serde(with = "crate::codec::decimal")]
    pub prime: BigUint,
    pub prime_bits: u64,
}

/// (k, n) threshold sharing over a fixed prime field
///
/// Holds only the immutable field, so one instance can be shared freely
/// across threads.
#[derive(Debug, Clone, Default)]
pub struct SharingService {
    field: PrimeField,
}

impl SharingService {
    #[must_use]
    pub fn new(modulus: Modulus) -> Self {
        Self {
            field: PrimeField::new(modulus),
        }
    }

    #[must_use]
    pub fn field(&self) -> &PrimeField {
        &self.field
    }

    /// Splits `secret` into `share_count` shares, any `threshold` of which recover it
    ///
    /// Coefficients are drawn from the operating system's CSPRNG. Neither the
    /// secret nor the coefficients are zeroed when dropped.
    ///
    /// # Errors
    /// Returns [`SharingError::InvalidParameters`] if `secret < 0`, `secret >= P`,
    /// `threshold < 2`, `threshold > share_count`, `share_count > 1024` or
    /// `share_count >= P`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use num_bigint::{BigInt, BigUint};
    /// use primeshare::SharingService;
    ///
    /// let service = SharingService::default();
    /// let output = service.split(&BigInt::from(42), 2, 3).unwrap();
    /// assert_eq!(output.shares.len(), 3);
    ///
    /// let recovered = service.reconstruct(&output.shares[1..], None).unwrap();
    /// assert_eq!(recovered.secret, BigUint::from(42u32));
    /// ```
    pub fn split(&self, secret: &BigInt, threshold: u32, share_count: u32) -> Result<SplitOutput> {
        self.split_with_rng(secret, threshold, share_count, &mut OsRng)
    }

    /// [`split`](Self::split) with a caller-provided cryptographically secure generator
    ///
    /// # Errors
    /// Same as [`split`](Self::split)
    pub fn split_with_rng<R>(
        &self,
        secret: &BigInt,
        threshold: u32,
        share_count: u32,
        rng: &mut R,
    ) -> Result<SplitOutput>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        let checked = self.validate_secret(secret).and_then(|secret| {
            let config = SplitConfig::from_raw(threshold, share_count)?;
            self.validate_share_count(config)?;
            Ok((secret, config))
        });
        let (secret, config) = checked.inspect_err(|e| {
            warn!(threshold, share_count, error = %e, "split rejected");
        })?;

        debug!(threshold, share_count, prime_bits = self.field.modulus().bits(), "splitting secret");
        let shares = polynomial::generate_shares(&self.field, &secret, config, rng)?;

        Ok(SplitOutput {
            threshold: *config.threshold(),
            total_shares: *config.share_count(),
            shares,
        })
    }

    /// Recovers the secret from `shares`
    ///
    /// `threshold`, when supplied, is only checked against the number of
    /// shares; it is never used to pick a subset. Shares from a different
    /// split, or fewer than the threshold used at split time, yield a
    /// well-defined but wrong secret rather than an error.
    ///
    /// # Errors
    /// - [`SharingError::InvalidParameters`] if `threshold` is below 2
    /// - [`SharingError::InsufficientShares`] if fewer than 2 (or `threshold`) shares
    /// - [`SharingError::InvalidShare`] if a share value is outside the field
    /// - [`SharingError::DivisionByZero`] if two shares have the same x
    pub fn reconstruct(&self, shares: &[Share], threshold: Option<u32>) -> Result<ReconstructOutput> {
        let result = self
            .validate_share_set(shares, threshold)
            .and_then(|()| lagrange::reconstruct_secret(&self.field, shares));

        match result {
            Ok(secret) => {
                debug!(share_count = shares.len(), ?threshold, "reconstructed secret");
                Ok(ReconstructOutput { secret })
            }
            Err(e) => {
                warn!(share_count = shares.len(), ?threshold, error = %e, "reconstruct rejected");
                Err(e)
            }
        }
    }

    #[must_use]
    pub fn info(&self) -> ServiceInfo {
        let modulus = self.field.modulus();
        ServiceInfo {
            algorithm: ALGORITHM.to_string(),
            description: DESCRIPTION.to_string(),
            prime: (**modulus).clone(),
            prime_bits: modulus.bits(),
        }
    }

    fn validate_secret(&self, secret: &BigInt) -> Result<BigUint> {
        if secret.sign() == Sign::Minus {
            return Err(SharingError::InvalidParameters(
                "secret must be a non-negative integer".to_string(),
            ));
        }
        let secret = secret.magnitude().clone();
        if !self.field.contains(&secret) {
            return Err(SharingError::InvalidParameters(format!(
                "secret must be less than the field modulus {}",
                self.field.prime()
            )));
        }
        Ok(secret)
    }

    fn validate_share_count(&self, config: SplitConfig) -> Result<()> {
        let n = BigUint::from(*config.share_count());
        if !self.field.contains(&n) {
            return Err(SharingError::InvalidParameters(format!(
                "n must be less than the field modulus {}",
                self.field.prime()
            )));
        }
        Ok(())
    }

    fn validate_share_set(&self, shares: &[Share], threshold: Option<u32>) -> Result<()> {
        let required = match threshold {
            Some(k) if (k as usize) < MIN_SHARES => {
                return Err(SharingError::InvalidParameters(format!(
                    "k must be at least 2 (got {k})"
                )));
            }
            Some(k) => k as usize,
            None => MIN_SHARES,
        };
        if shares.len() < required {
            return Err(SharingError::InsufficientShares {
                required,
                provided: shares.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ShareIndex;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn service_2083() -> SharingService {
        SharingService::new(Modulus::new(BigUint::from(2083u32)).unwrap())
    }

    #[test]
    fn test_split_reports_parameters() {
        let service = service_2083();
        let output = service.split(&BigInt::from(42), 2, 3).unwrap();
        assert_eq!(output.threshold, 2);
        assert_eq!(output.total_shares, 3);
        assert_eq!(output.shares.len(), 3);
    }

    #[test]
    fn test_split_rejects_negative_secret() {
        let err = service_2083().split(&BigInt::from(-1), 2, 3).unwrap_err();
        assert!(matches!(err, SharingError::InvalidParameters(_)));
    }

    #[test]
    fn test_split_rejects_secret_at_modulus() {
        let service = service_2083();
        assert!(service.split(&BigInt::from(2082), 2, 3).is_ok());
        let err = service.split(&BigInt::from(2083), 2, 3).unwrap_err();
        assert!(err.to_string().contains("less than the field modulus"));
    }

    #[test]
    fn test_split_rejects_threshold_above_count() {
        let err = service_2083().split(&BigInt::from(5), 3, 2).unwrap_err();
        assert!(matches!(err, SharingError::InvalidParameters(_)));
    }

    #[test]
    fn test_split_rejects_count_not_below_modulus() {
        let service = SharingService::new(Modulus::new(BigUint::from(7u32)).unwrap());
        assert!(service.split(&BigInt::from(3), 2, 6).is_ok());
        let err = service.split(&BigInt::from(3), 2, 7).unwrap_err();
        assert!(err.to_string().contains("n must be less than the field modulus"));
    }

    #[test]
    fn test_split_rejects_oversized_share_count() {
        let service = SharingService::default();
        let err = service.split(&BigInt::from(5), 4_000_000_000, 4_000_000_000).unwrap_err();
        assert!(matches!(err, SharingError::InvalidParameters(_)));
        assert!(err.to_string().contains("n must be at most 1024"));

        assert!(service.split(&BigInt::from(5), 2, 1024).is_ok());
    }

    #[test]
    fn test_split_with_seeded_rng_round_trips() {
        let service = service_2083();
        let mut rng = StdRng::seed_from_u64(2083);
        let output = service.split_with_rng(&BigInt::from(1999), 3, 5, &mut rng).unwrap();
        let picked = vec![
            output.shares[4].clone(),
            output.shares[0].clone(),
            output.shares[2].clone(),
        ];
        let recovered = service.reconstruct(&picked, Some(3)).unwrap();
        assert_eq!(recovered.secret, BigUint::from(1999u32));
    }

    #[test]
    fn test_reconstruct_checks_advertised_threshold() {
        let service = service_2083();
        let output = service.split(&BigInt::from(42), 3, 5).unwrap();
        let err = service.reconstruct(&output.shares[..2], Some(3)).unwrap_err();
        assert_eq!(
            err,
            SharingError::InsufficientShares {
                required: 3,
                provided: 2
            }
        );
    }

    #[test]
    fn test_reconstruct_rejects_threshold_below_two() {
        let service = service_2083();
        let output = service.split(&BigInt::from(42), 2, 3).unwrap();
        let err = service.reconstruct(&output.shares, Some(1)).unwrap_err();
        assert!(matches!(err, SharingError::InvalidParameters(_)));
    }

    #[test]
    fn test_reconstruct_duplicate_x() {
        let service = service_2083();
        let share = Share::new(ShareIndex::new(2).unwrap(), BigUint::from(10u32));
        let err = service.reconstruct(&[share.clone(), share], None).unwrap_err();
        assert_eq!(err, SharingError::DivisionByZero);
    }

    #[test]
    fn test_info() {
        let info = service_2083().info();
        assert_eq!(info.algorithm, "Shamir's Secret Sharing");
        assert_eq!(info.prime, BigUint::from(2083u32));
        assert_eq!(info.prime_bits, 12);
    }

    #[test]
    fn test_service_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SharingService>();

        let service = std::sync::Arc::new(service_2083());
        let handles: Vec<_> = (0..4u32)
            .map(|i| {
                let service = std::sync::Arc::clone(&service);
                std::thread::spawn(move || {
                    let secret = BigInt::from(100 + i);
                    let output = service.split(&secret, 2, 4).unwrap();
                    service.reconstruct(&output.shares[2..], None).unwrap().secret
                })
            })
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), BigUint::from(100 + i as u32));
        }
    }
}
