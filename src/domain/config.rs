//! Configuration validation for secret splits

use crate::error::{Result, SharingError};

use super::{ShareCount, Threshold};

/// Validated pair of threshold and share count
///
/// Enforces the invariant that threshold <= `share_count` at the type level.
/// This prevents creating configurations where more shares are required
/// than actually exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitConfig {
    threshold: Threshold,
    share_count: ShareCount,
}

impl SplitConfig {
    /// Creates a new split configuration
    ///
    /// # Errors
    /// Returns [`SharingError::InvalidParameters`] if threshold exceeds share count
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primeshare::domain::{SplitConfig, Threshold, ShareCount};
    ///
    /// // Valid: threshold <= share_count
    /// let config = SplitConfig::new(
    ///     Threshold::new(3).unwrap(),
    ///     ShareCount::new(5).unwrap()
    /// ).unwrap();
    ///
    /// assert_eq!(*config.threshold(), 3);
    /// assert_eq!(*config.share_count(), 5);
    ///
    /// // Invalid: threshold > share_count
    /// let result = SplitConfig::new(
    ///     Threshold::new(5).unwrap(),
    ///     ShareCount::new(3).unwrap()
    /// );
    /// assert!(result.is_err());
    /// ```
    pub fn new(threshold: Threshold, share_count: ShareCount) -> Result<Self> {
        if *threshold > *share_count {
            return Err(SharingError::InvalidParameters(format!(
                "k must be less than or equal to n (k = {}, n = {})",
                *threshold, *share_count
            )));
        }
        Ok(Self {
            threshold,
            share_count,
        })
    }

    /// Validates raw `k` and `n` in the order a caller would report them:
    /// threshold first, then the k <= n relation, then the share count.
    ///
    /// # Errors
    /// Returns [`SharingError::InvalidParameters`] if any bound is violated
    pub fn from_raw(threshold: u32, share_count: u32) -> Result<Self> {
        let threshold = Threshold::new(threshold)?;
        if *threshold > share_count {
            return Err(SharingError::InvalidParameters(format!(
                "k must be less than or equal to n (k = {}, n = {share_count})",
                *threshold
            )));
        }
        Self::new(threshold, ShareCount::new(share_count)?)
    }

    /// Gets the threshold value
    #[must_use]
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// Gets the share count value
    #[must_use]
    pub fn share_count(&self) -> ShareCount {
        self.share_count
    }
}
