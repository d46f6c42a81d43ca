//! `ShareCount` newtype for secret sharing

use crate::error::{Result, SharingError};

/// Number of shares to create (2..=1024)
///
/// The field adds a second bound: every x-coordinate 1..=n must be a distinct
/// non-zero field element, which the service checks against its modulus.
/// Since k <= n, the cap also bounds the polynomial degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ShareCount(u32);

impl ShareCount {
    /// Minimum valid share count
    pub const MIN: u32 = 2;

    /// Maximum valid share count
    pub const MAX: u32 = 1024;

    /// Creates a new share count
    ///
    /// # Errors
    /// Returns [`SharingError::InvalidParameters`] if count is below 2 or above 1024
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primeshare::domain::ShareCount;
    ///
    /// let count = ShareCount::new(5).unwrap();
    /// assert_eq!(*count, 5);
    ///
    /// assert!(ShareCount::new(0).is_err());
    /// assert!(ShareCount::new(1).is_err());
    ///
    /// assert!(ShareCount::new(ShareCount::MAX).is_ok());
    /// assert!(ShareCount::new(ShareCount::MAX + 1).is_err());
    /// ```
    pub fn new(value: u32) -> Result<Self> {
        if value < Self::MIN {
            return Err(SharingError::InvalidParameters(format!(
                "n must be at least {} (got {value})",
                Self::MIN
            )));
        }
        if value > Self::MAX {
            return Err(SharingError::InvalidParameters(format!(
                "n must be at most {} (got {value})",
                Self::MAX
            )));
        }
        Ok(Self(value))
    }
}

impl std::ops::Deref for ShareCount {
    type Target = u32;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
