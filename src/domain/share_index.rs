//! `ShareIndex` newtype: the x-coordinate of a share

use crate::error::{Result, SharingError};

/// Share x-coordinate (1..)
///
/// Index 0 is reserved: the polynomial evaluated at 0 is the secret itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShareIndex(u32);

impl ShareIndex {
    /// Creates a new share index
    ///
    /// # Errors
    /// Returns [`SharingError::InvalidShare`] if index is 0
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primeshare::domain::ShareIndex;
    ///
    /// let index = ShareIndex::new(1).unwrap();
    /// assert_eq!(*index, 1);
    ///
    /// assert!(ShareIndex::new(0).is_err());
    /// ```
    pub fn new(value: u32) -> Result<Self> {
        if value == 0 {
            return Err(SharingError::InvalidShare(
                "x must be a positive integer (x = 0 is the secret)".to_string(),
            ));
        }
        Ok(Self(value))
    }
}

impl std::ops::Deref for ShareIndex {
    type Target = u32;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
