//! Domain types for threshold secret sharing over a prime field
//!
//! This module contains validated newtypes and configuration:
//! - [`Threshold`] - Minimum shares required for reconstruction (>= 2)
//! - [`ShareCount`] - Total number of shares to create (>= 2)
//! - [`ShareIndex`] - Share x-coordinate (>= 1)
//! - [`SplitConfig`] - Validated threshold and share count pair
//! - [`Modulus`] - Validated prime defining the field
//! - [`Share`] - An (x, y) evaluation point of the secret polynomial

mod config;
mod modulus;
mod share;
mod share_count;
mod share_index;
mod threshold;

pub use config::SplitConfig;
pub use modulus::Modulus;
pub use share::Share;
pub use share_count::ShareCount;
pub use share_index::ShareIndex;
pub use threshold::Threshold;
