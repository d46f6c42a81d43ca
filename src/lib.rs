//! (k, n) threshold secret sharing over a prime field
//!
//! A secret `s < P` becomes the constant term of a random polynomial of degree
//! `k - 1`; the shares are its values at `x = 1..=n`. Any `k` shares recover
//! `s` by Lagrange interpolation at `x = 0`.
//!
//! The arithmetic lives in [`field`], share generation in [`polynomial`],
//! reconstruction in [`lagrange`]; [`SharingService`] is the facade the CLI
//! and the WASM bindings call.

#[cfg(feature = "cli")]
pub mod cli;
pub mod codec;
pub mod commands;
pub mod domain;
pub mod error;
pub mod field;
pub mod lagrange;
pub mod polynomial;
pub mod service;
pub mod wasm;

pub use domain::{Modulus, Share, ShareIndex, SplitConfig};
pub use error::{Result, SharingError};
pub use field::PrimeField;
pub use service::{ReconstructOutput, ServiceInfo, SharingService, SplitOutput};
