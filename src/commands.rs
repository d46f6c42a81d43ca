use anyhow::{Context, Result};
use zeroize::Zeroizing;

use crate::codec;
use crate::domain::SplitConfig;
use crate::service::{ReconstructOutput, ServiceInfo, SharingService, SplitOutput};

/// Split a secret given as decimal text into shares
///
/// Only the caller's text can be wiped: the parsed big integer and the
/// polynomial coefficients live in `num-bigint` buffers, which are released
/// without zeroing.
///
/// # Errors
/// Returns an error if the secret is not an integer or is out of range for the field
pub fn split_secret(
    service: &SharingService,
    secret_str: &str,
    config: SplitConfig,
) -> Result<SplitOutput> {
    let secret = codec::parse_secret(secret_str)?;

    service
        .split(&secret, *config.threshold(), *config.share_count())
        .context("Failed to split secret")
}

/// Reconstruct the secret from share input (see [`codec::parse_reconstruct_input`])
///
/// A `threshold` given here takes precedence over one embedded in the input.
///
/// # Errors
/// Returns an error if the input cannot be parsed or reconstruction fails
pub fn reconstruct_shares(
    service: &SharingService,
    input: &str,
    threshold: Option<u32>,
) -> Result<ReconstructOutput> {
    let request = codec::parse_reconstruct_input(input)?;
    let threshold = threshold.or(request.advertised_threshold());

    service
        .reconstruct(&request.shares, threshold)
        .context("Failed to reconstruct secret")
}

/// Describe the configured scheme
#[must_use]
pub fn describe(service: &SharingService) -> ServiceInfo {
    service.info()
}

/// Full split flow for text input: parse, split, encode as JSON
///
/// # Errors
/// Returns an error if splitting or serialization fails
pub fn split_to_json(
    service: &SharingService,
    secret_str: &Zeroizing<String>,
    config: SplitConfig,
) -> Result<String> {
    let output = split_secret(service, secret_str, config)?;
    codec::to_json(&output)
}

/// Full reconstruct flow for text input: parse, reconstruct, encode as JSON
///
/// # Errors
/// Returns an error if reconstruction or serialization fails
pub fn reconstruct_to_json(
    service: &SharingService,
    input: &str,
    threshold: Option<u32>,
) -> Result<String> {
    let output = reconstruct_shares(service, input, threshold)?;
    codec::to_json(&output)
}
