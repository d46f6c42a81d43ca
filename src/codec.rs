//! JSON encoding for shares, requests and results
//!
//! Field elements travel as decimal strings so that values wider than a JSON
//! number survive intact. On input a plain JSON integer is accepted as well.
//!
//! # Examples
//!
//! ```rust
//! use primeshare::codec;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let share = codec::parse_share(r#"{"x": 3, "y": "1500"}"#)?;
//! assert_eq!(*share.x, 3);
//!
//! let request = codec::parse_reconstruct_input(
//!     r#"{"shares": [{"x": 1, "y": 52}, {"x": 3, "y": "72"}], "k": 2}"#,
//! )?;
//! assert_eq!(request.shares.len(), 2);
//! assert_eq!(request.advertised_threshold(), Some(2));
//! # Ok(())
//! # }
//! ```

use anyhow::{Context, Result, bail};
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::Share;

/// Input of a reconstruction: the shares and an optional advertised threshold
///
/// The threshold is read from `k` or, so that a split document can be fed
/// straight back in, from `threshold`. When both are present `k` wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconstructRequest {
    pub shares: Vec<Share>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub k: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<u32>,
}

impl ReconstructRequest {
    fn from_shares(shares: Vec<Share>) -> Self {
        Self {
            shares,
            k: None,
            threshold: None,
        }
    }

    /// The advertised threshold, `k` taking precedence over `threshold`
    #[must_use]
    pub fn advertised_threshold(&self) -> Option<u32> {
        self.k.or(self.threshold)
    }
}

/// Serde adapter for [`BigUint`](num_bigint::BigUint) as a decimal string
pub mod decimal {
    use std::fmt;

    use num_bigint::BigUint;
    use serde::de::{self, Unexpected, Visitor};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigUint, D::Error> {
        deserializer.deserialize_any(DecimalVisitor)
    }

    struct DecimalVisitor;

    impl Visitor<'_> for DecimalVisitor {
        type Value = BigUint;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a non-negative integer or a string of decimal digits")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<BigUint, E> {
            Ok(BigUint::from(v))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<BigUint, E> {
            u64::try_from(v)
                .map(BigUint::from)
                .map_err(|_| E::invalid_value(Unexpected::Signed(v), &self))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<BigUint, E> {
            let digits = v.trim();
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(E::invalid_value(Unexpected::Str(v), &self));
            }
            digits.parse().map_err(E::custom)
        }
    }
}

/// Parses a secret given as decimal text
///
/// A leading `-` is accepted so that the service, not the parser, reports a
/// negative secret as an out-of-range parameter.
///
/// # Errors
/// Returns an error if the text is not an integer
pub fn parse_secret(input: &str) -> Result<BigInt> {
    let trimmed = input.trim();
    let digits = trimmed.strip_prefix('-').unwrap_or(trimmed);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        bail!("Secret must be an integer");
    }
    trimmed
        .parse::<BigInt>()
        .context("Failed to parse secret")
}

/// Parses a single share such as `{"x": 1, "y": "52"}`
///
/// # Errors
/// Returns an error if the text is not a share object or `x` is 0
pub fn parse_share(input: &str) -> Result<Share> {
    serde_json::from_str(input.trim()).context("Failed to parse share")
}

/// Parses reconstruction input
///
/// Accepted forms:
/// - a JSON document with a `shares` array and optional `k` / `threshold`
///   (the output of a split qualifies)
/// - a JSON array of shares
/// - one share object per line; blank lines are skipped
///
/// # Errors
/// Returns an error if no shares are present or any share is malformed
pub fn parse_reconstruct_input(input: &str) -> Result<ReconstructRequest> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        bail!("No shares provided");
    }

    if let Ok(Value::Object(document)) = serde_json::from_str::<Value>(trimmed) {
        if document.contains_key("shares") {
            return serde_json::from_value(Value::Object(document))
                .context("Failed to parse shares document");
        }
    }
    if trimmed.starts_with('[') {
        let shares: Vec<Share> =
            serde_json::from_str(trimmed).context("Failed to parse share array")?;
        return Ok(ReconstructRequest::from_shares(shares));
    }

    let shares = trimmed
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(idx, line)| {
            parse_share(line).with_context(|| format!("Failed to parse share #{}", idx + 1))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(ReconstructRequest::from_shares(shares))
}

/// Pretty-printed JSON for any result document
///
/// # Errors
/// Returns an error if serialization fails
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize output")
}
