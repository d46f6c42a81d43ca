//! A single share: one evaluation point of the secret polynomial

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use super::ShareIndex;

/// A share `(x, y)` where `y = f(x) mod P`
///
/// On the wire `x` is a JSON integer and `y` a decimal string; `y` is also
/// accepted as a JSON integer when it fits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Share {
    #[serde(with = "index_as_u32")]
    pub x: ShareIndex,
    #[serde(with = "crate::codec::decimal")]
    pub y: BigUint,
}

impl Share {
    /// Builds a share from an already validated index and value
    #[must_use]
    pub fn new(x: ShareIndex, y: BigUint) -> Self {
        Self { x, y }
    }
}

mod index_as_u32 {
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    use super::ShareIndex;

    pub fn serialize<S: Serializer>(index: &ShareIndex, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(**index)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ShareIndex, D::Error> {
        let raw = u32::deserialize(deserializer)?;
        ShareIndex::new(raw).map_err(D::Error::custom)
    }
}
