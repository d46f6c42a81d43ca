//! WASM bindings for primeshare
//!
//! This module provides JavaScript-friendly bindings for split, reconstruct and info.
//! Every function takes an optional decimal `prime`; when absent the default
//! modulus (2^127 - 1) is used.

use wasm_bindgen::prelude::*;

use crate::codec;
use crate::domain::Modulus;
use crate::service::SharingService;

/// Initialize panic hook for better error messages in the browser console
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Use wee_alloc as the global allocator for smaller WASM binary size
#[cfg(target_arch = "wasm32")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

fn service_for(prime: Option<String>) -> Result<SharingService, JsValue> {
    match prime {
        Some(prime) => prime
            .parse::<Modulus>()
            .map(SharingService::new)
            .map_err(|e| JsValue::from_str(&format!("Invalid prime: {}", e))),
        None => Ok(SharingService::default()),
    }
}

/// Split a secret into threshold shares
///
/// # Arguments
/// * `secret` - The secret as a decimal string
/// * `shares` - Total number of shares to create (n)
/// * `threshold` - Minimum number of shares needed to reconstruct (k)
/// * `prime` - Optional field modulus as a decimal string
///
/// # Returns
/// JSON string `{ threshold, totalShares, shares: [{x, y}] }`, or an error message
///
/// # Example (JavaScript)
/// ```javascript
/// const result = JSON.parse(wasm_split("42", 5, 3));
/// console.log(`Created ${result.totalShares} shares with threshold ${result.threshold}`);
/// ```
#[wasm_bindgen]
pub fn wasm_split(
    secret: &str,
    shares: u32,
    threshold: u32,
    prime: Option<String>,
) -> Result<String, JsValue> {
    let service = service_for(prime)?;

    let secret = codec::parse_secret(secret)
        .map_err(|e| JsValue::from_str(&format!("Invalid secret: {}", e)))?;

    let output = service
        .split(&secret, threshold, shares)
        .map_err(|e| JsValue::from_str(&format!("Split failed: {}", e)))?;

    serde_json::to_string(&output)
        .map_err(|e| JsValue::from_str(&format!("Serialization failed: {}", e)))
}

/// Reconstruct a secret from shares
///
/// # Arguments
/// * `request` - JSON `{ shares: [{x, y}], k? }`, a split result, or an array of shares
/// * `prime` - Optional field modulus as a decimal string
///
/// # Returns
/// JSON string `{ secret }`, or an error message
///
/// # Example (JavaScript)
/// ```javascript
/// const split = wasm_split("42", 3, 2);
/// const { secret } = JSON.parse(wasm_reconstruct(split));
/// ```
#[wasm_bindgen]
pub fn wasm_reconstruct(request: &str, prime: Option<String>) -> Result<String, JsValue> {
    let service = service_for(prime)?;

    let request = codec::parse_reconstruct_input(request)
        .map_err(|e| JsValue::from_str(&format!("Invalid shares: {}", e)))?;

    let output = service
        .reconstruct(&request.shares, request.advertised_threshold())
        .map_err(|e| JsValue::from_str(&format!("Reconstruct failed: {}", e)))?;

    serde_json::to_string(&output)
        .map_err(|e| JsValue::from_str(&format!("Serialization failed: {}", e)))
}

/// Describe the scheme and its field modulus
///
/// # Returns
/// JSON string `{ algorithm, description, prime, primeBits }`, or an error message
#[wasm_bindgen]
pub fn wasm_info(prime: Option<String>) -> Result<String, JsValue> {
    let service = service_for(prime)?;

    serde_json::to_string(&service.info())
        .map_err(|e| JsValue::from_str(&format!("Serialization failed: {}", e)))
}
