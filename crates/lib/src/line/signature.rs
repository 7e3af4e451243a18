//! Webhook signature handling (x-line-signature).
//!
//! LINE signs each webhook body with HMAC-SHA256 over the raw bytes,
//! keyed by the channel secret, and sends the base64 digest in the
//! x-line-signature header. No event is parsed from an unverified body.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Compute the base64-encoded HMAC-SHA256 signature for a body.
pub fn sign(body: &[u8], secret: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).expect("hmac accepts any key length");
    mac.update(body);
    BASE64.encode(mac.finalize().into_bytes())
}

/// Verify a webhook body against the signature header value.
///
/// Returns false on an empty or undecodable signature or a MAC mismatch;
/// the comparison itself is constant-time.
pub fn verify(body: &[u8], signature: &str, secret: &str) -> bool {
    if signature.is_empty() {
        return false;
    }
    let Ok(provided) = BASE64.decode(signature.as_bytes()) else {
        return false;
    };
    let Ok(mut mac) = HmacSha256::new_from_slice(secret.as_bytes()) else {
        return false;
    };
    mac.update(body);
    mac.verify_slice(&provided).is_ok()
}
