//! HMAC-SHA256 signing for values that round-trip through the browser.
//!
//! Used for the flash message cookie: the server signs the payload when it
//! sets the cookie and only trusts it back if the signature verifies.
//! Token format is `hex(payload) "." hex(mac)`, which is cookie-safe.

use hmac::{Hmac, Mac};
use rand::Rng;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Length in bytes of secrets produced by [`generate_secret`].
pub const GENERATED_SECRET_BYTES: usize = 32;

/// Sign `payload` with `secret`, returning a self-contained token.
pub fn sign(secret: &str, payload: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(payload.as_bytes());
    let tag = mac.finalize().into_bytes();
    format!("{}.{}", hex::encode(payload.as_bytes()), hex::encode(tag))
}

/// Verify a token produced by [`sign`] and return its payload.
///
/// Returns `None` for malformed tokens and for tokens whose signature does
/// not match `secret`.
pub fn verify(secret: &str, token: &str) -> Option<String> {
    let (payload_hex, tag_hex) = token.split_once('.')?;
    let payload = hex::decode(payload_hex)?;
    let tag = hex::decode(tag_hex)?;

    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(&payload);
    mac.verify_slice(&tag).ok()?;

    String::from_utf8(payload).ok()
}

/// Generate a random hex secret for processes started without one.
pub fn generate_secret() -> String {
    let mut bytes = [0u8; GENERATED_SECRET_BYTES];
    rand::rng().fill(&mut bytes);
    hex::encode(bytes)
}

// ---------------------------------------------------------------------------
// hex encoding helper (no extra dep)
// ---------------------------------------------------------------------------

mod hex {
    /// Encode bytes as a lowercase hex string.
    pub fn encode(bytes: impl AsRef<[u8]>) -> String {
        bytes.as_ref().iter().map(|b| format!("{b:02x}")).collect()
    }

    /// Decode a hex string; `None` on odd length or non-hex characters.
    pub fn decode(s: &str) -> Option<Vec<u8>> {
        if s.len() % 2 != 0 {
            return None;
        }
        (0..s.len())
            .step_by(2)
            .map(|i| s.get(i..i + 2).and_then(|pair| u8::from_str_radix(pair, 16).ok()))
            .collect()
    }
}
