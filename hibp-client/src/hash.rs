//! SHA-1 helpers for the Pwned Passwords range API.
//!
//! The range API is queried with the first [`PREFIX_LEN`] uppercase hex
//! characters of the password's SHA-1 digest and answers with the remaining
//! 35-character suffixes of every known hash sharing that prefix. Nothing in
//! this module logs or stores its input.

use sha1::{Digest, Sha1};

/// The length of a SHA-1 hash prefix sent to the range API (5 hex characters).
pub const PREFIX_LEN: usize = 5;

/// The length of a SHA-1 digest rendered as hex.
pub const HEX_DIGEST_LEN: usize = 40;

/// Hex lookup table for digest conversion.
pub const HEX_CHARS: &[u8; 16] = b"0123456789ABCDEF";

/// Returns the uppercase hex SHA-1 digest of `password` (stack allocated).
#[inline]
pub fn sha1_hex(password: &str) -> [u8; HEX_DIGEST_LEN] {
    let mut hasher = Sha1::new();
    hasher.update(password.as_bytes());
    let hash: [u8; 20] = hasher.finalize().into();

    let mut hex = [0u8; HEX_DIGEST_LEN];
    for (i, byte) in hash.iter().enumerate() {
        hex[i * 2] = HEX_CHARS[(byte >> 4) as usize];
        hex[i * 2 + 1] = HEX_CHARS[(byte & 0x0f) as usize];
    }
    hex
}

/// The first 5 hex characters of the digest. This is the only part of the
/// password hash that is ever sent over the wire.
pub fn hash_prefix(password: &str) -> String {
    let hex = sha1_hex(password);
    hex_str(&hex[..PREFIX_LEN])
}

/// The 35 hex characters following the prefix, matched locally against the
/// range response.
pub fn hash_suffix(password: &str) -> String {
    let hex = sha1_hex(password);
    hex_str(&hex[PREFIX_LEN..])
}

#[inline]
fn hex_str(bytes: &[u8]) -> String {
    // HEX_CHARS is pure ASCII
    bytes.iter().map(|&b| b as char).collect()
}
