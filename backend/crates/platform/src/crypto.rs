//! Secret comparison

use sha2::{Digest, Sha256};

fn digest(secret: &str) -> [u8; 32] {
    Sha256::digest(secret.as_bytes()).into()
}

/// Compare two secrets without leaking their length or common prefix.
///
/// Both sides are hashed first so the XOR fold always runs over 32 bytes.
pub fn secrets_match(presented: &str, expected: &str) -> bool {
    digest(presented)
        .iter()
        .zip(digest(expected).iter())
        .fold(0u8, |acc, (x, y)| acc | (x ^ y))
        == 0
}
