//! Name hashing.
//!
//! Colors are picked from the SHA-1 digest of the name's UTF-8 bytes. The
//! hash only needs to be stable and well spread; the exact algorithm matters
//! because other tools derive the same colors from the same bytes.

use sha1::{Digest, Sha1};

/// Length of a [`NameDigest`] in bytes.
pub const DIGEST_LEN: usize = 20;

/// The SHA-1 digest of a display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NameDigest([u8; DIGEST_LEN]);

impl NameDigest {
    /// Hashes the UTF-8 encoding of `name`.
    pub fn of(name: &str) -> Self {
        let mut bytes = [0u8; DIGEST_LEN];
        bytes.copy_from_slice(&Sha1::digest(name.as_bytes()));
        Self(bytes)
    }

    /// The first two bytes, combined big-endian (`d[0] << 8 | d[1]`).
    pub fn leading_word(&self) -> u16 {
        u16::from_be_bytes([self.0[0], self.0[1]])
    }

    /// The last two bytes, last byte high (`d[19] << 8 | d[18]`).
    ///
    /// This is deliberately the reverse of [`leading_word`](Self::leading_word).
    pub fn trailing_word(&self) -> u16 {
        u16::from_be_bytes([self.0[DIGEST_LEN - 1], self.0[DIGEST_LEN - 2]])
    }

    /// Lower-case hex rendering of the digest.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{:02x}", b)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_digest() {
        let digest = NameDigest::of("A");
        assert_eq!(digest.to_hex(), "6dcd4ce23d88e2ee9568ba546c007c63d9131c1b");
    }

    #[test]
    fn word_byte_order() {
        let digest = NameDigest::of("A");
        assert_eq!(digest.leading_word(), 0x6dcd);
        // Last bytes are ..., 0x1c, 0x1b so the trailing word is 0x1b1c.
        assert_eq!(digest.trailing_word(), 0x1b1c);
    }

    #[test]
    fn hashes_utf8_bytes() {
        let digest = NameDigest::of("Émile");
        assert_eq!(digest.to_hex(), "e2ac637eac74a7955ecbabca1ed8517928fa37f6");
        assert_ne!(NameDigest::of("alice"), NameDigest::of("Alice"));
    }
}
