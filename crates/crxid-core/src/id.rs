//! The 32-character extension identifier over the `a`–`p` alphabet.

use std::fmt;
use std::str::FromStr;

use crate::error::{CrxidResult, DeriveError};
use crate::{DIGEST_PREFIX_LEN, ID_LEN};

/// Map one lowercase hex digit to its id letter: `0`–`9` → `a`–`j`,
/// `a`–`f` → `k`–`p`. Returns `None` for anything else (uppercase
/// included; digests are rendered lowercase).
pub fn map_hex_digit(digit: char) -> Option<char> {
    match digit {
        '0'..='9' | 'a'..='f' => {
            let value = digit.to_digit(16)? as u8;
            Some((b'a' + value) as char)
        }
        _ => None,
    }
}

/// A derived extension id: exactly 32 ASCII letters in `a`–`p`.
///
/// Stored as fixed bytes so the alphabet invariant is carried by
/// construction, not re-checked on every use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExtensionId([u8; ID_LEN]);

impl ExtensionId {
    /// Build an id from the first 16 bytes of a digest, two letters per
    /// byte (high nibble first), matching the hex-digit mapping.
    pub(crate) fn from_digest_prefix(prefix: &[u8; DIGEST_PREFIX_LEN]) -> Self {
        let mut letters = [0u8; ID_LEN];
        for (i, byte) in prefix.iter().enumerate() {
            letters[2 * i] = b'a' + (byte >> 4);
            letters[2 * i + 1] = b'a' + (byte & 0x0f);
        }
        Self(letters)
    }

    /// Build an id from a 32-character lowercase hex digest prefix.
    pub fn from_hex_prefix(hex: &str) -> CrxidResult<Self> {
        if hex.len() != ID_LEN {
            return Err(DeriveError::InvalidId {
                value: hex.to_string(),
                reason: "hex prefix must be exactly 32 digits",
            });
        }
        let mut letters = [0u8; ID_LEN];
        for (i, digit) in hex.chars().enumerate() {
            let mapped = map_hex_digit(digit).ok_or_else(|| DeriveError::InvalidId {
                value: hex.to_string(),
                reason: "hex prefix must be lowercase 0-9a-f",
            })?;
            letters[i] = mapped as u8;
        }
        Ok(Self(letters))
    }

    pub fn as_str(&self) -> &str {
        // letters are always ASCII a-p by construction
        std::str::from_utf8(&self.0).expect("id bytes are ASCII")
    }
}

impl fmt::Display for ExtensionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExtensionId {
    type Err = DeriveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != ID_LEN {
            return Err(DeriveError::InvalidId {
                value: s.to_string(),
                reason: "must be exactly 32 characters",
            });
        }
        let mut letters = [0u8; ID_LEN];
        for (i, c) in s.bytes().enumerate() {
            if !(b'a'..=b'p').contains(&c) {
                return Err(DeriveError::InvalidId {
                    value: s.to_string(),
                    reason: "characters must be lowercase a-p",
                });
            }
            letters[i] = c;
        }
        Ok(Self(letters))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapping_table_all_sixteen_digits() {
        let expected = [
            ('0', 'a'),
            ('1', 'b'),
            ('2', 'c'),
            ('3', 'd'),
            ('4', 'e'),
            ('5', 'f'),
            ('6', 'g'),
            ('7', 'h'),
            ('8', 'i'),
            ('9', 'j'),
            ('a', 'k'),
            ('b', 'l'),
            ('c', 'm'),
            ('d', 'n'),
            ('e', 'o'),
            ('f', 'p'),
        ];
        for (digit, letter) in expected {
            assert_eq!(map_hex_digit(digit), Some(letter), "digit {digit:?}");
        }
    }

    #[test]
    fn mapping_rejects_non_hex() {
        assert_eq!(map_hex_digit('g'), None);
        assert_eq!(map_hex_digit('A'), None);
        assert_eq!(map_hex_digit('!'), None);
    }

    #[test]
    fn hex_prefix_matches_nibble_path() {
        let prefix = [0xe3u8, 0xb0, 0xc4, 0x42, 0x98, 0xfc, 0x1c, 0x14, 0x9a, 0xfb, 0xf4, 0xc8,
            0x99, 0x6f, 0xb9, 0x24];
        let from_bytes = ExtensionId::from_digest_prefix(&prefix);
        let from_hex = ExtensionId::from_hex_prefix("e3b0c44298fc1c149afbf4c8996fb924").unwrap();
        assert_eq!(from_bytes, from_hex);
        assert_eq!(from_bytes.as_str(), "odlameecjipmbmbejkplpemijjgpljce");
    }

    #[test]
    fn from_str_accepts_valid_id() {
        let id: ExtensionId = "donmkahapkohncialmknoofangooemjb".parse().unwrap();
        assert_eq!(id.to_string(), "donmkahapkohncialmknoofangooemjb");
    }

    #[test]
    fn from_str_rejects_wrong_length() {
        let err = "abc".parse::<ExtensionId>().unwrap_err();
        assert!(matches!(err, DeriveError::InvalidId { .. }));
    }

    #[test]
    fn from_str_rejects_out_of_alphabet() {
        // 'q' is one past the alphabet, 'Z' and '3' are far outside it
        for bad in ["qaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
                    "Zaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
                    "3aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"] {
            assert!(bad.parse::<ExtensionId>().is_err(), "{bad:?}");
        }
    }
}
