//! Shared hex and byte helpers for sigil crates.

use thiserror::Error;

/// Errors that can occur when decoding a hexadecimal string.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("odd length: {0}")]
    OddLength(usize),
    #[error("invalid character at offset {0}")]
    InvalidCharacter(usize),
}

/// Converts bytes to a lowercase hexadecimal string.
pub fn hex(bytes: &[u8]) -> String {
    let mut hex = String::with_capacity(bytes.len() * 2);
    for byte in bytes.iter() {
        hex.push_str(&format!("{:02x}", byte));
    }
    hex
}

/// Converts a hexadecimal string to bytes.
///
/// Decoding is case-insensitive. Errors carry the byte offset of the first
/// character that is not in `[0-9a-fA-F]`.
pub fn from_hex(hex: &str) -> Result<Vec<u8>, DecodeError> {
    let hex = hex.as_bytes();
    if hex.len() % 2 != 0 {
        return Err(DecodeError::OddLength(hex.len()));
    }

    hex.chunks_exact(2)
        .enumerate()
        .map(|(index, pair)| {
            let high = nibble(pair[0]).ok_or(DecodeError::InvalidCharacter(index * 2))?;
            let low = nibble(pair[1]).ok_or(DecodeError::InvalidCharacter(index * 2 + 1))?;
            Ok((high << 4) | low)
        })
        .collect()
}

/// Converts a hexadecimal string to bytes, stripping whitespace and/or a `0x` prefix. Commonly used
/// in testing to encode external test vectors without modification.
pub fn from_hex_formatted(hex: &str) -> Result<Vec<u8>, DecodeError> {
    let hex = hex.replace(['\t', '\n', '\r', ' '], "");
    let res = hex.strip_prefix("0x").unwrap_or(&hex);
    from_hex(res)
}

fn nibble(char: u8) -> Option<u8> {
    match char {
        b'0'..=b'9' => Some(char - b'0'),
        b'a'..=b'f' => Some(char - b'a' + 10),
        b'A'..=b'F' => Some(char - b'A' + 10),
        _ => None,
    }
}
