use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Characters accepted between octets. `.` covers the Cisco `0011.2233.4455` form.
const SEPARATORS: [char; 3] = [ ':', '-', '.' ];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MacError {
    #[error("MAC address is empty")]
    EmptyInput,

    #[error("invalid MAC address length: '{normalized}' has {len} hex digits, expected 12")]
    InvalidLength { normalized: String, len: usize },

    #[error("invalid MAC address format: '{0}' contains non-hex characters")]
    InvalidFormat(String),
}

/// A 6-byte hardware address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MacAddress([u8; 6]);

impl MacAddress {
    pub const fn new(bytes: [u8; 6]) -> Self {
        Self(bytes)
    }

    pub fn octets(&self) -> [u8; 6] {
        self.0
    }

    pub fn as_bytes(&self) -> &[u8; 6] {
        &self.0
    }

    /// Parses `00:11:22:33:44:55`, `00-11-22-33-44-55`, `0011.2233.4455`,
    /// `001122334455` or any mix of those separators, case-insensitive.
    pub fn normalize(raw: &str) -> Result<Self, MacError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(MacError::EmptyInput);
        }

        let hex: String = trimmed
            .chars()
            .filter(|c| !SEPARATORS.contains(c))
            .map(|c| c.to_ascii_uppercase())
            .collect();

        let len = hex.chars().count();
        if len != 12 {
            return Err(MacError::InvalidLength { normalized: hex, len });
        }
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(MacError::InvalidFormat(hex));
        }

        // all ASCII from here on, so byte indexing is safe
        let digits = hex.as_bytes();
        let mut bytes = [0u8; 6];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = (hex_value(digits[2 * i]) << 4) | hex_value(digits[2 * i + 1]);
        }

        Ok(Self(bytes))
    }
}

fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'A'..=b'F' => digit - b'A' + 10,
        _ => unreachable!("caller checked for hex digits"),
    }
}

impl FromStr for MacAddress {
    type Err = MacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::normalize(s)
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X}", a, b, c, d, e, g)
    }
}
