// SPDX-License-Identifier: Apache-2.0

/// Reasons a decode produced no value at all.
///
/// Malformed containers are not errors: they come back as
/// [`Decoded::Partial`](crate::Decoded::Partial).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// Only whitespace was found before the end of the input.
    EndOfInput,
    /// The value starts with a byte that begins no JSON value.
    UnexpectedByte {
        /// The offending byte.
        byte: u8,
        /// Its offset in the input.
        offset: usize,
    },
    /// Containers were nested deeper than the configured limit.
    DepthLimitExceeded {
        /// The configured maximum depth.
        limit: usize,
    },
}

impl core::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DecodeError::EndOfInput => write!(f, "no JSON value before end of input"),
            DecodeError::UnexpectedByte { byte, offset } => {
                if byte.is_ascii_graphic() {
                    write!(f, "unexpected '{}' at offset {offset}", *byte as char)
                } else {
                    write!(f, "unexpected byte 0x{byte:02x} at offset {offset}")
                }
            }
            DecodeError::DepthLimitExceeded { limit } => {
                write!(f, "nesting deeper than {limit} levels")
            }
        }
    }
}

impl std::error::Error for DecodeError {}
