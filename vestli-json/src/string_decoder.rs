// SPDX-License-Identifier: Apache-2.0

use log::debug;

use crate::cursor::Cursor;

/// Largest code point the legacy 6-byte encoding can carry.
pub const MAX_CODE_POINT: u32 = 0x7FFF_FFFF;

/// A string literal after escape processing.
#[derive(Debug, PartialEq)]
pub(crate) struct DecodedString {
    pub bytes: Vec<u8>,
    /// False when the input ended before the closing quote.
    pub terminated: bool,
}

/// Decodes the quoted string literal at the cursor.
///
/// The closing quote is located first, treating every `\` as escaping the byte
/// after it, so the output can be sized from the raw slice. Escapes are then
/// expanded into the output buffer, each one re-encoded with
/// [`encode_legacy_utf8`].
///
/// Returns `None` without moving the cursor if it is not on a `"`. An
/// unterminated literal is decoded up to the terminator, where the cursor is
/// left.
pub(crate) fn decode_string(cursor: &mut Cursor<'_>) -> Option<DecodedString> {
    if cursor.peek() != Some(b'"') {
        return None;
    }
    let start = cursor.pos();
    let raw = &cursor.remaining()[1..];

    let mut end = 0;
    while end < raw.len() && raw[end] != b'"' {
        if raw[end] == b'\\' && end + 1 < raw.len() {
            end += 2;
        } else {
            end += 1;
        }
    }
    let terminated = end < raw.len();
    let body = &raw[..end];

    let mut out = Vec::with_capacity(body.len() + 1);
    let mut i = 0;
    while i < body.len() {
        if body[i] != b'\\' {
            out.push(body[i]);
            i += 1;
            continue;
        }
        i += 1;
        // A backslash right before the terminator escapes nothing.
        let Some(&escape) = body.get(i) else {
            break;
        };
        i += 1;
        let code_point = match escape {
            b'0' => {
                let (value, used) = parse_digits(&body[i..], 8);
                i += used;
                value
            }
            b'u' => {
                let (value, used) = parse_digits(&body[i..], 16);
                i += used;
                value
            }
            b'"' => u32::from(b'"'),
            b'/' => u32::from(b'/'),
            b'\\' => u32::from(b'\\'),
            b'a' => 0x07,
            b'b' => 0x08,
            b't' => u32::from(b'\t'),
            b'n' => u32::from(b'\n'),
            b'v' => 0x0B,
            b'f' => 0x0C,
            b'r' => u32::from(b'\r'),
            _ => 0,
        };
        encode_legacy_utf8(code_point, &mut out);
    }

    if !terminated {
        debug!("unterminated string literal starting at offset {start}");
    }
    cursor.advance(1 + end + usize::from(terminated));

    Some(DecodedString {
        bytes: out,
        terminated,
    })
}

/// Parses as many `radix` digits as are present.
///
/// # Returns
/// The value, clamped to [`MAX_CODE_POINT`], and the number of digits consumed.
/// No digits yields `(0, 0)`.
pub(crate) fn parse_digits(bytes: &[u8], radix: u32) -> (u32, usize) {
    let mut value: u32 = 0;
    let mut used = 0;
    for &b in bytes {
        let Some(digit) = char::from(b).to_digit(radix) else {
            break;
        };
        value = value
            .saturating_mul(radix)
            .saturating_add(digit)
            .min(MAX_CODE_POINT);
        used += 1;
    }
    (value, used)
}

/// Appends `code_point` using the original (pre-RFC 3629) UTF-8 scheme, which
/// covers 31 bits with sequences of up to six bytes.
///
/// Surrogates and values above `U+10FFFF` are encoded like any other value, so
/// the output is not necessarily valid modern UTF-8.
pub fn encode_legacy_utf8(code_point: u32, out: &mut Vec<u8>) {
    let cp = code_point.min(MAX_CODE_POINT);
    let cont = |shift: u32| 0x80 | ((cp >> shift) & 0x3F) as u8;
    match cp {
        0..=0x7F => out.push(cp as u8),
        0x80..=0x7FF => out.extend_from_slice(&[0xC0 | (cp >> 6) as u8, cont(0)]),
        0x800..=0xFFFF => out.extend_from_slice(&[0xE0 | (cp >> 12) as u8, cont(6), cont(0)]),
        0x1_0000..=0x1F_FFFF => {
            out.extend_from_slice(&[0xF0 | (cp >> 18) as u8, cont(12), cont(6), cont(0)])
        }
        0x20_0000..=0x3FF_FFFF => out.extend_from_slice(&[
            0xF8 | (cp >> 24) as u8,
            cont(18),
            cont(12),
            cont(6),
            cont(0),
        ]),
        _ => out.extend_from_slice(&[
            0xFC | (cp >> 30) as u8,
            cont(24),
            cont(18),
            cont(12),
            cont(6),
            cont(0),
        ]),
    }
}
