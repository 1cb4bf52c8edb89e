// SPDX-License-Identifier: Apache-2.0

use crate::cursor::Cursor;

/// Lexes a number at the cursor and returns its value.
///
/// Grammar: optional `-`, integer digits, optional `.` with fraction digits,
/// optional exponent. The exponent is only consumed when at least one digit
/// follows `e`/`E` and its optional sign. Lexing stops at the first byte that
/// does not fit, with no check of what comes after.
///
/// When no digit is found at all (a lone `-`, or `-.`), the result is `0.0`
/// and the cursor stays where it was.
pub(crate) fn parse_number(cursor: &mut Cursor<'_>) -> f64 {
    let start = cursor.pos();
    let text = cursor.remaining();
    let mut len = 0;

    if text.first() == Some(&b'-') {
        len += 1;
    }
    let int_digits = count_digits(&text[len..]);
    len += int_digits;

    let mut frac_digits = 0;
    if text.get(len) == Some(&b'.') {
        frac_digits = count_digits(&text[len + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            len += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return 0.0;
    }

    if matches!(text.get(len), Some(b'e' | b'E')) {
        let mut exp_len = 1;
        if matches!(text.get(len + exp_len), Some(b'+' | b'-')) {
            exp_len += 1;
        }
        let exp_digits = count_digits(&text[(len + exp_len).min(text.len())..]);
        if exp_digits > 0 {
            len += exp_len + exp_digits;
        }
    }

    let lexeme = cursor.slice(start, start + len);
    cursor.advance(len);

    // The lexeme is ASCII and matches the float grammar, so parsing only fails
    // on inputs this function cannot produce.
    core::str::from_utf8(lexeme)
        .ok()
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(0.0)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
