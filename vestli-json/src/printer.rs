// SPDX-License-Identifier: Apache-2.0

use std::io::{self, Write};

use crate::value::Value;

/// Writes `value` to `sink` as compact JSON, with no whitespace between tokens.
///
/// Strings and keys go through [`print_string`]; numbers through
/// [`format_number`]. Recursion follows the depth of the tree.
///
/// # Errors
/// Returns the first error reported by `sink`.
pub fn print<W: Write + ?Sized>(value: &Value, sink: &mut W) -> io::Result<()> {
    match value {
        Value::Number(n) => sink.write_all(format_number(*n).as_bytes()),
        Value::String(s) => print_string(s, sink),
        Value::Boolean(true) => sink.write_all(b"true"),
        Value::Boolean(false) => sink.write_all(b"false"),
        Value::Null => sink.write_all(b"null"),
        Value::Array(items) => {
            sink.write_all(b"[")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    sink.write_all(b",")?;
                }
                print(item, sink)?;
            }
            sink.write_all(b"]")
        }
        Value::Object(nodes) => {
            sink.write_all(b"{")?;
            for (i, node) in nodes.iter().enumerate() {
                if i > 0 {
                    sink.write_all(b",")?;
                }
                print_string(&node.name, sink)?;
                sink.write_all(b":")?;
                print(&node.value, sink)?;
            }
            sink.write_all(b"}")
        }
    }
}

/// Writes `bytes` as a quoted string.
///
/// Only `\b \f \n \r \t \" \\` are escaped by name. Remaining control bytes
/// become `\x` followed by unpadded lowercase hex, which the decoder does not
/// read back. All other bytes, non-ASCII included, are copied through.
pub fn print_string<W: Write + ?Sized>(bytes: &[u8], sink: &mut W) -> io::Result<()> {
    sink.write_all(b"\"")?;
    let mut run_start = 0;
    for (i, &b) in bytes.iter().enumerate() {
        let named: &[u8] = match b {
            0x08 => b"\\b",
            0x0C => b"\\f",
            b'\n' => b"\\n",
            b'\r' => b"\\r",
            b'\t' => b"\\t",
            b'"' => b"\\\"",
            b'\\' => b"\\\\",
            0x00..=0x1F | 0x7F => b"",
            _ => continue,
        };
        sink.write_all(&bytes[run_start..i])?;
        if named.is_empty() {
            write!(sink, "\\x{b:x}")?;
        } else {
            sink.write_all(named)?;
        }
        run_start = i + 1;
    }
    sink.write_all(&bytes[run_start..])?;
    sink.write_all(b"\"")
}

/// Formats a number in the style of C's `%g`, using the shortest digits that
/// read back to the same double.
///
/// Decimal exponents from -4 up to 16 print in fixed notation (`0.0001`,
/// `1234567`, `42.5`); anything else prints as `d.ddde±XX` (`1e+17`,
/// `1.5e-07`). Infinities print as `1e+999` and `-1e+999`, which overflow
/// back to the same infinity when decoded. NaN prints as `null`.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "null".to_string();
    }
    if n.is_infinite() {
        let sign = if n < 0.0 { "-" } else { "" };
        return format!("{sign}1e+999");
    }
    let scientific = format!("{n:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return n.to_string();
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    if (-4..17).contains(&exponent) {
        n.to_string()
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
    }
}
