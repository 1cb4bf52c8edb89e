// SPDX-License-Identifier: Apache-2.0

//! A small, permissive JSON value library.
//!
//! [`decode`] turns a text buffer into an owned [`Value`] tree, [`print`]
//! writes a tree back out as compact JSON, and [`free`] tears a tree down.
//!
//! The decoder does not validate. Malformed containers are cut short and
//! returned as [`Decoded::Partial`] instead of failing, and escape handling
//! follows older conventions: octal `\0NNN` escapes, greedy `\u` digit runs,
//! and the original six-byte UTF-8 scheme for code points beyond `U+10FFFF`.
//! The printer escapes a fixed minimal set, so printing and decoding again
//! preserves the shape and values of a tree but not necessarily its exact bytes.
//!
//! ```
//! use vestli_json::{decode, Value};
//!
//! let decoded = decode(br#"{"a":1,"b":null}"#).unwrap();
//! assert!(!decoded.is_partial());
//! assert_eq!(decoded.value().get("a"), Some(&Value::Number(1.0)));
//! assert_eq!(decoded.value().to_string(), r#"{"a":1,"b":null}"#);
//! ```

mod cursor;

mod decoder;
pub use decoder::{Decoded, Decoder, DecoderConfig, DEFAULT_MAX_DEPTH};

mod number_parser;

mod parse_error;
pub use parse_error::DecodeError;

mod printer;
pub use printer::{format_number, print, print_string};

mod release;
pub use release::free;

mod string_decoder;
pub use string_decoder::{encode_legacy_utf8, MAX_CODE_POINT};

mod value;
pub use value::{Kind, Node, Value};

/// Decodes the first JSON value in `input` with the default configuration.
///
/// Input ends at the first NUL byte or the end of the slice. Anything after
/// the value is ignored.
///
/// # Errors
/// See [`Decoder::decode`].
pub fn decode(input: &[u8]) -> Result<Decoded, DecodeError> {
    Decoder::new(input).decode()
}

/// Like [`decode`], with explicit settings.
pub fn decode_with_config(input: &[u8], config: DecoderConfig) -> Result<Decoded, DecodeError> {
    Decoder::with_config(input, config).decode()
}
