// SPDX-License-Identifier: Apache-2.0

use log::{debug, trace};

use crate::cursor::Cursor;
use crate::number_parser::parse_number;
use crate::parse_error::DecodeError;
use crate::string_decoder::decode_string;
use crate::value::{Node, Value};

/// Default bound on container nesting.
pub const DEFAULT_MAX_DEPTH: usize = 1024;

/// Decoder settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Deepest container nesting accepted. A top-level array is depth 1.
    pub max_depth: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl DecoderConfig {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// A successfully decoded tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    /// Every container was closed by its delimiter and every string by its quote.
    Complete(Value),
    /// A best-effort tree: some container or string was cut short, and only
    /// what parsed before that point is present.
    Partial(Value),
}

impl Decoded {
    pub fn value(&self) -> &Value {
        match self {
            Decoded::Complete(v) | Decoded::Partial(v) => v,
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            Decoded::Complete(v) | Decoded::Partial(v) => v,
        }
    }

    pub fn is_partial(&self) -> bool {
        matches!(self, Decoded::Partial(_))
    }
}

/// Recursive-descent decoder over one input buffer.
///
/// The decoder is permissive: a container that is malformed part way through
/// (missing comma, missing colon, an element that is not a value, missing
/// closing delimiter) keeps whatever it parsed so far and ends there. Only a
/// value whose first token is unrecognized fails, and inside a container that
/// failure just ends the container. Exceeding the depth limit is the one
/// failure that always reaches the caller.
///
/// Bytes after the top-level value are not examined; see [`Decoder::position`].
///
/// # Example
/// ```
/// use vestli_json::{Decoded, Decoder, Value};
///
/// let mut decoder = Decoder::new(b"[1, 2] trailing");
/// let decoded = decoder.decode().unwrap();
/// assert!(matches!(decoded, Decoded::Complete(Value::Array(_))));
/// assert_eq!(decoder.position(), 6);
/// ```
pub struct Decoder<'a> {
    cursor: Cursor<'a>,
    config: DecoderConfig,
    depth: usize,
    truncated: bool,
}

impl<'a> Decoder<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self::with_config(input, DecoderConfig::default())
    }

    pub fn with_config(input: &'a [u8], config: DecoderConfig) -> Self {
        Self {
            cursor: Cursor::new(input),
            config,
            depth: 0,
            truncated: false,
        }
    }

    /// Offset of the first byte not consumed so far.
    pub fn position(&self) -> usize {
        self.cursor.pos()
    }

    /// Decodes one value starting at the current position.
    ///
    /// # Errors
    /// [`DecodeError::EndOfInput`] or [`DecodeError::UnexpectedByte`] if no
    /// value starts here, [`DecodeError::DepthLimitExceeded`] if containers
    /// nest deeper than the configured limit.
    pub fn decode(&mut self) -> Result<Decoded, DecodeError> {
        self.depth = 0;
        self.truncated = false;
        let value = self.decode_value()?;
        if self.truncated {
            Ok(Decoded::Partial(value))
        } else {
            Ok(Decoded::Complete(value))
        }
    }

    fn decode_value(&mut self) -> Result<Value, DecodeError> {
        self.cursor.skip_whitespace();
        let Some(byte) = self.cursor.peek() else {
            return Err(DecodeError::EndOfInput);
        };

        match byte {
            b'0'..=b'9' | b'-' => Ok(Value::Number(parse_number(&mut self.cursor))),
            b'"' => self.decode_string_value().map(Value::String),
            b'[' => self.enter(Self::decode_array_body),
            b'{' => self.enter(Self::decode_object_body),
            _ if self.cursor.eat_literal(b"true") => Ok(Value::Boolean(true)),
            _ if self.cursor.eat_literal(b"false") => Ok(Value::Boolean(false)),
            _ if self.cursor.eat_literal(b"null") => Ok(Value::Null),
            _ => Err(DecodeError::UnexpectedByte {
                byte,
                offset: self.cursor.pos(),
            }),
        }
    }

    fn decode_string_value(&mut self) -> Result<Vec<u8>, DecodeError> {
        let offset = self.cursor.pos();
        let decoded = decode_string(&mut self.cursor).ok_or(DecodeError::UnexpectedByte {
            byte: self.cursor.peek().unwrap_or(0),
            offset,
        })?;
        if !decoded.terminated {
            self.truncated = true;
        }
        Ok(decoded.bytes)
    }

    /// Runs a container body one level deeper, enforcing the depth limit.
    fn enter(
        &mut self,
        body: fn(&mut Self) -> Result<Value, DecodeError>,
    ) -> Result<Value, DecodeError> {
        if self.depth >= self.config.max_depth {
            debug!(
                "nesting limit {} reached at offset {}",
                self.config.max_depth,
                self.cursor.pos()
            );
            return Err(DecodeError::DepthLimitExceeded {
                limit: self.config.max_depth,
            });
        }
        self.depth += 1;
        trace!("container at offset {}, depth {}", self.cursor.pos(), self.depth);
        let result = body(self);
        self.depth -= 1;
        result
    }

    /// Parses one element of a container; `Ok(None)` ends the container.
    fn element(&mut self) -> Result<Option<Value>, DecodeError> {
        match self.decode_value() {
            Ok(value) => Ok(Some(value)),
            Err(err @ DecodeError::DepthLimitExceeded { .. }) => Err(err),
            Err(err) => {
                debug!("container element rejected: {err}");
                Ok(None)
            }
        }
    }

    fn decode_array_body(&mut self) -> Result<Value, DecodeError> {
        let start = self.cursor.pos();
        self.cursor.bump();
        let mut items = Vec::new();

        loop {
            self.cursor.skip_whitespace();
            if !items.is_empty() && !self.cursor.eat(b',') {
                break;
            }
            // Skipped again here so whitespace after a comma is allowed before `]`.
            self.cursor.skip_whitespace();
            if matches!(self.cursor.peek(), None | Some(b']')) {
                break;
            }
            match self.element()? {
                Some(value) => items.push(value),
                None => break,
            }
        }

        self.close(b']', start);
        Ok(Value::Array(items))
    }

    fn decode_object_body(&mut self) -> Result<Value, DecodeError> {
        let start = self.cursor.pos();
        self.cursor.bump();
        let mut nodes = Vec::new();

        loop {
            self.cursor.skip_whitespace();
            if !nodes.is_empty() && !self.cursor.eat(b',') {
                break;
            }
            self.cursor.skip_whitespace();
            if self.cursor.peek() != Some(b'"') {
                break;
            }
            let Ok(name) = self.decode_string_value() else {
                break;
            };
            self.cursor.skip_whitespace();
            if !self.cursor.eat(b':') {
                break;
            }
            match self.element()? {
                Some(value) => nodes.push(Node { name, value }),
                None => break,
            }
        }

        self.close(b'}', start);
        Ok(Value::Object(nodes))
    }

    /// Consumes the closing delimiter, or records that the container was cut short.
    fn close(&mut self, delimiter: u8, start: usize) {
        if !self.cursor.eat(delimiter) {
            debug!(
                "container opened at offset {start} ended at offset {} without '{}'",
                self.cursor.pos(),
                delimiter as char
            );
            self.truncated = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn decode(input: &str) -> Result<Decoded, DecodeError> {
        Decoder::new(input.as_bytes()).decode()
    }

    fn numbers(values: &[f64]) -> Value {
        Value::Array(values.iter().copied().map(Value::Number).collect())
    }

    #[test]
    fn test_scalars() {
        assert_eq!(decode("42.5"), Ok(Decoded::Complete(Value::Number(42.5))));
        assert_eq!(decode(" true"), Ok(Decoded::Complete(Value::Boolean(true))));
        assert_eq!(decode("false"), Ok(Decoded::Complete(Value::Boolean(false))));
        assert_eq!(decode("\nnull\n"), Ok(Decoded::Complete(Value::Null)));
        assert_eq!(
            decode(r#""hello""#),
            Ok(Decoded::Complete(Value::from("hello")))
        );
    }

    #[test]
    fn test_literal_prefix_is_enough() {
        let mut decoder = Decoder::new(b"nullable");
        assert_eq!(decoder.decode(), Ok(Decoded::Complete(Value::Null)));
        assert_eq!(decoder.position(), 4);
    }

    #[test]
    fn test_unrecognized_first_token() {
        assert_eq!(
            decode("xyz"),
            Err(DecodeError::UnexpectedByte {
                byte: b'x',
                offset: 0
            })
        );
        assert_eq!(
            decode("  tru"),
            Err(DecodeError::UnexpectedByte {
                byte: b't',
                offset: 2
            })
        );
        assert_eq!(decode(""), Err(DecodeError::EndOfInput));
        assert_eq!(decode(" \t\r\n"), Err(DecodeError::EndOfInput));
    }

    #[test]
    fn test_arrays() {
        assert_eq!(
            decode("[1,2,3]"),
            Ok(Decoded::Complete(numbers(&[1.0, 2.0, 3.0])))
        );
        assert_eq!(decode("[]"), Ok(Decoded::Complete(numbers(&[]))));
        assert_eq!(
            decode("[ 1 , 2 ]"),
            Ok(Decoded::Complete(numbers(&[1.0, 2.0])))
        );
    }

    #[test]
    fn test_objects() {
        assert_eq!(
            decode(r#"{"a":1,"b":null}"#),
            Ok(Decoded::Complete(Value::Object(vec![
                Node::new("a", Value::Number(1.0)),
                Node::new("b", Value::Null),
            ])))
        );
        assert_eq!(
            decode(r#"{ "a" : [ ] , "a" : { } }"#),
            Ok(Decoded::Complete(Value::Object(vec![
                Node::new("a", Value::Array(vec![])),
                Node::new("a", Value::Object(vec![])),
            ])))
        );
    }

    #[test]
    fn test_trailing_comma_before_close_is_tolerated() {
        assert_eq!(
            decode("[1,2,]"),
            Ok(Decoded::Complete(numbers(&[1.0, 2.0])))
        );
        assert_eq!(
            decode(r#"{"a":1,}"#),
            Ok(Decoded::Complete(Value::Object(vec![Node::new(
                "a",
                Value::Number(1.0)
            )])))
        );
    }

    #[test]
    fn test_truncated_array() {
        assert_eq!(decode("[1,2,"), Ok(Decoded::Partial(numbers(&[1.0, 2.0]))));
        assert_eq!(decode("[1,2"), Ok(Decoded::Partial(numbers(&[1.0, 2.0]))));
        assert_eq!(decode("["), Ok(Decoded::Partial(numbers(&[]))));
    }

    #[test]
    fn test_missing_comma_stops_without_consuming() {
        let mut decoder = Decoder::new(b"[1 2]");
        assert_eq!(decoder.decode(), Ok(Decoded::Partial(numbers(&[1.0]))));
        assert_eq!(decoder.position(), 3);
    }

    #[test]
    fn test_bad_element_stops_array() {
        let mut decoder = Decoder::new(b"[1,x,3]");
        assert_eq!(decoder.decode(), Ok(Decoded::Partial(numbers(&[1.0]))));
        assert_eq!(decoder.position(), 3);
    }

    #[test]
    fn test_truncated_objects() {
        let one = || vec![Node::new("a", Value::Number(1.0))];
        assert_eq!(decode(r#"{"a":1"#), Ok(Decoded::Partial(Value::Object(one()))));
        assert_eq!(
            decode(r#"{"a":1,"b" 2}"#),
            Ok(Decoded::Partial(Value::Object(one())))
        );
        assert_eq!(
            decode(r#"{"a":1,b:2}"#),
            Ok(Decoded::Partial(Value::Object(one())))
        );
        assert_eq!(
            decode(r#"{"a":1,"b":?}"#),
            Ok(Decoded::Partial(Value::Object(one())))
        );
    }

    #[test]
    fn test_nested_truncation_marks_whole_tree() {
        let decoded = decode(r#"{"list":[1,2}"#).unwrap();
        assert!(decoded.is_partial());
        // The inner array stops at `}`, which then closes the object.
        assert_eq!(
            decoded.into_value(),
            Value::Object(vec![Node::new("list", numbers(&[1.0, 2.0]))])
        );
    }

    #[test]
    fn test_unterminated_string_is_partial() {
        assert_eq!(
            decode(r#"["abc"#),
            Ok(Decoded::Partial(Value::Array(vec![Value::from("abc")])))
        );
    }

    #[test]
    fn test_lone_minus_is_zero() {
        let mut decoder = Decoder::new(b"-");
        assert_eq!(decoder.decode(), Ok(Decoded::Complete(Value::Number(0.0))));
        assert_eq!(decoder.position(), 0);
    }

    #[test]
    fn test_depth_limit() {
        let config = DecoderConfig::default().with_max_depth(2);
        assert!(Decoder::with_config(b"[[1]]", config).decode().is_ok());
        assert_eq!(
            Decoder::with_config(b"[[[1]]]", config).decode(),
            Err(DecodeError::DepthLimitExceeded { limit: 2 })
        );
        assert_eq!(
            Decoder::with_config(br#"{"a":{"b":{}}}"#, config).decode(),
            Err(DecodeError::DepthLimitExceeded { limit: 2 })
        );
    }

    #[test]
    fn test_decoder_can_continue_after_value() {
        let mut decoder = Decoder::new(b"1 [2");
        assert_eq!(decoder.decode(), Ok(Decoded::Complete(Value::Number(1.0))));
        assert_eq!(decoder.decode(), Ok(Decoded::Partial(numbers(&[2.0]))));
        assert_eq!(decoder.decode(), Err(DecodeError::EndOfInput));
    }
}
