// SPDX-License-Identifier: Apache-2.0

/// One node of a decoded JSON tree.
///
/// Every container owns its children outright, so a tree has no sharing and no
/// cycles. Array elements and object entries keep their source order; object
/// keys are neither sorted nor deduplicated.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A number, always held as a double.
    Number(f64),
    /// String contents after escape processing.
    ///
    /// Usually UTF-8, but legacy escapes (octal, large `\u` values) can produce
    /// bytes that are not, so the raw bytes are kept.
    String(Vec<u8>),
    /// `true` or `false`.
    Boolean(bool),
    /// `null`.
    Null,
    /// Elements in source order.
    Array(Vec<Value>),
    /// Entries in source order.
    Object(Vec<Node>),
}

/// A named entry of an object.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// The key, escape-processed like any string value.
    pub name: Vec<u8>,
    pub value: Value,
}

/// The variant of a [`Value`] without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Number,
    String,
    Boolean,
    Null,
    Array,
    Object,
}

impl Node {
    pub fn new(name: impl Into<Vec<u8>>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// The key as text, if it is valid UTF-8.
    pub fn name_str(&self) -> Option<&str> {
        core::str::from_utf8(&self.name).ok()
    }
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Number(_) => Kind::Number,
            Value::String(_) => Kind::String,
            Value::Boolean(_) => Kind::Boolean,
            Value::Null => Kind::Null,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Raw bytes of a string value.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// A string value as text. `None` for other kinds and for strings that are
    /// not valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        self.as_bytes().and_then(|s| core::str::from_utf8(s).ok())
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&[Node]> {
        match self {
            Value::Object(nodes) => Some(nodes),
            _ => None,
        }
    }

    /// Looks up an object entry by key.
    ///
    /// Keys may repeat; the first match in source order wins. Returns `None`
    /// for non-objects.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.as_object()?
            .iter()
            .find(|node| node.name == name.as_bytes())
            .map(|node| &node.value)
    }

    /// Compact JSON encoding of this value.
    pub fn to_json_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = crate::printer::print(self, &mut out);
        out
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.as_bytes().to_vec())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Vec<Node>> for Value {
    fn from(nodes: Vec<Node>) -> Self {
        Value::Object(nodes)
    }
}

/// Compact encoding; invalid UTF-8 in strings is shown lossily.
impl core::fmt::Display for Value {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.to_json_bytes()))
    }
}
