// SPDX-License-Identifier: Apache-2.0

// Public entry points: decode, print, free.

use vestli_json::{decode, free, print, DecodeError, Decoded, Kind, Node, Value};

fn complete(input: &str) -> Value {
    match decode(input.as_bytes()) {
        Ok(Decoded::Complete(value)) => value,
        other => panic!("Expected complete decode of {input:?}, got: {other:?}"),
    }
}

#[test]
fn test_scalars() {
    assert_eq!(complete("42.5"), Value::Number(42.5));
    assert_eq!(complete("-257"), Value::Number(-257.0));
    assert_eq!(complete("true"), Value::Boolean(true));
    assert_eq!(complete("false"), Value::Boolean(false));
    assert_eq!(complete("null"), Value::Null);
}

#[test]
fn test_strings() {
    assert_eq!(complete(r#""hello""#).as_str(), Some("hello"));
    assert_eq!(
        complete(r#""\u00e9""#).as_bytes(),
        Some(&[0xC3, 0xA9][..])
    );
}

#[test]
fn test_arrays_keep_order() {
    let value = complete("[1,2,3]");
    let items: Vec<f64> = value
        .as_array()
        .unwrap()
        .iter()
        .filter_map(Value::as_f64)
        .collect();
    assert_eq!(items, [1.0, 2.0, 3.0]);

    assert_eq!(complete("[]"), Value::Array(vec![]));
}

#[test]
fn test_objects_keep_order() {
    let value = complete(r#"{"a":1,"b":null}"#);
    let nodes = value.as_object().unwrap();
    assert_eq!(nodes.len(), 2);
    assert_eq!(nodes[0].name_str(), Some("a"));
    assert_eq!(nodes[0].value, Value::Number(1.0));
    assert_eq!(nodes[1].name_str(), Some("b"));
    assert_eq!(nodes[1].value.kind(), Kind::Null);
}

#[test]
fn test_truncated_array_is_partial_not_failure() {
    match decode(b"[1,2,") {
        Ok(Decoded::Partial(value)) => {
            assert_eq!(
                value,
                Value::Array(vec![Value::Number(1.0), Value::Number(2.0)])
            );
            assert_eq!(free(Some(value)), 3);
        }
        other => panic!("Expected partial array, got: {other:?}"),
    }
}

#[test]
fn test_unrecognized_token_is_total_failure() {
    assert_eq!(
        decode(b"xyz"),
        Err(DecodeError::UnexpectedByte {
            byte: b'x',
            offset: 0
        })
    );
    assert_eq!(free(decode(b"xyz").ok().map(Decoded::into_value)), 0);
}

#[test]
fn test_nul_byte_ends_input() {
    assert_eq!(
        decode(b"[1,2]\0garbage"),
        Ok(Decoded::Complete(Value::Array(vec![
            Value::Number(1.0),
            Value::Number(2.0)
        ])))
    );
    assert_eq!(
        decode(b"[1,\0 2]"),
        Ok(Decoded::Partial(Value::Array(vec![Value::Number(1.0)])))
    );
}

#[test]
fn test_transit_response_shape() {
    let body = br#"[
        {"LineRef":"5","DestinationName":"Vestli","DirectionRef":"1",
         "ExpectedArrivalTime":"/Date(1318001280000+0200)/"},
        {"LineRef":"4","DestinationName":"Bergkrystallen","DirectionRef":"2",
         "ExpectedArrivalTime":"/Date(1318001400000+0200)/"}
    ]"#;
    let value = complete(std::str::from_utf8(body).unwrap());
    let departures = value.as_array().unwrap();
    assert_eq!(departures.len(), 2);
    assert_eq!(
        departures[1].get("DestinationName").and_then(Value::as_str),
        Some("Bergkrystallen")
    );
}

#[test]
fn test_print_to_sink() {
    let error = Value::Object(vec![
        Node::new("code", Value::Number(-257.0)),
        Node::new("result", Value::Null),
        Node::new("message", Value::from("Hash is too large\n")),
    ]);
    let value = Value::Object(vec![
        Node::new("error", error),
        Node::new("id", Value::Number(1.0)),
    ]);
    let mut out = Vec::new();
    print(&value, &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        r#"{"error":{"code":-257,"result":null,"message":"Hash is too large\n"},"id":1}"#
    );
}
