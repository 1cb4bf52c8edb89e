// Example walking a decoded tree and printing it back out

use vestli_json::{decode, print, Decoded, DecodeError, Value};

fn walk(value: &Value, indent: usize) {
    let pad = "  ".repeat(indent);
    match value {
        Value::Array(items) => {
            println!("{pad}Array ({} items)", items.len());
            for item in items {
                walk(item, indent + 1);
            }
        }
        Value::Object(nodes) => {
            println!("{pad}Object ({} entries)", nodes.len());
            for node in nodes {
                println!("{pad}  Key: '{}'", String::from_utf8_lossy(&node.name));
                walk(&node.value, indent + 2);
            }
        }
        other => println!("{pad}{:?}: {}", other.kind(), other),
    }
}

fn main() -> Result<(), DecodeError> {
    let json = br#"{"Stations": [{"ID": "3010200", "MinTime": 120}], "OdinMode": false, "Cut": [1, 2,"#;
    println!("Input: {}", String::from_utf8_lossy(json));

    let decoded = decode(json)?;
    match &decoded {
        Decoded::Complete(_) => println!("Complete document"),
        Decoded::Partial(_) => println!("Truncated document, showing what parsed"),
    }
    walk(decoded.value(), 0);

    println!();
    print!("Compact: ");
    print(decoded.value(), &mut std::io::stdout()).expect("stdout");
    println!();
    Ok(())
}
