use aws_sdk_dynamodb::types::AttributeValue;
use serde_json::{Number, Value};

/// Converts a decoded JSON value into its DynamoDB attribute value.
///
/// The conversion never fails. The result has the same shape as the input:
/// arrays keep their order, objects keep their key set, and only the leaves
/// change representation.
///
/// # Leaf encoding
///
/// - strings and booleans map to `S` and `BOOL` unchanged
/// - integers map to `N` with their digits unchanged (`3` becomes `"3"`,
///   `-0` stays `"-0"`, and integers wider than 64 bits are kept whole)
/// - floats map to `N` with exactly six decimals (`3.5` becomes `"3.500000"`)
/// - `null`, and any float that does not fit an `f64`, maps to `NULL`
///
/// A number is an integer when its JSON text has no `.`, `e` or `E`. Integer
/// and float inputs for the same quantity (`2` and `2.0`) produce different
/// text.
pub fn encode(value: &Value) -> AttributeValue {
    match value {
        Value::String(s) => AttributeValue::S(s.clone()),
        Value::Bool(b) => AttributeValue::Bool(*b),
        Value::Number(n) => encode_number(n),
        Value::Array(items) => AttributeValue::L(items.iter().map(encode).collect()),
        Value::Object(fields) => AttributeValue::M(
            fields
                .iter()
                .map(|(key, field)| (key.clone(), encode(field)))
                .collect(),
        ),
        Value::Null => AttributeValue::Null(true),
    }
}

fn encode_number(n: &Number) -> AttributeValue {
    // Needs serde_json's `arbitrary_precision` so the text is the literal as written.
    let text = n.to_string();
    if !text.contains(['.', 'e', 'E']) {
        return AttributeValue::N(text);
    }
    match n.as_f64() {
        Some(f) if f.is_finite() => AttributeValue::N(format!("{f:.6}")),
        _ => AttributeValue::Null(true),
    }
}
