//! [`PackValue`] — the in-memory value tree consumed by the encoder.

use crate::PackExtension;

/// A structured value that can be handed to the MessagePack encoder.
///
/// `Null`, `Bool`, `Integer`, `Str`, `Bytes`, `Array` and `Object` encode to
/// their wire representations. `Float` and `Extension` values can be held in
/// a tree but are outside the supported format subset; encoding them fails
/// with [`crate::MsgPackError::UnsupportedType`].
///
/// Object entries keep their insertion order, and keys are full values, not
/// just strings — the wire format routes keys through the same encoding
/// dispatch as any other value.
#[derive(Debug, Clone, PartialEq)]
pub enum PackValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Str(String),
    Bytes(Vec<u8>),
    Array(Vec<PackValue>),
    Object(Vec<(PackValue, PackValue)>),
    Extension(PackExtension),
}

impl From<serde_json::Value> for PackValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => PackValue::Null,
            serde_json::Value::Bool(b) => PackValue::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    PackValue::Integer(i)
                } else {
                    // u64 beyond i64::MAX or a fractional number; either way
                    // not an encodable integer
                    PackValue::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => PackValue::Str(s),
            serde_json::Value::Array(arr) => {
                PackValue::Array(arr.into_iter().map(PackValue::from).collect())
            }
            serde_json::Value::Object(obj) => PackValue::Object(
                obj.into_iter()
                    .map(|(k, v)| (PackValue::Str(k), PackValue::from(v)))
                    .collect(),
            ),
        }
    }
}
