use indexmap::IndexMap;
use std::fmt::{Display, Formatter};

/// Insertion-ordered JSON object.
///
/// Inserting an existing key replaces its value in place; the key keeps the
/// position of its first insertion.
pub type Object = IndexMap<String, Value>;

/// A node of the value tree handed to the stringifier.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    String(String),
    Boolean(bool),
    Number(Number),
    Array(Vec<Value>),
    Object(Object),
}

/// A number in one of the supported widths.
///
/// Every width is normalized through [`Number::to_float`] before it is
/// formatted, so `I32(42)` and `F64(42.0)` produce the same text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    F32(f32),
    F64(f64),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
}

impl Number {
    /// Widens the number to the common floating point representation.
    ///
    /// 64-bit integers beyond 2^53 lose precision here.
    pub fn to_float(self) -> f64 {
        match self {
            Number::F32(n) => n as f64,
            Number::F64(n) => n,
            Number::I8(n) => n as f64,
            Number::I16(n) => n as f64,
            Number::I32(n) => n as f64,
            Number::I64(n) => n as f64,
            Number::U8(n) => n as f64,
            Number::U16(n) => n as f64,
            Number::U32(n) => n as f64,
            Number::U64(n) => n as f64,
        }
    }

    /// Name of the width, as used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Number::F32(_) => "f32",
            Number::F64(_) => "f64",
            Number::I8(_) => "i8",
            Number::I16(_) => "i16",
            Number::I32(_) => "i32",
            Number::I64(_) => "i64",
            Number::U8(_) => "u8",
            Number::U16(_) => "u16",
            Number::U32(_) => "u32",
            Number::U64(_) => "u64",
        }
    }
}

impl Value {
    /// An empty object.
    pub fn object() -> Self {
        Value::Object(Object::new())
    }

    /// An empty array.
    pub fn array() -> Self {
        Value::Array(Vec::new())
    }

    /// Inserts `key` into this object, returning the value it replaced.
    ///
    /// `Null` is turned into an empty object first.
    ///
    /// # Panics
    /// When called on anything other than an object or `Null`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        if self.is_null() {
            *self = Value::object();
        }
        match self {
            Value::Object(map) => map.insert(key.into(), value.into()),
            other => panic!("cannot insert a key into a JSON {}", other.kind()),
        }
    }

    /// Appends `value` to this array.
    ///
    /// `Null` is turned into an empty array first.
    ///
    /// # Panics
    /// When called on anything other than an array or `Null`.
    pub fn push(&mut self, value: impl Into<Value>) {
        if self.is_null() {
            *self = Value::array();
        }
        match self {
            Value::Array(items) => items.push(value.into()),
            other => panic!("cannot push onto a JSON {}", other.kind()),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Looks up `key` when this is an object.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|map| map.get(key))
    }

    /// Name of the variant, as used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::String(_) => "string",
            Value::Boolean(_) => "boolean",
            Value::Number(_) => "number",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

/// Minified JSON text, without a trailing newline.
impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&crate::stringify(self, true))
    }
}

macro_rules! number_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Number {
                fn from(n: $ty) -> Self {
                    Number::$variant(n)
                }
            }

            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Number(Number::$variant(n))
                }
            }
        )*
    };
}

number_from! {
    f32 => F32,
    f64 => F64,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
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
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::String(s.clone())
    }
}

impl From<Object> for Value {
    fn from(map: Object) -> Self {
        Value::Object(map)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<Value>> From<&[T]> for Value {
    fn from(items: &[T]) -> Self {
        Value::Array(items.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map(Into::into).unwrap_or(Value::Null)
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Value::Array(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_first_position() {
        let mut value = Value::object();
        value.insert("b", 1u8);
        value.insert("a", 2u8);
        let replaced = value.insert("b", 3u8);

        assert_eq!(replaced, Some(Value::Number(Number::U8(1))));
        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["b", "a"]);
        assert_eq!(value.get("b"), Some(&Value::Number(Number::U8(3))));
    }

    #[test]
    fn test_null_becomes_container() {
        let mut obj = Value::Null;
        obj.insert("k", true);
        assert_eq!(obj.kind(), "object");

        let mut arr = Value::Null;
        arr.push("x");
        arr.push(Value::Null);
        assert_eq!(arr.as_array().map(Vec::len), Some(2));
    }

    #[test]
    #[should_panic(expected = "cannot insert a key into a JSON string")]
    fn test_insert_into_string_panics() {
        let mut value = Value::from("text");
        value.insert("k", 1i32);
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::String("x".to_string()));
        assert_eq!(
            Value::from(vec![1i64, 2]),
            Value::Array(vec![
                Value::Number(Number::I64(1)),
                Value::Number(Number::I64(2))
            ])
        );
        let collected: Value = ["a", "b"].into_iter().collect();
        assert_eq!(collected.as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn test_to_float_widens_every_width() {
        assert_eq!(Number::U8(255).to_float(), 255.0);
        assert_eq!(Number::I64(-7).to_float(), -7.0);
        assert_eq!(Number::F32(0.5).to_float(), 0.5);
        // 2^53 + 1 is not representable as f64
        assert_eq!(Number::U64(9_007_199_254_740_993).to_float(), 9_007_199_254_740_992.0);
    }
}
