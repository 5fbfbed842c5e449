//! Lowering of arbitrary `serde::Serialize` input into a [`Value`] tree.
//!
//! This is the only place an [`UnsupportedTypeError`] can come from: the value
//! tree itself is a closed set, but typed input may contain kinds it has no
//! variant for (`char`, 128-bit integers, byte strings, data-carrying enum
//! variants, non-string map keys).

use {
    crate::{stringify, Number, Object, ToValueError, UnsupportedTypeError, Value, ROOT_PATH},
    serde::ser::{
        Impossible, Serialize, SerializeMap, SerializeSeq, SerializeStruct, SerializeTuple,
        SerializeTupleStruct, Serializer,
    },
};

/// Converts `value` into a [`Value`] tree.
///
/// Structs become objects in field declaration order, sequences and tuples
/// become arrays, `None` and `()` become `null` and unit enum variants become
/// their variant name.
///
/// ```rust
/// use sendgrid_json::{to_value, Value};
///
/// #[derive(serde::Serialize)]
/// struct Meta {
///     sent: bool,
///     initial: char,
/// }
///
/// let err = to_value(&Meta { sent: true, initial: 'x' }).unwrap_err();
/// assert_eq!(err.to_string(), "unsupported type (char) for member '<root>.initial'");
/// ```
pub fn to_value<T>(value: &T) -> Result<Value, ToValueError>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer::default())
}

/// Lowers `value` and stringifies it. Nothing is returned unless the whole
/// input could be converted.
pub fn to_json_string<T>(value: &T, minified: bool) -> Result<String, ToValueError>
where
    T: ?Sized + Serialize,
{
    to_value(value).map(|tree| stringify(&tree, minified))
}

/// `serde` serializer producing a [`Value`], tracking the logical path of the
/// member it is working on.
#[derive(Debug, Clone)]
pub struct ValueSerializer {
    path: String,
}

impl Default for ValueSerializer {
    fn default() -> Self {
        Self::at(ROOT_PATH)
    }
}

impl ValueSerializer {
    /// A serializer for the member found at `path`.
    pub fn at(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    fn unsupported(&self, kind: impl Into<String>) -> ToValueError {
        UnsupportedTypeError::new(self.path.clone(), kind).into()
    }
}

impl Serializer for ValueSerializer {
    type Ok = Value;
    type Error = ToValueError;
    type SerializeSeq = SerializeArray;
    type SerializeTuple = SerializeArray;
    type SerializeTupleStruct = SerializeArray;
    type SerializeTupleVariant = Impossible<Value, ToValueError>;
    type SerializeMap = SerializeObject;
    type SerializeStruct = SerializeObject;
    type SerializeStructVariant = Impossible<Value, ToValueError>;

    fn serialize_bool(self, v: bool) -> Result<Value, ToValueError> {
        Ok(Value::Boolean(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value, ToValueError> {
        Ok(Value::Number(Number::I8(v)))
    }

    fn serialize_i16(self, v: i16) -> Result<Value, ToValueError> {
        Ok(Value::Number(Number::I16(v)))
    }

    fn serialize_i32(self, v: i32) -> Result<Value, ToValueError> {
        Ok(Value::Number(Number::I32(v)))
    }

    fn serialize_i64(self, v: i64) -> Result<Value, ToValueError> {
        Ok(Value::Number(Number::I64(v)))
    }

    fn serialize_i128(self, _v: i128) -> Result<Value, ToValueError> {
        Err(self.unsupported("i128"))
    }

    fn serialize_u8(self, v: u8) -> Result<Value, ToValueError> {
        Ok(Value::Number(Number::U8(v)))
    }

    fn serialize_u16(self, v: u16) -> Result<Value, ToValueError> {
        Ok(Value::Number(Number::U16(v)))
    }

    fn serialize_u32(self, v: u32) -> Result<Value, ToValueError> {
        Ok(Value::Number(Number::U32(v)))
    }

    fn serialize_u64(self, v: u64) -> Result<Value, ToValueError> {
        Ok(Value::Number(Number::U64(v)))
    }

    fn serialize_u128(self, _v: u128) -> Result<Value, ToValueError> {
        Err(self.unsupported("u128"))
    }

    fn serialize_f32(self, v: f32) -> Result<Value, ToValueError> {
        Ok(Value::Number(Number::F32(v)))
    }

    fn serialize_f64(self, v: f64) -> Result<Value, ToValueError> {
        Ok(Value::Number(Number::F64(v)))
    }

    fn serialize_char(self, _v: char) -> Result<Value, ToValueError> {
        Err(self.unsupported("char"))
    }

    fn serialize_str(self, v: &str) -> Result<Value, ToValueError> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<Value, ToValueError> {
        Err(self.unsupported("bytes"))
    }

    fn serialize_none(self) -> Result<Value, ToValueError> {
        Ok(Value::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value, ToValueError>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value, ToValueError> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value, ToValueError> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value, ToValueError> {
        Ok(Value::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Value, ToValueError>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _value: &T,
    ) -> Result<Value, ToValueError>
    where
        T: ?Sized + Serialize,
    {
        Err(self.unsupported(format!("enum variant {}::{}", name, variant)))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeArray, ToValueError> {
        Ok(SerializeArray {
            path: self.path,
            items: Vec::with_capacity(len.unwrap_or(0)),
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeArray, ToValueError> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<SerializeArray, ToValueError> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant, ToValueError> {
        Err(self.unsupported(format!("enum variant {}::{}", name, variant)))
    }

    fn serialize_map(self, len: Option<usize>) -> Result<SerializeObject, ToValueError> {
        Ok(SerializeObject {
            path: self.path,
            map: Object::with_capacity(len.unwrap_or(0)),
            next_key: None,
        })
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<SerializeObject, ToValueError> {
        self.serialize_map(Some(len))
    }

    fn serialize_struct_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant, ToValueError> {
        Err(self.unsupported(format!("enum variant {}::{}", name, variant)))
    }
}

#[doc(hidden)]
pub struct SerializeArray {
    path: String,
    items: Vec<Value>,
}

impl SerializeSeq for SerializeArray {
    type Ok = Value;
    type Error = ToValueError;

    fn serialize_element<T>(&mut self, value: &T) -> Result<(), ToValueError>
    where
        T: ?Sized + Serialize,
    {
        let path = format!("{}[{}]", self.path, self.items.len());
        self.items.push(value.serialize(ValueSerializer::at(path))?);
        Ok(())
    }

    fn end(self) -> Result<Value, ToValueError> {
        Ok(Value::Array(self.items))
    }
}

impl SerializeTuple for SerializeArray {
    type Ok = Value;
    type Error = ToValueError;

    fn serialize_element<T>(&mut self, value: &T) -> Result<(), ToValueError>
    where
        T: ?Sized + Serialize,
    {
        SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value, ToValueError> {
        SerializeSeq::end(self)
    }
}

impl SerializeTupleStruct for SerializeArray {
    type Ok = Value;
    type Error = ToValueError;

    fn serialize_field<T>(&mut self, value: &T) -> Result<(), ToValueError>
    where
        T: ?Sized + Serialize,
    {
        SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value, ToValueError> {
        SerializeSeq::end(self)
    }
}

#[doc(hidden)]
pub struct SerializeObject {
    path: String,
    map: Object,
    next_key: Option<String>,
}

impl SerializeObject {
    fn insert<T>(&mut self, key: String, value: &T) -> Result<(), ToValueError>
    where
        T: ?Sized + Serialize,
    {
        let path = format!("{}.{}", self.path, key);
        let value = value.serialize(ValueSerializer::at(path))?;
        self.map.insert(key, value);
        Ok(())
    }
}

impl SerializeMap for SerializeObject {
    type Ok = Value;
    type Error = ToValueError;

    fn serialize_key<T>(&mut self, key: &T) -> Result<(), ToValueError>
    where
        T: ?Sized + Serialize,
    {
        self.next_key = Some(key.serialize(KeySerializer { path: &self.path })?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<(), ToValueError>
    where
        T: ?Sized + Serialize,
    {
        let key = self.next_key.take().ok_or_else(|| {
            ToValueError::Custom(format!(
                "map value without a key for member '{}'",
                self.path
            ))
        })?;
        self.insert(key, value)
    }

    fn end(self) -> Result<Value, ToValueError> {
        Ok(Value::Object(self.map))
    }
}

impl SerializeStruct for SerializeObject {
    type Ok = Value;
    type Error = ToValueError;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<(), ToValueError>
    where
        T: ?Sized + Serialize,
    {
        self.insert(key.to_string(), value)
    }

    fn end(self) -> Result<Value, ToValueError> {
        Ok(Value::Object(self.map))
    }
}

/// Turns map keys into strings. Integers are written in decimal.
struct KeySerializer<'a> {
    path: &'a str,
}

impl KeySerializer<'_> {
    fn unsupported(&self, kind: &str) -> ToValueError {
        UnsupportedTypeError::new(self.path, format!("map key ({})", kind)).into()
    }
}

impl<'a> Serializer for KeySerializer<'a> {
    type Ok = String;
    type Error = ToValueError;
    type SerializeSeq = Impossible<String, ToValueError>;
    type SerializeTuple = Impossible<String, ToValueError>;
    type SerializeTupleStruct = Impossible<String, ToValueError>;
    type SerializeTupleVariant = Impossible<String, ToValueError>;
    type SerializeMap = Impossible<String, ToValueError>;
    type SerializeStruct = Impossible<String, ToValueError>;
    type SerializeStructVariant = Impossible<String, ToValueError>;

    fn serialize_bool(self, _v: bool) -> Result<String, ToValueError> {
        Err(self.unsupported("bool"))
    }

    fn serialize_i8(self, v: i8) -> Result<String, ToValueError> {
        Ok(v.to_string())
    }

    fn serialize_i16(self, v: i16) -> Result<String, ToValueError> {
        Ok(v.to_string())
    }

    fn serialize_i32(self, v: i32) -> Result<String, ToValueError> {
        Ok(v.to_string())
    }

    fn serialize_i64(self, v: i64) -> Result<String, ToValueError> {
        Ok(v.to_string())
    }

    fn serialize_u8(self, v: u8) -> Result<String, ToValueError> {
        Ok(v.to_string())
    }

    fn serialize_u16(self, v: u16) -> Result<String, ToValueError> {
        Ok(v.to_string())
    }

    fn serialize_u32(self, v: u32) -> Result<String, ToValueError> {
        Ok(v.to_string())
    }

    fn serialize_u64(self, v: u64) -> Result<String, ToValueError> {
        Ok(v.to_string())
    }

    fn serialize_f32(self, _v: f32) -> Result<String, ToValueError> {
        Err(self.unsupported("f32"))
    }

    fn serialize_f64(self, _v: f64) -> Result<String, ToValueError> {
        Err(self.unsupported("f64"))
    }

    fn serialize_char(self, v: char) -> Result<String, ToValueError> {
        Ok(v.to_string())
    }

    fn serialize_str(self, v: &str) -> Result<String, ToValueError> {
        Ok(v.to_string())
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<String, ToValueError> {
        Err(self.unsupported("bytes"))
    }

    fn serialize_none(self) -> Result<String, ToValueError> {
        Err(self.unsupported("none"))
    }

    fn serialize_some<T>(self, value: &T) -> Result<String, ToValueError>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<String, ToValueError> {
        Err(self.unsupported("unit"))
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<String, ToValueError> {
        Err(self.unsupported(name))
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<String, ToValueError> {
        Ok(variant.to_string())
    }

    fn serialize_newtype_struct<T>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<String, ToValueError>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<String, ToValueError>
    where
        T: ?Sized + Serialize,
    {
        Err(self.unsupported(name))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq, ToValueError> {
        Err(self.unsupported("sequence"))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple, ToValueError> {
        Err(self.unsupported("tuple"))
    }

    fn serialize_tuple_struct(
        self,
        name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct, ToValueError> {
        Err(self.unsupported(name))
    }

    fn serialize_tuple_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant, ToValueError> {
        Err(self.unsupported(name))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap, ToValueError> {
        Err(self.unsupported("map"))
    }

    fn serialize_struct(
        self,
        name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStruct, ToValueError> {
        Err(self.unsupported(name))
    }

    fn serialize_struct_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant, ToValueError> {
        Err(self.unsupported(name))
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Number::F32(n) => serializer.serialize_f32(n),
            Number::F64(n) => serializer.serialize_f64(n),
            Number::I8(n) => serializer.serialize_i8(n),
            Number::I16(n) => serializer.serialize_i16(n),
            Number::I32(n) => serializer.serialize_i32(n),
            Number::I64(n) => serializer.serialize_i64(n),
            Number::U8(n) => serializer.serialize_u8(n),
            Number::U16(n) => serializer.serialize_u16(n),
            Number::U32(n) => serializer.serialize_u32(n),
            Number::U64(n) => serializer.serialize_u64(n),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::String(s) => serializer.serialize_str(s),
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::Number(n) => n.serialize(serializer),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map {
                    out.serialize_entry(key, value)?;
                }
                out.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use std::collections::BTreeMap;

    #[derive(Serialize)]
    enum Status {
        Queued,
        Failed(String),
    }

    #[derive(Serialize)]
    struct Recipient {
        email: &'static str,
        name: Option<&'static str>,
    }

    #[test]
    fn test_struct_fields_keep_declaration_order() {
        #[derive(Serialize)]
        struct Payload {
            subject: &'static str,
            from: &'static str,
            attempts: u32,
        }

        let value = to_value(&Payload {
            subject: "hi",
            from: "a@x.com",
            attempts: 2,
        })
        .unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["subject", "from", "attempts"]);
    }

    #[test]
    fn test_options_units_and_variants() {
        let value = to_value(&(None::<u8>, (), Status::Queued)).unwrap();
        assert_eq!(
            value,
            Value::Array(vec![Value::Null, Value::Null, Value::from("Queued")])
        );
    }

    #[test]
    fn test_integer_map_keys_are_stringified() {
        let mut map = BTreeMap::new();
        map.insert(2u32, "two");
        map.insert(1u32, "one");
        assert_eq!(
            to_json_string(&map, true).unwrap(),
            r#"{"1":"one","2":"two"}"#
        );
    }

    #[test]
    fn test_unsupported_paths() {
        let to = vec![
            Recipient { email: "a@x.com", name: None },
            Recipient { email: "b@x.com", name: Some("b") },
        ];
        let mut root = BTreeMap::new();
        root.insert("to", to);
        assert!(to_value(&root).is_ok());

        let err = to_value(&vec![Status::Queued, Status::Failed("x".into())]).unwrap_err();
        assert_eq!(
            err,
            ToValueError::Unsupported(UnsupportedTypeError::new(
                "<root>[1]",
                "enum variant Status::Failed"
            ))
        );

        let err = to_value(&(1u8, 2u128)).unwrap_err();
        assert_eq!(err.as_unsupported().unwrap().path, "<root>[1]");
        assert_eq!(err.as_unsupported().unwrap().kind, "u128");

        let mut bad_keys = BTreeMap::new();
        bad_keys.insert(true, 1u8);
        let err = to_value(&bad_keys).unwrap_err();
        assert_eq!(err.to_string(), "unsupported type (map key (bool)) for member '<root>'");
    }

    #[test]
    fn test_value_round_trips_through_serializer() {
        let mut root = Value::object();
        root.insert("z", 1.5f32);
        root.insert("a", vec![Value::Null, Value::from(false)]);
        assert_eq!(to_value(&root).unwrap(), root);
    }
}
