use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use serde_json::Value;

/// Native value of a record field as seen by the comparator.
///
/// Equality is strict: values of different variants never compare equal, so
/// `Int(30)`, `Float(30.0)` and `Text("30")` are three different values. Floats follow
/// IEEE comparison, which makes a `NaN` field differ from itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
    DateTime(DateTime<Utc>),
    Date(NaiveDate),
    List(Vec<FieldValue>),
    Json(Value),
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => f.write_str("null"),
            FieldValue::Bool(value) => write!(f, "{value}"),
            FieldValue::Int(value) => write!(f, "{value}"),
            FieldValue::UInt(value) => write!(f, "{value}"),
            FieldValue::Float(value) => write!(f, "{value:?}"),
            FieldValue::Text(value) => write!(f, "{value:?}"),
            FieldValue::Bytes(bytes) => {
                f.write_str("0x")?;
                for byte in bytes {
                    write!(f, "{byte:02x}")?;
                }
                Ok(())
            }
            FieldValue::DateTime(value) => write!(f, "{}", value.to_rfc3339()),
            FieldValue::Date(value) => write!(f, "{value}"),
            FieldValue::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            FieldValue::Json(value) => write!(f, "{value}"),
        }
    }
}

/// Conversion from a native Rust field type into a [`FieldValue`].
///
/// The `Record` derive calls this for every non-skipped field, so a field type must
/// implement it for the derive to compile.
pub trait ToFieldValue {
    fn to_field_value(&self) -> FieldValue;
}

impl<T: ToFieldValue + ?Sized> ToFieldValue for &T {
    fn to_field_value(&self) -> FieldValue {
        (**self).to_field_value()
    }
}

impl ToFieldValue for FieldValue {
    fn to_field_value(&self) -> FieldValue {
        self.clone()
    }
}

impl ToFieldValue for bool {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Bool(*self)
    }
}

macro_rules! int_field_value {
    ($($ty:ty),*) => {
        $(
            impl ToFieldValue for $ty {
                fn to_field_value(&self) -> FieldValue {
                    FieldValue::Int(i64::from(*self))
                }
            }
        )*
    };
}

int_field_value!(i8, i16, i32, i64, u8, u16, u32);

impl ToFieldValue for u64 {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::UInt(*self)
    }
}

impl ToFieldValue for usize {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::UInt(*self as u64)
    }
}

impl ToFieldValue for isize {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Int(*self as i64)
    }
}

impl ToFieldValue for f32 {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Float(f64::from(*self))
    }
}

impl ToFieldValue for f64 {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Float(*self)
    }
}

impl ToFieldValue for str {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Text(self.to_string())
    }
}

impl ToFieldValue for String {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Text(self.clone())
    }
}

impl ToFieldValue for char {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Text(self.to_string())
    }
}

impl ToFieldValue for DateTime<Utc> {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::DateTime(*self)
    }
}

impl ToFieldValue for NaiveDate {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Date(*self)
    }
}

impl ToFieldValue for Value {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Json(self.clone())
    }
}

impl<T: ToFieldValue> ToFieldValue for Option<T> {
    fn to_field_value(&self) -> FieldValue {
        match self {
            Some(value) => value.to_field_value(),
            None => FieldValue::Null,
        }
    }
}

/// Byte vectors map to [`FieldValue::Bytes`]; every other vector becomes a list.
impl ToFieldValue for Vec<u8> {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Bytes(self.clone())
    }
}

macro_rules! list_field_value {
    ($($ty:ty),*) => {
        $(
            impl ToFieldValue for Vec<$ty> {
                fn to_field_value(&self) -> FieldValue {
                    FieldValue::List(self.iter().map(ToFieldValue::to_field_value).collect())
                }
            }
        )*
    };
}

list_field_value!(
    bool, i8, i16, i32, i64, u16, u32, u64, usize, f32, f64, String, DateTime<Utc>, NaiveDate, Value, FieldValue
);

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Int(i64::from(value))
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn equality_is_type_sensitive() {
        assert_ne!(FieldValue::Int(30), FieldValue::Float(30.0));
        assert_ne!(FieldValue::Int(30), FieldValue::Text("30".into()));
        assert_ne!(FieldValue::Int(1), FieldValue::UInt(1));
        assert_ne!(FieldValue::Null, FieldValue::Text(String::new()));
        assert_eq!(FieldValue::Int(30), 30i32.to_field_value());
    }

    #[test]
    fn nan_never_equals_itself() {
        let nan = f64::NAN.to_field_value();
        assert_ne!(nan, nan.clone());
    }

    #[test]
    fn options_and_vectors_convert() {
        assert_eq!(None::<String>.to_field_value(), FieldValue::Null);
        assert_eq!(Some(5u8).to_field_value(), FieldValue::Int(5));
        assert_eq!(vec![1u8, 2].to_field_value(), FieldValue::Bytes(vec![1, 2]));
        assert_eq!(
            vec!["a".to_string()].to_field_value(),
            FieldValue::List(vec![FieldValue::Text("a".into())])
        );
    }

    #[test]
    fn serializes_as_plain_json() {
        let value = FieldValue::List(vec![FieldValue::Int(1), FieldValue::Null, FieldValue::Text("x".into())]);
        assert_eq!(serde_json::to_value(&value).unwrap(), json!([1, null, "x"]));
    }

    #[test]
    fn display_is_human_readable() {
        assert_eq!(FieldValue::Text("Ann".into()).to_string(), "\"Ann\"");
        assert_eq!(FieldValue::Float(1.0).to_string(), "1.0");
        assert_eq!(FieldValue::Bytes(vec![0xab, 0x01]).to_string(), "0xab01");
        assert_eq!(
            FieldValue::List(vec![FieldValue::Int(1), FieldValue::Bool(true)]).to_string(),
            "[1, true]"
        );
    }
}
