use crate::{
    stmt::{ObjectId, Value},
    Error, Result,
};

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// A Rust type stored in a single column or document key.
pub trait Primitive: Sized {
    fn load(value: Value) -> Result<Self>;

    fn to_value(&self) -> Value;
}

impl Primitive for bool {
    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Bool(v) => Ok(v),
            // SQLite and MySQL store booleans as integers
            Value::I32(v) => Ok(v != 0),
            Value::I64(v) => Ok(v != 0),
            value => Err(Error::type_conversion(value, "bool")),
        }
    }

    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl Primitive for i32 {
    fn load(value: Value) -> Result<Self> {
        match value {
            Value::I32(v) => Ok(v),
            Value::I64(v) => i32::try_from(v).map_err(|_| Error::type_conversion(value, "i32")),
            value => Err(Error::type_conversion(value, "i32")),
        }
    }

    fn to_value(&self) -> Value {
        Value::I32(*self)
    }
}

impl Primitive for i64 {
    fn load(value: Value) -> Result<Self> {
        match value {
            Value::I32(v) => Ok(v as i64),
            Value::I64(v) => Ok(v),
            value => Err(Error::type_conversion(value, "i64")),
        }
    }

    fn to_value(&self) -> Value {
        Value::I64(*self)
    }
}

impl Primitive for u32 {
    fn load(value: Value) -> Result<Self> {
        match value.as_i64() {
            Some(v) => u32::try_from(v).map_err(|_| Error::type_conversion(value, "u32")),
            None => Err(Error::type_conversion(value, "u32")),
        }
    }

    fn to_value(&self) -> Value {
        Value::I64(*self as i64)
    }
}

impl Primitive for f64 {
    fn load(value: Value) -> Result<Self> {
        match value.as_f64() {
            Some(v) => Ok(v),
            None => Err(Error::type_conversion(value, "f64")),
        }
    }

    fn to_value(&self) -> Value {
        Value::F64(*self)
    }
}

impl Primitive for String {
    fn load(value: Value) -> Result<Self> {
        match value {
            Value::String(v) => Ok(v),
            value => Err(Error::type_conversion(value, "String")),
        }
    }

    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl Primitive for Vec<u8> {
    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Bytes(v) => Ok(v),
            value => Err(Error::type_conversion(value, "Vec<u8>")),
        }
    }

    fn to_value(&self) -> Value {
        Value::Bytes(self.clone())
    }
}

impl Primitive for ObjectId {
    fn load(value: Value) -> Result<Self> {
        match value {
            Value::ObjectId(v) => Ok(v),
            Value::String(v) => ObjectId::parse(&v),
            value => Err(Error::type_conversion(value, "ObjectId")),
        }
    }

    fn to_value(&self) -> Value {
        Value::ObjectId(self.clone())
    }
}

/// Backends without a native date type hand timestamps back as text or as
/// Unix seconds.
impl Primitive for DateTime<Utc> {
    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Timestamp(v) => Ok(v),
            Value::String(v) => match parse_timestamp(&v) {
                Some(at) => Ok(at),
                None => Err(Error::type_conversion(Value::String(v), "DateTime<Utc>")),
            },
            Value::I32(_) | Value::I64(_) => value
                .as_i64()
                .and_then(|secs| DateTime::from_timestamp(secs, 0))
                .ok_or_else(|| Error::type_conversion(value, "DateTime<Utc>")),
            value => Err(Error::type_conversion(value, "DateTime<Utc>")),
        }
    }

    fn to_value(&self) -> Value {
        Value::Timestamp(*self)
    }
}

/// Stored as UTC.
impl Primitive for NaiveDateTime {
    fn load(value: Value) -> Result<Self> {
        DateTime::<Utc>::load(value).map(|v| v.naive_utc())
    }

    fn to_value(&self) -> Value {
        Value::Timestamp(self.and_utc())
    }
}

fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(v) = DateTime::parse_from_rfc3339(text) {
        return Some(v.with_timezone(&Utc));
    }

    if let Ok(v) = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(v.and_utc());
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|v| v.and_utc())
}

impl<T: Primitive> Primitive for Option<T> {
    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            value => T::load(value).map(Some),
        }
    }

    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Null,
        }
    }
}
