use super::ObjectId;

use chrono::{DateTime, SecondsFormat, Utc};

/// A single field value as it travels between a model and a backend.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Raw bytes
    Bytes(Vec<u8>),

    /// 64-bit float
    F64(f64),

    /// Signed 32-bit integer
    I32(i32),

    /// Signed 64-bit integer
    I64(i64),

    /// A list of values
    List(Vec<Value>),

    /// Absent value
    #[default]
    Null,

    /// The document store's native object identifier
    ObjectId(ObjectId),

    /// String value
    String(String),

    /// An instant in UTC, stored natively where the backend has a date type
    Timestamp(DateTime<Utc>),
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub const fn is_string(&self) -> bool {
        matches!(self, Self::String(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::I32(v) => Some(v as i64),
            Self::I64(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match *self {
            Self::Timestamp(v) => Some(v),
            _ => None,
        }
    }

    /// Numeric view used when comparing values of different widths.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Self::I32(v) => Some(v as f64),
            Self::I64(v) => Some(v as f64),
            Self::F64(v) => Some(v),
            _ => None,
        }
    }

    /// Name of the variant, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "Bool",
            Self::Bytes(_) => "Bytes",
            Self::F64(_) => "F64",
            Self::I32(_) => "I32",
            Self::I64(_) => "I64",
            Self::List(_) => "List",
            Self::Null => "Null",
            Self::ObjectId(_) => "ObjectId",
            Self::String(_) => "String",
            Self::Timestamp(_) => "Timestamp",
        }
    }

    /// Generic JSON rendering of the value.
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::Value as Json;

        match self {
            Self::Bool(v) => Json::Bool(*v),
            Self::Bytes(v) => Json::Array(v.iter().map(|b| Json::from(*b)).collect()),
            Self::F64(v) => serde_json::Number::from_f64(*v)
                .map(Json::Number)
                .unwrap_or(Json::Null),
            Self::I32(v) => Json::from(*v),
            Self::I64(v) => Json::from(*v),
            Self::List(items) => Json::Array(items.iter().map(Value::to_json).collect()),
            Self::Null => Json::Null,
            Self::ObjectId(id) => serde_json::json!({ "$oid": id.as_str() }),
            Self::String(v) => Json::String(v.clone()),
            Self::Timestamp(v) => Json::String(v.to_rfc3339_opts(SecondsFormat::Millis, true)),
        }
    }

    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<i32> for Value {
    fn from(src: i32) -> Self {
        Self::I32(src)
    }
}

impl From<i64> for Value {
    fn from(src: i64) -> Self {
        Self::I64(src)
    }
}

impl From<u32> for Value {
    fn from(src: u32) -> Self {
        Self::I64(src as i64)
    }
}

impl From<f64> for Value {
    fn from(src: f64) -> Self {
        Self::F64(src)
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&String> for Value {
    fn from(src: &String) -> Self {
        Self::String(src.clone())
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(src: Vec<u8>) -> Self {
        Self::Bytes(src)
    }
}

impl From<ObjectId> for Value {
    fn from(src: ObjectId) -> Self {
        Self::ObjectId(src)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(src: DateTime<Utc>) -> Self {
        Self::Timestamp(src)
    }
}

impl<T> From<Option<T>> for Value
where
    Self: From<T>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::from(value),
            None => Self::Null,
        }
    }
}
