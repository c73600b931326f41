use dualdb_core::stmt;
use rusqlite::types::{ToSql, ToSqlOutput, Value as SqlValue, ValueRef};

/// Bridges core values and SQLite storage classes.
#[derive(Debug)]
pub struct Value<'a>(&'a stmt::Value);

impl<'a> From<&'a stmt::Value> for Value<'a> {
    fn from(value: &'a stmt::Value) -> Self {
        Value(value)
    }
}

impl Value<'_> {
    /// Converts a SQLite value within a row to a core value.
    pub fn from_sql(value: ValueRef<'_>) -> stmt::Value {
        match value {
            ValueRef::Null => stmt::Value::Null,
            ValueRef::Integer(v) => stmt::Value::I64(v),
            ValueRef::Real(v) => stmt::Value::F64(v),
            ValueRef::Text(v) => stmt::Value::String(String::from_utf8_lossy(v).into_owned()),
            ValueRef::Blob(v) => stmt::Value::Bytes(v.to_vec()),
        }
    }
}

impl ToSql for Value<'_> {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        use stmt::Value;

        Ok(match self.0 {
            Value::Bool(v) => ToSqlOutput::Owned(SqlValue::Integer(*v as i64)),
            Value::I32(v) => ToSqlOutput::Owned(SqlValue::Integer(*v as i64)),
            Value::I64(v) => ToSqlOutput::Owned(SqlValue::Integer(*v)),
            Value::F64(v) => ToSqlOutput::Owned(SqlValue::Real(*v)),
            Value::String(v) => ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes())),
            Value::Bytes(v) => ToSqlOutput::Borrowed(ValueRef::Blob(&v[..])),
            Value::ObjectId(v) => ToSqlOutput::Borrowed(ValueRef::Text(v.as_str().as_bytes())),
            Value::List(_) => ToSqlOutput::Owned(SqlValue::Text(self.0.to_json().to_string())),
            // Same text form as SQLite's own `datetime()`, so stored values sort
            // and compare as text.
            Value::Timestamp(v) => ToSqlOutput::Owned(SqlValue::Text(
                v.format("%Y-%m-%d %H:%M:%S%.3f").to_string(),
            )),
            Value::Null => ToSqlOutput::Owned(SqlValue::Null),
        })
    }
}
