use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};
use dualdb_core::stmt;
use mysql_async::{consts::ColumnType, Column, Value as MySqlValue};

/// Character set number MySQL reports for binary columns.
const BINARY_CHARSET: u16 = 63;

/// Bridges core values and MySQL wire values.
#[derive(Debug)]
pub struct Value;

impl Value {
    pub fn to_mysql(value: &stmt::Value) -> MySqlValue {
        use stmt::Value::*;

        match value {
            Bool(v) => MySqlValue::Int(*v as i64),
            Bytes(v) => MySqlValue::Bytes(v.clone()),
            F64(v) => MySqlValue::Double(*v),
            I32(v) => MySqlValue::Int(*v as i64),
            I64(v) => MySqlValue::Int(*v),
            List(_) => MySqlValue::Bytes(value.to_json().to_string().into_bytes()),
            Null => MySqlValue::NULL,
            ObjectId(v) => MySqlValue::Bytes(v.as_str().as_bytes().to_vec()),
            String(v) => MySqlValue::Bytes(v.as_bytes().to_vec()),
            Timestamp(v) => MySqlValue::Date(
                v.year() as u16,
                v.month() as u8,
                v.day() as u8,
                v.hour() as u8,
                v.minute() as u8,
                v.second() as u8,
                v.timestamp_subsec_micros(),
            ),
        }
    }

    /// Converts a MySQL value within a row to a core value. Byte payloads
    /// become strings unless the column is binary.
    pub fn from_sql(value: MySqlValue, column: &Column) -> stmt::Value {
        match value {
            MySqlValue::NULL => stmt::Value::Null,
            MySqlValue::Int(v) => stmt::Value::I64(v),
            MySqlValue::UInt(v) => match i64::try_from(v) {
                Ok(v) => stmt::Value::I64(v),
                Err(_) => stmt::Value::F64(v as f64),
            },
            MySqlValue::Float(v) => stmt::Value::F64(v as f64),
            MySqlValue::Double(v) => stmt::Value::F64(v),
            MySqlValue::Bytes(v) => bytes_from_sql(v, column.column_type(), column.character_set()),
            MySqlValue::Date(year, month, day, hour, minute, second, micros) => {
                match date_from_sql(year, month, day, hour, minute, second, micros) {
                    Some(v) => stmt::Value::Timestamp(v),
                    // Zero dates such as `0000-00-00` have no instant.
                    None => stmt::Value::Null,
                }
            }
            other => stmt::Value::String(other.as_sql(true).trim_matches('\'').to_string()),
        }
    }
}

/// DATETIME and TIMESTAMP values come back in the session time zone, which
/// the driver keeps at UTC.
fn date_from_sql(
    year: u16,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
    micros: u32,
) -> Option<DateTime<Utc>> {
    NaiveDate::from_ymd_opt(year.into(), month.into(), day.into())?
        .and_hms_micro_opt(hour.into(), minute.into(), second.into(), micros)
        .map(|v| v.and_utc())
}

fn bytes_from_sql(bytes: Vec<u8>, ty: ColumnType, charset: u16) -> stmt::Value {
    let textual = charset != BINARY_CHARSET
        || matches!(
            ty,
            ColumnType::MYSQL_TYPE_DECIMAL | ColumnType::MYSQL_TYPE_NEWDECIMAL
        );

    if !textual {
        return stmt::Value::Bytes(bytes);
    }

    match String::from_utf8(bytes) {
        Ok(s) => stmt::Value::String(s),
        Err(err) => stmt::Value::Bytes(err.into_bytes()),
    }
}
