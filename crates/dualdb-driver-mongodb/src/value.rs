use bson::{spec::BinarySubtype, Binary, Bson, Document};
use chrono::DateTime;
use dualdb_core::{
    stmt::{ObjectId, Record, Value},
    Error, Result,
};

pub fn to_bson(value: &Value) -> Result<Bson> {
    Ok(match value {
        Value::Null => Bson::Null,
        Value::Bool(v) => Bson::Boolean(*v),
        Value::String(v) => Bson::String(v.clone()),
        Value::I32(v) => Bson::Int32(*v),
        Value::I64(v) => Bson::Int64(*v),
        Value::F64(v) => Bson::Double(*v),
        Value::Bytes(v) => Bson::Binary(Binary {
            subtype: BinarySubtype::Generic,
            bytes: v.clone(),
        }),
        Value::ObjectId(v) => Bson::ObjectId(
            bson::oid::ObjectId::parse_str(v.as_str()).map_err(Error::driver)?,
        ),
        Value::List(items) => Bson::Array(items.iter().map(to_bson).collect::<Result<_>>()?),
        // BSON dates carry milliseconds; finer precision is truncated.
        Value::Timestamp(v) => Bson::DateTime(bson::DateTime::from_millis(v.timestamp_millis())),
    })
}

pub fn from_bson(bson: Bson) -> Result<Value> {
    Ok(match bson {
        Bson::Null | Bson::Undefined => Value::Null,
        Bson::Boolean(v) => Value::Bool(v),
        Bson::String(v) => Value::String(v),
        Bson::Int32(v) => Value::I32(v),
        Bson::Int64(v) => Value::I64(v),
        Bson::Double(v) => Value::F64(v),
        Bson::Binary(v) => Value::Bytes(v.bytes),
        Bson::ObjectId(oid) => Value::ObjectId(ObjectId::parse(&oid.to_hex())?),
        Bson::Array(items) => Value::List(
            items
                .into_iter()
                .map(from_bson)
                .collect::<Result<_>>()?,
        ),
        Bson::DateTime(v) => {
            let millis = v.timestamp_millis();
            let at = DateTime::from_timestamp_millis(millis).ok_or_else(|| {
                Error::from_args(format_args!("BSON date out of range; millis={millis}"))
            })?;
            Value::Timestamp(at)
        }
        other => Value::String(other.into_relaxed_extjson().to_string()),
    })
}

pub fn to_document(record: &Record) -> Result<Document> {
    let mut document = Document::new();

    for (name, value) in record.iter() {
        document.insert(name, to_bson(value)?);
    }

    Ok(document)
}

pub fn to_record(document: Document) -> Result<Record> {
    let mut record = Record::with_capacity(document.len());

    for (name, value) in document {
        record.insert(name, from_bson(value)?);
    }

    Ok(record)
}
