use super::FieldDescriptor;
use crate::{stmt::Value, Error, Result};

/// Validates and normalizes one value against its field's constraints.
///
/// Over-length strings are truncated to `max_length` characters rather than
/// rejected. Enforcing an already enforced value returns it unchanged.
pub fn enforce(field: &FieldDescriptor, value: Value) -> Result<Value> {
    match value {
        Value::Null if field.not_null => Err(Error::missing_required_field(field.name)),
        Value::Null => Ok(Value::Null),
        Value::String(mut s) => {
            if let Some(max) = field.max_length {
                if let Some((end, _)) = s.char_indices().nth(max) {
                    log::debug!("truncating `{}` to {max} characters", field.name);
                    s.truncate(end);
                }
            }
            Ok(Value::String(s))
        }
        value if field.max_length.is_some() => {
            Err(Error::type_mismatch(field.name, value.kind_name()))
        }
        value => Ok(value),
    }
}
