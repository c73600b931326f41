use crate::{stmt::Value, Error, Result};
use std::fmt;

/// The document store's 12-byte object identifier, kept in its 24 digit hex
/// form.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId {
    hex: String,
}

impl ObjectId {
    /// Parses a 24 character hexadecimal string.
    pub fn parse(src: &str) -> Result<ObjectId> {
        if src.len() != 24 || !src.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::type_conversion(Value::from(src), "ObjectId"));
        }

        Ok(ObjectId {
            hex: src.to_ascii_lowercase(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.hex
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectId(\"{}\")", self.hex)
    }
}

impl std::str::FromStr for ObjectId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ObjectId::parse(s)
    }
}
