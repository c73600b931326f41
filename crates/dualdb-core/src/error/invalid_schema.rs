use super::Error;

/// A model's descriptor table breaks an invariant, e.g. two primary keys.
#[derive(Debug)]
pub(super) struct InvalidSchemaError {
    message: Box<str>,
}

impl std::error::Error for InvalidSchemaError {}

impl core::fmt::Display for InvalidSchemaError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid schema: {}", self.message)
    }
}

impl Error {
    pub fn invalid_schema(message: impl Into<Box<str>>) -> Error {
        Error::from(super::ErrorKind::InvalidSchema(InvalidSchemaError {
            message: message.into(),
        }))
    }

    pub fn is_invalid_schema(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidSchema(_))
    }
}
