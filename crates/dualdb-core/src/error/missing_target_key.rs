use super::Error;

/// An update or delete has neither a condition nor a usable primary key.
#[derive(Debug)]
pub(super) struct MissingTargetKeyError {
    model: Box<str>,
    reason: Box<str>,
}

impl std::error::Error for MissingTargetKeyError {}

impl core::fmt::Display for MissingTargetKeyError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "missing target key for `{}`: {}", self.model, self.reason)
    }
}

impl Error {
    pub fn missing_target_key(model: impl Into<Box<str>>, reason: impl Into<Box<str>>) -> Error {
        Error::from(super::ErrorKind::MissingTargetKey(MissingTargetKeyError {
            model: model.into(),
            reason: reason.into(),
        }))
    }

    pub fn is_missing_target_key(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingTargetKey(_))
    }
}
