use super::Error;

#[derive(Debug)]
pub(super) struct NoUpdatableFieldsError {
    model: Box<str>,
}

impl std::error::Error for NoUpdatableFieldsError {}

impl core::fmt::Display for NoUpdatableFieldsError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "update of `{}` has no fields to set", self.model)
    }
}

impl Error {
    pub fn no_updatable_fields(model: impl Into<Box<str>>) -> Error {
        Error::from(super::ErrorKind::NoUpdatableFields(NoUpdatableFieldsError {
            model: model.into(),
        }))
    }

    pub fn is_no_updatable_fields(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::NoUpdatableFields(_))
    }
}
