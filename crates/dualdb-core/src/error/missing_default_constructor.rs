use super::Error;

#[derive(Debug)]
pub(super) struct MissingDefaultConstructorError {
    model: Box<str>,
}

impl std::error::Error for MissingDefaultConstructorError {}

impl core::fmt::Display for MissingDefaultConstructorError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "model `{}` has no default constructor to resolve its name from",
            self.model
        )
    }
}

impl Error {
    pub fn missing_default_constructor(model: impl Into<Box<str>>) -> Error {
        Error::from(super::ErrorKind::MissingDefaultConstructor(
            MissingDefaultConstructorError {
                model: model.into(),
            },
        ))
    }

    pub fn is_missing_default_constructor(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingDefaultConstructor(_))
    }
}
