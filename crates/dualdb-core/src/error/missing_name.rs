use super::Error;

/// Neither an explicit name nor a legacy accessor names the model's
/// table or collection.
#[derive(Debug)]
pub(super) struct MissingNameError {
    model: Box<str>,
    what: &'static str,
}

impl std::error::Error for MissingNameError {}

impl core::fmt::Display for MissingNameError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "model `{}` does not declare a {} name", self.model, self.what)
    }
}

impl Error {
    /// `what` is either `"table"` or `"collection"`.
    pub fn missing_name(model: impl Into<Box<str>>, what: &'static str) -> Error {
        Error::from(super::ErrorKind::MissingName(MissingNameError {
            model: model.into(),
            what,
        }))
    }

    pub fn is_missing_name(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingName(_))
    }
}
