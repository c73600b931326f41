use super::Error;

#[derive(Debug)]
pub(super) struct InvalidConnectionUrlError {
    message: Box<str>,
}

impl std::error::Error for InvalidConnectionUrlError {}

impl core::fmt::Display for InvalidConnectionUrlError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid connection URL: {}", self.message)
    }
}

impl Error {
    pub fn invalid_connection_url(message: impl Into<Box<str>>) -> Error {
        Error::from(super::ErrorKind::InvalidConnectionUrl(
            InvalidConnectionUrlError {
                message: message.into(),
            },
        ))
    }

    pub fn is_invalid_connection_url(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidConnectionUrl(_))
    }
}
