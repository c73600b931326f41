use super::Error;

#[derive(Debug)]
pub(super) struct UnsupportedOperatorError {
    operator: Box<str>,
}

impl std::error::Error for UnsupportedOperatorError {}

impl core::fmt::Display for UnsupportedOperatorError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unsupported condition operator `{}`", self.operator)
    }
}

impl Error {
    pub fn unsupported_operator(operator: impl Into<Box<str>>) -> Error {
        Error::from(super::ErrorKind::UnsupportedOperator(
            UnsupportedOperatorError {
                operator: operator.into(),
            },
        ))
    }

    pub fn is_unsupported_operator(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedOperator(_))
    }
}
