use super::Error;

/// A condition declares more `?` placeholders than parameters were supplied
/// for, or fewer.
#[derive(Debug)]
pub(super) struct ArityMismatchError {
    expected: usize,
    actual: usize,
}

impl std::error::Error for ArityMismatchError {}

impl core::fmt::Display for ArityMismatchError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "condition expects {} parameter(s) but {} were supplied",
            self.expected, self.actual
        )
    }
}

impl Error {
    pub fn arity_mismatch(expected: usize, actual: usize) -> Error {
        Error::from(super::ErrorKind::ArityMismatch(ArityMismatchError {
            expected,
            actual,
        }))
    }

    pub fn is_arity_mismatch(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ArityMismatch(_))
    }
}
