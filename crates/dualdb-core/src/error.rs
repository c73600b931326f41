mod adhoc;
mod arity_mismatch;
mod constraint_violation;
mod driver;
mod invalid_connection_url;
mod invalid_schema;
mod missing_default_constructor;
mod missing_name;
mod missing_target_key;
mod no_updatable_fields;
mod type_conversion;
mod unsupported_operator;

use adhoc::AdhocError;
use arity_mismatch::ArityMismatchError;
use constraint_violation::ConstraintViolationError;
use driver::DriverError;
use invalid_connection_url::InvalidConnectionUrlError;
use invalid_schema::InvalidSchemaError;
use missing_default_constructor::MissingDefaultConstructorError;
use missing_name::MissingNameError;
use missing_target_key::MissingTargetKeyError;
use no_updatable_fields::NoUpdatableFieldsError;
use std::sync::Arc;
use type_conversion::TypeConversionError;
use unsupported_operator::UnsupportedOperatorError;

pub use constraint_violation::ConstraintViolation;

/// An error that can occur in dualdb.
///
/// Every kind except driver errors is raised before the backend is contacted.
#[derive(Clone)]
pub struct Error {
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context is shown first,
    /// followed by earlier context, ending with the root cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let mut err = consequent;
        if err.inner.is_none() {
            err = Error::from(ErrorKind::Unknown);
        }
        let inner = err.inner.as_mut().unwrap();
        assert!(
            inner.cause.is_none(),
            "consequent error must not already have a cause"
        );
        Arc::get_mut(inner).unwrap().cause = Some(self);
        err
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.as_ref().and_then(|inner| inner.cause.as_ref())?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }

    /// Returns the root cause of this error.
    pub fn root(&self) -> &Error {
        self.chain().last().unwrap_or(self)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Driver(err) => Some(err),
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f.debug_struct("Error").field("kind", &"None").finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    ArityMismatch(ArityMismatchError),
    ConstraintViolation(ConstraintViolationError),
    Driver(DriverError),
    InvalidConnectionUrl(InvalidConnectionUrlError),
    InvalidSchema(InvalidSchemaError),
    MissingDefaultConstructor(MissingDefaultConstructorError),
    MissingName(MissingNameError),
    MissingTargetKey(MissingTargetKeyError),
    NoUpdatableFields(NoUpdatableFieldsError),
    TypeConversion(TypeConversionError),
    UnsupportedOperator(UnsupportedOperatorError),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            ArityMismatch(err) => core::fmt::Display::fmt(err, f),
            ConstraintViolation(err) => core::fmt::Display::fmt(err, f),
            Driver(err) => core::fmt::Display::fmt(err, f),
            InvalidConnectionUrl(err) => core::fmt::Display::fmt(err, f),
            InvalidSchema(err) => core::fmt::Display::fmt(err, f),
            MissingDefaultConstructor(err) => core::fmt::Display::fmt(err, f),
            MissingName(err) => core::fmt::Display::fmt(err, f),
            MissingTargetKey(err) => core::fmt::Display::fmt(err, f),
            NoUpdatableFields(err) => core::fmt::Display::fmt(err, f),
            TypeConversion(err) => core::fmt::Display::fmt(err, f),
            UnsupportedOperator(err) => core::fmt::Display::fmt(err, f),
            Unknown => f.write_str("unknown dualdb error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Some(Arc::new(ErrorInner { kind, cause: None })),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}
