use super::Error;

/// The reason a value was rejected by a field's constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintViolation {
    /// A not-null field has no value.
    MissingRequiredField,

    /// A max-length constraint was declared on a field holding a non-string value.
    TypeMismatch,
}

#[derive(Debug)]
pub(super) struct ConstraintViolationError {
    field: Box<str>,
    kind: ConstraintViolation,
    found: Option<Box<str>>,
}

impl std::error::Error for ConstraintViolationError {}

impl core::fmt::Display for ConstraintViolationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "constraint violation on field `{}`: ", self.field)?;

        match self.kind {
            ConstraintViolation::MissingRequiredField => {
                f.write_str("missing value for not-null field")
            }
            ConstraintViolation::TypeMismatch => {
                f.write_str("max length declared on a non-string value")?;
                if let Some(found) = &self.found {
                    write!(f, " (found {found})")?;
                }
                Ok(())
            }
        }
    }
}

impl Error {
    pub fn missing_required_field(field: impl Into<Box<str>>) -> Error {
        Error::from(super::ErrorKind::ConstraintViolation(
            ConstraintViolationError {
                field: field.into(),
                kind: ConstraintViolation::MissingRequiredField,
                found: None,
            },
        ))
    }

    pub fn type_mismatch(field: impl Into<Box<str>>, found: impl Into<Box<str>>) -> Error {
        Error::from(super::ErrorKind::ConstraintViolation(
            ConstraintViolationError {
                field: field.into(),
                kind: ConstraintViolation::TypeMismatch,
                found: Some(found.into()),
            },
        ))
    }

    pub fn is_constraint_violation(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ConstraintViolation(_))
    }

    /// Returns the constraint violation kind, if this is a constraint violation.
    pub fn constraint_violation(&self) -> Option<ConstraintViolation> {
        match self.kind() {
            super::ErrorKind::ConstraintViolation(err) => Some(err.kind),
            _ => None,
        }
    }
}
