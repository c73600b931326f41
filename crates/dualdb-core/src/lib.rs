#[macro_use]
mod macros;

pub mod driver;
pub use driver::{BackendKind, DocumentStore, Flavor, Relational};

mod error;
pub use error::{ConstraintViolation, Error, IntoError};

pub mod schema;
pub use schema::{FieldDescriptor, LegacyNames, ModelSchema};

pub mod stmt;

/// A Result type alias that uses dualdb's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
