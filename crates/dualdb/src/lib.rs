pub mod db;
pub use db::{Backend, Db};

mod engine;

mod model;
pub use model::Model;

mod primitive;
pub use primitive::Primitive;

pub use dualdb_core::{
    condition,
    driver::{self, BackendKind, DocumentStore, Flavor, Relational},
    schema::{self, LegacyNames},
    stmt::{self, Condition, Filter, ObjectId, Projection, Record, Value},
    ConstraintViolation, Error, Result,
};

pub use dualdb_macros::Model;

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{Model, Primitive};
    pub use dualdb_core::{
        schema::{Affinity, FieldDescriptor, LegacyNames, ModelSchema},
        stmt::{Record, Value},
        Result,
    };
    pub use std::{default::Default, option::Option};

    /// Takes `column` out of `record` and loads it as `T`.
    pub fn load_field<T: Primitive>(record: &mut Record, model: &str, column: &str) -> Result<T> {
        T::load(record.take(column)).map_err(|err| {
            err.context(dualdb_core::Error::from_args(format_args!(
                "loading `{model}.{column}`"
            )))
        })
    }
}
