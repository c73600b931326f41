use crate::{
    schema::{LegacyNames, ModelSchema},
    stmt::{Record, Value},
    Result,
};

/// A type that can be written to and read from either backend.
///
/// Usually implemented with `#[derive(Model)]`.
pub trait Model: Sized + Send + Sync + 'static {
    /// The static descriptor table for this type.
    fn schema() -> &'static ModelSchema;

    /// Builds a throwaway instance, used to reach [`LegacyNames`] when the
    /// type declares no name of its own.
    fn instantiate() -> Option<Self> {
        None
    }

    /// Instance-level name accessors, if the model has them.
    fn legacy_names(&self) -> Option<&dyn LegacyNames> {
        None
    }

    /// Current value of the field at `index` in [`ModelSchema::fields`].
    fn field(&self, index: usize) -> Value;

    /// Maps a relational row onto a new instance.
    fn load_row(record: Record) -> Result<Self>;

    /// Maps a document onto a new instance.
    fn load_document(record: Record) -> Result<Self>;
}
