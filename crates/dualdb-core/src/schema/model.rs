use super::FieldDescriptor;
use crate::{driver::BackendKind, Error, Result};

/// The static descriptor table generated for a model type.
#[derive(Debug)]
pub struct ModelSchema {
    /// The Rust type name, used in error messages
    pub name: &'static str,

    /// Explicit relational table name
    pub table: Option<&'static str>,

    /// Explicit document collection name
    pub collection: Option<&'static str>,

    /// Names not declared here are resolved through [`LegacyNames`].
    pub legacy_names: bool,

    /// Fields in declaration order
    pub fields: &'static [FieldDescriptor],
}

/// Instance-level name accessors for models that compute their table or
/// collection name at runtime.
pub trait LegacyNames {
    fn table_name(&self) -> Option<String> {
        None
    }

    fn collection_name(&self) -> Option<String> {
        None
    }
}

impl ModelSchema {
    /// The name declared on the type for `backend`, if any.
    pub fn static_name(&self, backend: BackendKind) -> Option<&'static str> {
        match backend {
            BackendKind::Relational => self.table,
            BackendKind::Document => self.collection,
        }
    }

    /// Returns the index and descriptor of the primary key, if the model has
    /// one.
    pub fn primary_key(&self) -> Result<Option<(usize, &'static FieldDescriptor)>> {
        let mut keys = self
            .fields
            .iter()
            .enumerate()
            .filter(|(_, field)| field.primary_key);

        let pk = keys.next();

        if let Some((_, extra)) = keys.next() {
            return Err(Error::invalid_schema(format!(
                "model `{}` declares more than one primary key (`{}`)",
                self.name, extra.name
            )));
        }

        Ok(pk)
    }

    pub fn field(&self, name: &str) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Storage names of every field `backend` stores, in declaration order.
    pub fn columns(&self, backend: BackendKind) -> impl Iterator<Item = &'static str> + '_ {
        self.fields
            .iter()
            .filter(move |field| field.applies_to(backend))
            .map(FieldDescriptor::storage_name)
    }
}
