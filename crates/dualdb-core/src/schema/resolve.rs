use super::{FieldDescriptor, LegacyNames, ModelSchema};
use crate::{driver::BackendKind, Error, Result};

/// The output of metadata resolution for one model on one backend.
#[derive(Debug, Clone)]
pub struct Resolved {
    /// Table or collection name
    pub name: String,

    /// Every field in declaration order
    pub fields: &'static [FieldDescriptor],

    /// Index of the primary key within `fields`
    pub primary_key: Option<usize>,
}

/// Resolves the descriptor list and the table or collection name of a model.
///
/// The name declared on the type wins; otherwise the legacy accessor is asked.
pub fn resolve(
    schema: &'static ModelSchema,
    backend: BackendKind,
    legacy: Option<&dyn LegacyNames>,
) -> Result<Resolved> {
    let primary_key = schema.primary_key()?.map(|(index, _)| index);

    let name = match schema.static_name(backend) {
        Some(name) => name.to_string(),
        None => legacy
            .and_then(|legacy| match backend {
                BackendKind::Relational => legacy.table_name(),
                BackendKind::Document => legacy.collection_name(),
            })
            .ok_or_else(|| Error::missing_name(schema.name, backend.name_kind()))?,
    };

    Ok(Resolved {
        name,
        fields: schema.fields,
        primary_key,
    })
}

impl Resolved {
    pub fn primary_key(&self) -> Option<(usize, &'static FieldDescriptor)> {
        self.primary_key.map(|index| (index, &self.fields[index]))
    }
}
