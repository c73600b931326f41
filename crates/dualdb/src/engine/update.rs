use super::Target;
use crate::{
    db::Backend,
    schema::{enforce, resolve},
    stmt::{Condition, Record},
    Error, Model, Result,
};
use dualdb_sql::stmt::Update;

pub(crate) async fn update<M: Model>(
    backend: &Backend,
    model: &M,
    condition: Option<&Condition>,
) -> Result<u64> {
    let kind = backend.kind();
    let resolved = resolve(M::schema(), kind, model.legacy_names())?;

    let mut set = Record::new();

    for (index, field) in resolved.fields.iter().enumerate() {
        if field.primary_key || !field.is_writable(kind) {
            continue;
        }

        let value = enforce(field, model.field(index))?;

        if !value.is_null() {
            set.insert(field.storage_name(), value);
        }
    }

    if set.is_empty() {
        return Err(Error::no_updatable_fields(M::schema().name));
    }

    let target = Target::new(model, &resolved, kind, condition)?;

    match backend {
        Backend::Relational(driver) => {
            let stmt = Update {
                table: resolved.name,
                assignments: set.into_iter().collect(),
                filter: target.to_where()?,
            };

            super::execute(driver.as_ref(), &stmt.into()).await
        }
        Backend::Document(store) => {
            let filter = target.to_filter()?;

            log::debug!("update_many; collection={}; filter={filter}", resolved.name);
            log::trace!("set={set:?}");

            store.update_many(&resolved.name, &filter, set).await
        }
    }
}
