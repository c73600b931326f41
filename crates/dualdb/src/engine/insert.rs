use crate::{
    db::Backend,
    schema::{enforce, resolve},
    stmt::Record,
    Model, Result,
};
use dualdb_sql::stmt::Insert;

pub(crate) async fn insert<M: Model>(backend: &Backend, model: &M) -> Result<u64> {
    let kind = backend.kind();
    let resolved = resolve(M::schema(), kind, model.legacy_names())?;

    let mut record = Record::with_capacity(resolved.fields.len());

    for (index, field) in resolved.fields.iter().enumerate() {
        if !field.is_writable(kind) {
            continue;
        }

        let value = enforce(field, model.field(index))?;
        record.insert(field.storage_name(), value);
    }

    match backend {
        Backend::Relational(driver) => {
            let mut stmt = Insert::new(resolved.name);

            for (column, value) in record {
                stmt.push(column, value);
            }

            super::execute(driver.as_ref(), &stmt.into()).await
        }
        Backend::Document(store) => {
            log::debug!("insert_one; collection={}", resolved.name);
            log::trace!("document={record:?}");

            let acknowledged = store.insert_one(&resolved.name, record).await?;
            Ok(u64::from(acknowledged))
        }
    }
}
