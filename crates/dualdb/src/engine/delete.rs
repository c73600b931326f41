use super::Target;
use crate::{db::Backend, schema::resolve, stmt::Condition, Model, Result};
use dualdb_sql::stmt::Delete;

pub(crate) async fn delete<M: Model>(
    backend: &Backend,
    model: &M,
    condition: Option<&Condition>,
) -> Result<u64> {
    let kind = backend.kind();
    let resolved = resolve(M::schema(), kind, model.legacy_names())?;
    let target = Target::new(model, &resolved, kind, condition)?;

    match backend {
        Backend::Relational(driver) => {
            let stmt = Delete {
                table: resolved.name,
                filter: target.to_where()?,
            };

            super::execute(driver.as_ref(), &stmt.into()).await
        }
        Backend::Document(store) => {
            let filter = target.to_filter()?;

            log::debug!("delete_many; collection={}; filter={filter}", resolved.name);

            store.delete_many(&resolved.name, &filter).await
        }
    }
}
