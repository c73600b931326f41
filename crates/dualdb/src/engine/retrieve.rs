use crate::{
    db::Backend,
    schema::resolve,
    stmt::{Condition, Filter, Projection},
    Error, Model, Result,
};
use dualdb_sql::stmt::{Select, Where};

pub(crate) async fn retrieve<M: Model>(
    backend: &Backend,
    condition: Option<&Condition>,
    projection: Option<&Projection>,
) -> Result<Vec<M>> {
    let schema = M::schema();
    let kind = backend.kind();

    // Without a declared name, a throwaway instance supplies the legacy
    // accessor.
    let instance = match schema.static_name(kind) {
        None if schema.legacy_names => Some(
            M::instantiate().ok_or_else(|| Error::missing_default_constructor(schema.name))?,
        ),
        _ => None,
    };

    let resolved = resolve(
        schema,
        kind,
        instance.as_ref().and_then(|instance| instance.legacy_names()),
    )?;

    let condition = condition.filter(|condition| !condition.is_blank());

    match backend {
        Backend::Relational(driver) => {
            let stmt = Select {
                columns: projection.map(|projection| projection.columns(schema.columns(kind))),
                filter: condition.map(Where::condition).transpose()?,
                table: resolved.name,
            };

            let rows = super::query(driver.as_ref(), &stmt.into()).await?;
            rows.into_iter().map(M::load_row).collect()
        }
        Backend::Document(store) => {
            let filter = match condition {
                Some(condition) => condition.to_filter()?,
                None => Filter::all(),
            };

            log::debug!("find; collection={}; filter={filter}", resolved.name);

            let documents = store.find(&resolved.name, &filter, projection).await?;
            documents.into_iter().map(M::load_document).collect()
        }
    }
}
