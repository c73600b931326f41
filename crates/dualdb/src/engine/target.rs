use crate::{
    driver::BackendKind,
    schema::Resolved,
    stmt::{Condition, Filter, Value},
    Error, Model, Result,
};
use dualdb_sql::stmt::Where;

/// The records an update or delete applies to.
pub(super) enum Target<'a> {
    /// Caller-supplied condition
    Condition(&'a Condition),

    /// The model's primary key
    Key { column: &'static str, value: Value },
}

impl<'a> Target<'a> {
    /// A non-blank condition wins; otherwise the model's primary key must be
    /// present, stored on `backend` and set.
    pub(super) fn new<M: Model>(
        model: &M,
        resolved: &Resolved,
        backend: BackendKind,
        condition: Option<&'a Condition>,
    ) -> Result<Target<'a>> {
        if let Some(condition) = condition.filter(|condition| !condition.is_blank()) {
            return Ok(Target::Condition(condition));
        }

        let model_name = M::schema().name;

        let Some((index, pk)) = resolved.primary_key() else {
            return Err(Error::missing_target_key(
                model_name,
                "model has no primary key and no condition was given",
            ));
        };

        if !pk.applies_to(backend) {
            return Err(Error::missing_target_key(
                model_name,
                format!(
                    "primary key `{}` is not stored in a {}",
                    pk.name,
                    backend.name_kind()
                ),
            ));
        }

        let value = model.field(index);

        if value.is_null() {
            return Err(Error::missing_target_key(
                model_name,
                format!("primary key `{}` is not set", pk.name),
            ));
        }

        Ok(Target::Key {
            column: pk.storage_name(),
            value,
        })
    }

    pub(super) fn to_where(&self) -> Result<Where> {
        match self {
            Target::Condition(condition) => Where::condition(condition),
            Target::Key { column, value } => Ok(Where::eq(*column, value.clone())),
        }
    }

    pub(super) fn to_filter(&self) -> Result<Filter> {
        match self {
            Target::Condition(condition) => condition.to_filter(),
            Target::Key { column, value } => Ok(Filter::eq(*column, value.clone())),
        }
    }
}
