use dualdb_core::stmt::{Condition, Value};

/// The `WHERE` clause of an update, delete or select.
#[derive(Debug, Clone, PartialEq)]
pub enum Where {
    /// Caller-supplied condition text, embedded verbatim. Each `?` in the text
    /// binds the next parameter.
    Condition { text: String, params: Vec<Value> },

    /// `<column> = <value>`, used for primary-key targeting.
    Eq { column: String, value: Value },
}

impl Where {
    /// Builds a verbatim clause from a condition after checking its arity.
    pub fn condition(condition: &Condition) -> dualdb_core::Result<Where> {
        let text = condition.relational_clause()?;

        Ok(Where::Condition {
            text: text.to_string(),
            params: condition.values().to_vec(),
        })
    }

    pub fn eq(column: impl Into<String>, value: impl Into<Value>) -> Where {
        Where::Eq {
            column: column.into(),
            value: value.into(),
        }
    }
}
