use super::Where;

#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    pub table: String,

    /// Selected columns; `None` selects `*`.
    pub columns: Option<Vec<String>>,

    pub filter: Option<Where>,
}

impl Select {
    pub fn all(table: impl Into<String>) -> Select {
        Select {
            table: table.into(),
            columns: None,
            filter: None,
        }
    }
}
