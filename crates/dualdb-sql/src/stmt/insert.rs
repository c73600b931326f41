use dualdb_core::stmt::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub table: String,

    /// Column names paired positionally with `values`
    pub columns: Vec<String>,

    pub values: Vec<Value>,
}

impl Insert {
    pub fn new(table: impl Into<String>) -> Insert {
        Insert {
            table: table.into(),
            columns: vec![],
            values: vec![],
        }
    }

    pub fn push(&mut self, column: impl Into<String>, value: Value) {
        self.columns.push(column.into());
        self.values.push(value);
    }
}
