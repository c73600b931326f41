mod delete;
pub use delete::Delete;

mod filter;
pub use filter::Where;

mod insert;
pub use insert::Insert;

mod select;
pub use select::Select;

mod update;
pub use update::Update;

/// A single SQL statement produced by one executor call.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Delete(Delete),
    Insert(Insert),
    Select(Select),
    Update(Update),
}

impl Statement {
    pub fn is_query(&self) -> bool {
        matches!(self, Statement::Select(_))
    }
}

impl From<Delete> for Statement {
    fn from(value: Delete) -> Self {
        Statement::Delete(value)
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Statement::Insert(value)
    }
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Statement::Select(value)
    }
}

impl From<Update> for Statement {
    fn from(value: Update) -> Self {
        Statement::Update(value)
    }
}
