use crate::{
    async_trait,
    stmt::{Filter, Projection, Record, Value},
    Result,
};
use std::fmt::{self, Debug};

/// The two kinds of backend an operation can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    Relational,
    Document,
}

impl BackendKind {
    pub fn is_relational(self) -> bool {
        matches!(self, Self::Relational)
    }

    pub fn is_document(self) -> bool {
        matches!(self, Self::Document)
    }

    /// What a model's storage location is called on this backend.
    pub fn name_kind(self) -> &'static str {
        match self {
            Self::Relational => "table",
            Self::Document => "collection",
        }
    }
}

/// The SQL dialect a relational driver speaks. Decides placeholder and
/// identifier syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    Mysql,
    Postgresql,
    Sqlite,
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Flavor::Mysql => "mysql",
            Flavor::Postgresql => "postgresql",
            Flavor::Sqlite => "sqlite",
        })
    }
}

/// Port to a relational database. Each call acquires a connection, runs one
/// statement with positionally bound parameters and releases the connection.
#[async_trait]
pub trait Relational: Debug + Send + Sync + 'static {
    fn flavor(&self) -> Flavor;

    /// Runs a query, returning every row with its columns in select order.
    async fn query(&self, sql: &str, params: &[Value]) -> Result<Vec<Record>>;

    /// Runs a mutation, returning the affected row count.
    async fn execute(&self, sql: &str, params: &[Value]) -> Result<u64>;
}

/// Port to a document store.
#[async_trait]
pub trait DocumentStore: Debug + Send + Sync + 'static {
    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        projection: Option<&Projection>,
    ) -> Result<Vec<Record>>;

    /// Returns `true` if the store acknowledged the write.
    async fn insert_one(&self, collection: &str, document: Record) -> Result<bool>;

    /// Applies `set` to every matching document, returning the modified count.
    async fn update_many(&self, collection: &str, filter: &Filter, set: Record) -> Result<u64>;

    async fn delete_many(&self, collection: &str, filter: &Filter) -> Result<u64>;
}
