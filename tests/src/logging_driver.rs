use crate::exec_log::{DriverOp, ExecLog};
use dualdb::{
    driver::{DocumentStore, Flavor, Relational},
    stmt::{Filter, Projection, Record, Value},
    Result,
};
use dualdb_core::async_trait;
use std::sync::{Arc, Mutex};

/// A relational driver wrapper that logs every call before forwarding it.
#[derive(Debug)]
pub struct LoggingRelational {
    inner: Box<dyn Relational>,
    log: ExecLog,
}

impl LoggingRelational {
    pub fn new(driver: impl Relational) -> Self {
        Self {
            inner: Box::new(driver),
            log: ExecLog::new(Arc::new(Mutex::new(Vec::new()))),
        }
    }

    /// Get a handle to access the operations log
    pub fn exec_log(&self) -> ExecLog {
        self.log.clone()
    }
}

#[async_trait]
impl Relational for LoggingRelational {
    fn flavor(&self) -> Flavor {
        self.inner.flavor()
    }

    async fn query(&self, sql: &str, params: &[Value]) -> Result<Vec<Record>> {
        self.log.push(DriverOp::Query {
            sql: sql.to_string(),
            params: params.to_vec(),
        });
        self.inner.query(sql, params).await
    }

    async fn execute(&self, sql: &str, params: &[Value]) -> Result<u64> {
        self.log.push(DriverOp::Execute {
            sql: sql.to_string(),
            params: params.to_vec(),
        });
        self.inner.execute(sql, params).await
    }
}

/// A document store wrapper that logs every call before forwarding it.
#[derive(Debug)]
pub struct LoggingDocument {
    inner: Box<dyn DocumentStore>,
    log: ExecLog,
}

impl LoggingDocument {
    pub fn new(store: impl DocumentStore) -> Self {
        Self {
            inner: Box::new(store),
            log: ExecLog::new(Arc::new(Mutex::new(Vec::new()))),
        }
    }

    /// Get a handle to access the operations log
    pub fn exec_log(&self) -> ExecLog {
        self.log.clone()
    }
}

#[async_trait]
impl DocumentStore for LoggingDocument {
    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        projection: Option<&Projection>,
    ) -> Result<Vec<Record>> {
        self.log.push(DriverOp::Find {
            collection: collection.to_string(),
            filter: filter.clone(),
            projection: projection.cloned(),
        });
        self.inner.find(collection, filter, projection).await
    }

    async fn insert_one(&self, collection: &str, document: Record) -> Result<bool> {
        self.log.push(DriverOp::InsertOne {
            collection: collection.to_string(),
            document: document.clone(),
        });
        self.inner.insert_one(collection, document).await
    }

    async fn update_many(&self, collection: &str, filter: &Filter, set: Record) -> Result<u64> {
        self.log.push(DriverOp::UpdateMany {
            collection: collection.to_string(),
            filter: filter.clone(),
            set: set.clone(),
        });
        self.inner.update_many(collection, filter, set).await
    }

    async fn delete_many(&self, collection: &str, filter: &Filter) -> Result<u64> {
        self.log.push(DriverOp::DeleteMany {
            collection: collection.to_string(),
            filter: filter.clone(),
        });
        self.inner.delete_many(collection, filter).await
    }
}
