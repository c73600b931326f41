mod delete;
pub(crate) use delete::delete;

mod insert;
pub(crate) use insert::insert;

mod retrieve;
pub(crate) use retrieve::retrieve;

mod target;
use target::Target;

mod update;
pub(crate) use update::update;

use crate::{driver::Relational, stmt::Record, Result};
use dualdb_sql::{Serializer, Statement};

/// Serializes `stmt` in the driver's flavor and runs it as a mutation.
async fn execute(driver: &dyn Relational, stmt: &Statement) -> Result<u64> {
    let (sql, params) = serialize(driver, stmt);
    driver.execute(&sql, &params).await
}

/// Serializes `stmt` in the driver's flavor and runs it as a query.
async fn query(driver: &dyn Relational, stmt: &Statement) -> Result<Vec<Record>> {
    let (sql, params) = serialize(driver, stmt);
    driver.query(&sql, &params).await
}

fn serialize(driver: &dyn Relational, stmt: &Statement) -> (String, Vec<crate::Value>) {
    let mut params = vec![];
    let sql = Serializer::new(driver.flavor()).serialize(stmt, &mut params);

    log::debug!("{sql}");
    log::trace!("params={params:?}");

    (sql, params)
}
