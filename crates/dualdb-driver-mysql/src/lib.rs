mod value;
pub(crate) use value::Value;

use dualdb_core::{
    async_trait,
    driver::{Flavor, Relational},
    stmt::{self, Record},
    Error, Result,
};
use mysql_async::{prelude::Queryable, Conn, Pool};
use url::Url;

#[derive(Debug)]
pub struct MySQL {
    pool: Pool,
}

impl MySQL {
    /// Create a new MySQL driver from a `mysql://` connection URL.
    ///
    /// No connection is opened until the first statement runs.
    pub fn connect(url: &str) -> Result<Self> {
        let parsed = Url::parse(url)
            .map_err(|err| Error::invalid_connection_url(format!("{url}: {err}")))?;

        if parsed.scheme() != "mysql" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `mysql` scheme; url={url}"
            )));
        }

        if parsed.host_str().is_none() {
            return Err(Error::invalid_connection_url(format!(
                "missing host in connection URL; url={url}"
            )));
        }

        if parsed.path().trim_start_matches('/').is_empty() {
            return Err(Error::invalid_connection_url(format!(
                "no database specified - missing path in connection URL; url={url}"
            )));
        }

        let opts = mysql_async::Opts::from_url(parsed.as_ref())
            .map_err(|err| Error::invalid_connection_url(err.to_string()))?;
        let opts = mysql_async::OptsBuilder::from_opts(opts)
            .client_found_rows(true)
            .init(vec!["SET time_zone = '+00:00'"]);

        Ok(Self {
            pool: Pool::new(opts),
        })
    }

    async fn conn(&self) -> Result<Conn> {
        log::debug!("checking out mysql connection");
        self.pool.get_conn().await.map_err(Error::driver)
    }
}

impl From<Pool> for MySQL {
    fn from(pool: Pool) -> Self {
        Self { pool }
    }
}

fn positional(params: &[stmt::Value]) -> mysql_async::Params {
    if params.is_empty() {
        mysql_async::Params::Empty
    } else {
        mysql_async::Params::Positional(params.iter().map(Value::to_mysql).collect())
    }
}

#[async_trait]
impl Relational for MySQL {
    fn flavor(&self) -> Flavor {
        Flavor::Mysql
    }

    async fn query(&self, sql: &str, params: &[stmt::Value]) -> Result<Vec<Record>> {
        let mut conn = self.conn().await?;

        let rows: Vec<mysql_async::Row> = conn
            .exec(sql, positional(params))
            .await
            .map_err(Error::driver)?;

        let mut ret = Vec::with_capacity(rows.len());

        for mut row in rows {
            let columns = row.columns();
            let mut record = Record::with_capacity(columns.len());

            for (index, column) in columns.iter().enumerate() {
                let value = row.take(index).unwrap_or(mysql_async::Value::NULL);
                record.insert(column.name_str().into_owned(), Value::from_sql(value, column));
            }

            ret.push(record);
        }

        Ok(ret)
    }

    async fn execute(&self, sql: &str, params: &[stmt::Value]) -> Result<u64> {
        let mut conn = self.conn().await?;

        let result = conn
            .exec_iter(sql, positional(params))
            .await
            .map_err(Error::driver)?;
        let count = result.affected_rows();
        result.drop_result().await.map_err(Error::driver)?;

        Ok(count)
    }
}
