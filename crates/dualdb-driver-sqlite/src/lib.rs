mod value;
pub(crate) use value::Value;

use dualdb_core::{
    async_trait,
    driver::{Flavor, Relational},
    stmt::{self, Record},
    Error, Result,
};
use rusqlite::Connection;
use std::{
    path::{Path, PathBuf},
    sync::Mutex,
};
use url::Url;

#[derive(Debug)]
pub enum Sqlite {
    /// A database file. Every call opens its own connection.
    File(PathBuf),

    /// A private in-memory database. The single connection is the database,
    /// so calls are serialized through it.
    InMemory(Mutex<Connection>),
}

impl Sqlite {
    /// Create a new SQLite driver from a `sqlite:` connection URL. The path
    /// `:memory:` selects an in-memory database.
    pub fn connect(url: &str) -> Result<Self> {
        let parsed = Url::parse(url)
            .map_err(|err| Error::invalid_connection_url(format!("{url}: {err}")))?;

        if parsed.scheme() != "sqlite" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `sqlite` scheme; url={url}"
            )));
        }

        if parsed.path() == ":memory:" {
            Self::in_memory()
        } else {
            Ok(Self::open(parsed.path()))
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Result<Self> {
        let connection = Connection::open_in_memory().map_err(Error::driver)?;
        Ok(Self::InMemory(Mutex::new(connection)))
    }

    /// Use the SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }

    /// Runs a batch of `;`-separated statements, such as schema setup.
    pub fn execute_batch(&self, sql: &str) -> Result<()> {
        self.with_connection(|connection| connection.execute_batch(sql).map_err(Error::driver))
    }

    fn with_connection<R>(&self, f: impl FnOnce(&Connection) -> Result<R>) -> Result<R> {
        match self {
            Sqlite::File(path) => {
                log::debug!("opening sqlite connection; path={}", path.display());
                let connection = Connection::open(path).map_err(Error::driver)?;
                f(&connection)
            }
            Sqlite::InMemory(connection) => {
                let connection = connection
                    .lock()
                    .map_err(|_| dualdb_core::err!("sqlite connection mutex poisoned"))?;
                f(&connection)
            }
        }
    }
}

#[async_trait]
impl Relational for Sqlite {
    fn flavor(&self) -> Flavor {
        Flavor::Sqlite
    }

    async fn query(&self, sql: &str, params: &[stmt::Value]) -> Result<Vec<Record>> {
        self.with_connection(|connection| {
            let mut stmt = connection.prepare(sql).map_err(Error::driver)?;

            let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();

            let mut rows = stmt
                .query(rusqlite::params_from_iter(params.iter().map(Value::from)))
                .map_err(Error::driver)?;

            let mut ret = vec![];

            while let Some(row) = rows.next().map_err(Error::driver)? {
                let mut record = Record::with_capacity(columns.len());

                for (index, column) in columns.iter().enumerate() {
                    let value = row.get_ref(index).map_err(Error::driver)?;
                    record.insert(column.clone(), Value::from_sql(value));
                }

                ret.push(record);
            }

            Ok(ret)
        })
    }

    async fn execute(&self, sql: &str, params: &[stmt::Value]) -> Result<u64> {
        self.with_connection(|connection| {
            let count = connection
                .execute(sql, rusqlite::params_from_iter(params.iter().map(Value::from)))
                .map_err(Error::driver)?;

            Ok(count as u64)
        })
    }
}
