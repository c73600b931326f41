use super::{Backend, Db};
use crate::{Error, Result};

use url::Url;

impl Db {
    /// Connects to the database named by `url`.
    ///
    /// Supported schemes are `sqlite:`, `mysql:` and `mongodb:`, each behind
    /// the cargo feature of the same name.
    pub async fn connect(url: &str) -> Result<Db> {
        let parsed = Url::parse(url)
            .map_err(|err| Error::invalid_connection_url(format!("{url}: {err}")))?;

        let backend = match parsed.scheme() {
            "sqlite" => connect_sqlite(url)?,
            "mysql" => connect_mysql(url)?,
            "mongodb" | "mongodb+srv" => connect_mongodb(url).await?,
            scheme => {
                return Err(Error::invalid_connection_url(format!(
                    "unsupported database; scheme={scheme}; url={url}"
                )))
            }
        };

        log::debug!("connected to {} backend", parsed.scheme());
        Ok(Db::from_backend(backend))
    }
}

#[cfg(feature = "sqlite")]
fn connect_sqlite(url: &str) -> Result<Backend> {
    let driver = dualdb_driver_sqlite::Sqlite::connect(url)?;
    Ok(Backend::Relational(Box::new(driver)))
}

#[cfg(not(feature = "sqlite"))]
fn connect_sqlite(_url: &str) -> Result<Backend> {
    Err(Error::invalid_connection_url("`sqlite` feature not enabled"))
}

#[cfg(feature = "mysql")]
fn connect_mysql(url: &str) -> Result<Backend> {
    let driver = dualdb_driver_mysql::MySQL::connect(url)?;
    Ok(Backend::Relational(Box::new(driver)))
}

#[cfg(not(feature = "mysql"))]
fn connect_mysql(_url: &str) -> Result<Backend> {
    Err(Error::invalid_connection_url("`mysql` feature not enabled"))
}

#[cfg(feature = "mongodb")]
async fn connect_mongodb(url: &str) -> Result<Backend> {
    let driver = dualdb_driver_mongodb::MongoDb::connect(url).await?;
    Ok(Backend::Document(Box::new(driver)))
}

#[cfg(not(feature = "mongodb"))]
async fn connect_mongodb(_url: &str) -> Result<Backend> {
    Err(Error::invalid_connection_url("`mongodb` feature not enabled"))
}
