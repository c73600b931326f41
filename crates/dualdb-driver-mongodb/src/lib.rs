mod filter;
mod value;

use dualdb_core::{
    async_trait,
    driver::DocumentStore,
    stmt::{Filter, Projection, Record},
    Error, Result,
};
use futures::TryStreamExt;
use mongodb::{Client, Database};
use url::Url;

#[derive(Debug)]
pub struct MongoDb {
    client: Client,
    database: Database,
}

impl MongoDb {
    pub fn new(client: Client, database: Database) -> Self {
        Self { client, database }
    }

    /// Connects to the deployment named by a `mongodb://` URL. The URL path
    /// selects the database.
    pub async fn connect(url: &str) -> Result<Self> {
        let parsed = Url::parse(url)
            .map_err(|err| Error::invalid_connection_url(format!("{url}: {err}")))?;

        if !matches!(parsed.scheme(), "mongodb" | "mongodb+srv") {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `mongodb` scheme; url={url}"
            )));
        }

        let db_name = parsed.path().trim_start_matches('/');

        if db_name.is_empty() {
            return Err(Error::invalid_connection_url(format!(
                "no database specified - missing path in connection URL; url={url}"
            )));
        }

        let client = Client::with_uri_str(url).await.map_err(Error::driver)?;
        let database = client.database(db_name);

        Ok(Self { client, database })
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    fn collection(&self, name: &str) -> mongodb::Collection<bson::Document> {
        log::debug!("using mongodb collection; db={}; collection={name}", self.database.name());
        self.database.collection(name)
    }
}

#[async_trait]
impl DocumentStore for MongoDb {
    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        projection: Option<&Projection>,
    ) -> Result<Vec<Record>> {
        let coll = self.collection(collection);
        let mut find = coll.find(filter::to_document(filter)?);

        if let Some(projection) = projection {
            find = find.projection(filter::projection_document(projection));
        }

        let documents: Vec<bson::Document> = find
            .await
            .map_err(Error::driver)?
            .try_collect()
            .await
            .map_err(Error::driver)?;

        documents.into_iter().map(value::to_record).collect()
    }

    async fn insert_one(&self, collection: &str, document: Record) -> Result<bool> {
        self.collection(collection)
            .insert_one(value::to_document(&document)?)
            .await
            .map_err(Error::driver)?;

        Ok(true)
    }

    async fn update_many(&self, collection: &str, filter: &Filter, set: Record) -> Result<u64> {
        let update = bson::doc! { "$set": value::to_document(&set)? };

        let result = self
            .collection(collection)
            .update_many(filter::to_document(filter)?, update)
            .await
            .map_err(Error::driver)?;

        Ok(result.modified_count)
    }

    async fn delete_many(&self, collection: &str, filter: &Filter) -> Result<u64> {
        let result = self
            .collection(collection)
            .delete_many(filter::to_document(filter)?)
            .await
            .map_err(Error::driver)?;

        Ok(result.deleted_count)
    }
}
