mod connect;

use crate::{
    driver::{BackendKind, DocumentStore, Relational},
    engine,
    stmt::{Condition, Projection},
    Model, Result,
};

use std::sync::Arc;

/// The backend a [`Db`] talks to, fixed at construction.
#[derive(Debug)]
pub enum Backend {
    Relational(Box<dyn Relational>),
    Document(Box<dyn DocumentStore>),
}

impl Backend {
    pub fn kind(&self) -> BackendKind {
        match self {
            Backend::Relational(_) => BackendKind::Relational,
            Backend::Document(_) => BackendKind::Document,
        }
    }
}

/// Handle to a database. Every operation performs exactly one round trip to
/// the backend.
#[derive(Debug, Clone)]
pub struct Db {
    backend: Arc<Backend>,
}

impl Db {
    pub fn relational(driver: impl Relational) -> Db {
        Db::from_backend(Backend::Relational(Box::new(driver)))
    }

    pub fn document(driver: impl DocumentStore) -> Db {
        Db::from_backend(Backend::Document(Box::new(driver)))
    }

    pub fn from_backend(backend: Backend) -> Db {
        Db {
            backend: Arc::new(backend),
        }
    }

    pub fn backend(&self) -> &Backend {
        &self.backend
    }

    /// Writes `model`, skipping automatic fields. Returns the affected count.
    pub async fn insert<M: Model>(&self, model: &M) -> Result<u64> {
        engine::insert(&self.backend, model).await
    }

    /// Updates the stored copy of `model`, targeted by its primary key.
    pub async fn update<M: Model>(&self, model: &M) -> Result<u64> {
        engine::update(&self.backend, model, None).await
    }

    /// Sets `model`'s non-absent fields on every record matching `condition`.
    /// A blank condition falls back to primary-key targeting.
    pub async fn update_where<M: Model>(
        &self,
        model: &M,
        condition: impl Into<Condition>,
    ) -> Result<u64> {
        engine::update(&self.backend, model, Some(&condition.into())).await
    }

    /// Deletes the stored copy of `model`, targeted by its primary key.
    pub async fn delete<M: Model>(&self, model: &M) -> Result<u64> {
        engine::delete(&self.backend, model, None).await
    }

    /// Deletes every record of `M` matching `condition`. A blank condition
    /// falls back to `model`'s primary key.
    pub async fn delete_where<M: Model>(
        &self,
        model: &M,
        condition: impl Into<Condition>,
    ) -> Result<u64> {
        engine::delete(&self.backend, model, Some(&condition.into())).await
    }

    /// Loads every record of `M` matching `condition`.
    pub async fn retrieve<M: Model>(&self, condition: impl Into<Condition>) -> Result<Vec<M>> {
        engine::retrieve(&self.backend, Some(&condition.into()), None).await
    }

    /// Loads every record of `M`.
    pub async fn retrieve_all<M: Model>(&self) -> Result<Vec<M>> {
        engine::retrieve(&self.backend, None, None).await
    }

    /// Like [`Db::retrieve`], loading only the fields `projection` keeps.
    /// Fields left out must be optional in `M`.
    pub async fn retrieve_projected<M: Model>(
        &self,
        condition: impl Into<Condition>,
        projection: &Projection,
    ) -> Result<Vec<M>> {
        engine::retrieve(&self.backend, Some(&condition.into()), Some(projection)).await
    }
}
