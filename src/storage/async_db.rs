//! Async facade over [`Database`].
//!
//! rusqlite is blocking, so each helper runs on tokio's blocking pool.
//! Every call is its own task with its own connection; concurrent callers
//! are coordinated only by SQLite's file locking.

use std::path::PathBuf;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::model::{QueryOutput, SqlRow, Value};
use crate::storage::database::Database;

/// Cloneable async handle; clones share one [`Database`].
#[derive(Debug, Clone)]
pub struct AsyncDatabase {
    inner: Arc<Database>,
}

impl From<Database> for AsyncDatabase {
    fn from(db: Database) -> Self {
        Self {
            inner: Arc::new(db),
        }
    }
}

impl AsyncDatabase {
    #[must_use]
    pub fn new(db: Database) -> Self {
        Self::from(db)
    }

    /// The wrapped blocking handle.
    #[must_use]
    pub fn blocking(&self) -> &Database {
        &self.inner
    }

    async fn run<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&Database) -> Result<T> + Send + 'static,
    {
        let db = Arc::clone(&self.inner);
        tokio::task::spawn_blocking(move || f(db.as_ref()))
            .await
            .map_err(|e| Error::Task(e.to_string()))?
    }

    /// See [`Database::create`].
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or the task fails.
    pub async fn create(&self) -> Result<String> {
        self.run(Database::create).await
    }

    /// See [`Database::execute`].
    ///
    /// # Errors
    ///
    /// Returns an error per the handle's error policy or if the task fails.
    pub async fn execute(
        &self,
        query: impl Into<String>,
        export: Option<PathBuf>,
        format: bool,
    ) -> Result<QueryOutput> {
        let query = query.into();
        self.run(move |db| db.execute(&query, export.as_deref(), format))
            .await
    }

    /// See [`Database::execute_with_params`].
    ///
    /// # Errors
    ///
    /// Returns an error per the handle's error policy or if the task fails.
    pub async fn execute_with_params(
        &self,
        query: impl Into<String>,
        params: Vec<Value>,
    ) -> Result<QueryOutput> {
        let query = query.into();
        self.run(move |db| db.execute_with_params(&query, &params, None))
            .await
    }

    /// See [`Database::fetch`].
    ///
    /// # Errors
    ///
    /// Returns an error per the handle's error policy or if the task fails.
    pub async fn fetch(
        &self,
        table: impl Into<String>,
        items: impl Into<String>,
        export: Option<PathBuf>,
    ) -> Result<QueryOutput> {
        let (table, items) = (table.into(), items.into());
        self.run(move |db| db.fetch(&table, &items, export.as_deref()))
            .await
    }

    /// See [`Database::get`].
    ///
    /// # Errors
    ///
    /// Returns an error per the handle's error policy or if the task fails.
    pub async fn get(
        &self,
        table: impl Into<String>,
        condition: impl Into<String>,
        items: impl Into<String>,
        export: Option<PathBuf>,
    ) -> Result<QueryOutput> {
        let (table, condition, items) = (table.into(), condition.into(), items.into());
        self.run(move |db| db.get(&table, &condition, &items, export.as_deref()))
            .await
    }

    /// See [`Database::insert`].
    ///
    /// # Errors
    ///
    /// Returns an error per the handle's error policy or if the task fails.
    pub async fn insert<R>(&self, table: impl Into<String>, rows: Vec<R>) -> Result<QueryOutput>
    where
        R: SqlRow + Send + 'static,
    {
        let table = table.into();
        self.run(move |db| db.insert(&table, rows)).await
    }

    /// See [`Database::drop`].
    ///
    /// # Errors
    ///
    /// Returns an error per the handle's error policy or if the task fails.
    pub async fn drop(&self, table: impl Into<String>) -> Result<QueryOutput> {
        let table = table.into();
        self.run(move |db| db.drop(&table)).await
    }
}
