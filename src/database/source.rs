//! Data source seam used to fill cached lists.

use std::future::Future;

use thiserror::Error;

use crate::cache::Filter;

/// Failure while loading items from a data source.
#[derive(Debug, Error)]
pub enum DataAccessError {
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("no data registered for `{type_name}`")]
    NotRegistered { type_name: &'static str },

    #[error("data source error: {0}")]
    Source(String),
}

/// Loads every item of `T` that matches a filter, in source order.
pub trait DataSource<T>: Send + Sync {
    fn fetch_all(
        &self,
        filter: &Filter<T>,
    ) -> impl Future<Output = Result<Vec<T>, DataAccessError>> + Send;
}
