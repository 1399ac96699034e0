//! Data sources and stored models.

mod memory;
mod models;
mod mongo;
mod source;

pub use memory::MemorySource;
pub use models::*;
pub use mongo::{Database, MongoEntity, MongoSource};
pub use source::{DataAccessError, DataSource};
