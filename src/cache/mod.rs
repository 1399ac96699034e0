//! Cache module - lazily filled lists keyed by type and discriminator.
//!
//! ## Architecture
//!
//! - `key` - Key derivation and filter validation (pure functions)
//! - `Query` - Which list of a type is wanted (filter + discriminator)
//! - `ListCache` - The store, filled from a `DataSource` on first use
//! - `Projection` - Explicit mapping from one list shape to another
//!
//! ## Usage
//!
//! ```ignore
//! let cache = ListCache::new(source);
//!
//! // Cached under "Horse".
//! let horses = cache.get_entities(Query::<Horse>::all()).await?;
//!
//! // Cached under "Horse_retired".
//! let retired = cache
//!     .get_entities(Query::<Horse>::all().filter(|h| h.retired).keyed("retired"))
//!     .await?;
//! ```

mod entity;
mod error;
pub mod key;
mod list_cache;
mod outcome;
mod query;

pub use entity::{Cacheable, Projection};
pub use error::CacheError;
pub use key::{CacheKey, Filter};
pub use list_cache::{CachedList, ListCache};
pub use outcome::CacheOutcome;
pub use query::Query;
