//! Listcache - lazily filled, process-local cache of typed lists.
//!
//! A list of a type is loaded from its data source on first request, stored
//! under a key derived from the type name (and an optional discriminator),
//! and served from memory afterwards.
//!
//! ## Modules
//!
//! - `cache` - Key derivation, queries and the list cache itself
//! - `database` - Data source seam, MongoDB and in-memory sources, models
//! - `config` - Environment configuration for the binary

pub mod cache;
pub mod config;
pub mod database;
