//! # slotcache
//!
//! Fixed-capacity in-memory cache with exact least-recently-used eviction.
//!
//! ## Architecture
//! - **Index**: AHash-backed map from key to value and list handle (O(1))
//! - **Recency list**: slot-arena doubly linked list for eviction order (O(1))
//! - **Statistics**: hit/miss/eviction counters for the embedding layer
//!
//! Inserting beyond capacity evicts the entry that has gone longest without
//! being read or written. All operations are synchronous and take `&mut
//! self`; a cache instance has exactly one logical owner, and embedders that
//! need sharing provide their own mutual exclusion.

#![warn(missing_docs)]

mod cache;
mod error;
mod list;
mod stats;


pub use cache::LruCache;
pub use error::{Error, Result};
pub use stats::CacheStats;
