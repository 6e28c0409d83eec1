//! Template and behavior caching.
//!
//! The cache is an explicit, injectable component rather than hidden global
//! state: every engine owns a handle, and handles are cheap clones sharing
//! one store. Entries are partitioned by namespace (the directory URL a
//! resource was fetched from), grow without bound, and live until an
//! explicit [`EngineCache::clear`].

mod store;

pub use store::EngineCache;
