//! # EdgeBinder - Adapter Implementations
//!
//! Each adapter implements the `PersistenceAdapter` port defined in
//! `edgebinder-domain`.
//!
//! ## Adapters
//!
//! | Adapter | Discovery | Description |
//! |---------|-----------|-------------|
//! | `inmemory` | registry (`ADAPTER_PROVIDERS`) | Concurrent map, non-persistent |
//! | `weaviate` | container (`edgebinder.adapter.weaviate`) | Objects in a Weaviate collection |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! edgebinder-providers = { version = "0.1", default-features = false, features = ["adapter-inmemory"] }
//! ```
//!
//! Linking this crate is enough to register the `inmemory` adapter. Binaries
//! that never name a type from it must still force the link:
//!
//! ```ignore
//! extern crate edgebinder_providers;
//! ```

pub use edgebinder_domain::error::{Error, Result};
pub use edgebinder_domain::ports::PersistenceAdapter;

/// In-memory adapter, auto-registered as `inmemory`
#[cfg(feature = "adapter-inmemory")]
pub mod in_memory;

/// Weaviate adapter and its container factory
#[cfg(feature = "adapter-weaviate")]
pub mod weaviate;

#[cfg(feature = "adapter-inmemory")]
pub use in_memory::InMemoryAdapter;
#[cfg(feature = "adapter-weaviate")]
pub use weaviate::{WeaviateAdapter, WeaviateAdapterFactory, WeaviateClient};
