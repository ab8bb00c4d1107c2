//! Weaviate persistence adapter
//!
//! The adapter is discovered through the host container rather than the
//! registry: the host registers [`WeaviateAdapterFactory`] under
//! `edgebinder.adapter.weaviate` and a [`WeaviateClient`] under the service
//! named by the instance's `weaviate_client` key.
//!
//! ```toml
//! [edgebinder.rag]
//! adapter = "weaviate"
//! weaviate_client = "weaviate.client.rag"
//! collection_name = "RagBindings"
//! schema = { auto_create = true }
//! ```

pub mod adapter;
pub mod client;
pub mod factory;

pub use adapter::{WeaviateAdapter, WeaviateSettings};
pub use client::WeaviateClient;
pub use factory::WeaviateAdapterFactory;

/// Adapter type name used in configuration
pub const WEAVIATE_ADAPTER: &str = "weaviate";

/// Instance key naming the client service
pub const CLIENT_SERVICE_KEY: &str = "weaviate_client";

/// Client service used when `weaviate_client` is not set
pub const DEFAULT_CLIENT_SERVICE: &str = "weaviate.client.default";

/// Instance key naming the collection
pub const COLLECTION_NAME_KEY: &str = "collection_name";

/// Collection used when `collection_name` is not set
pub const DEFAULT_COLLECTION_NAME: &str = "EdgeBindings";

/// Instance key holding schema options
pub const SCHEMA_KEY: &str = "schema";

/// Schema option creating the collection on first use
pub const AUTO_CREATE_KEY: &str = "auto_create";
