//! Binding value objects
//!
//! The minimal relationship record the shipped adapters store. Adapters own
//! their storage layout; this is only the exchange shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ConfigMap;

/// Reference to an entity on either side of a binding
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityRef {
    /// Entity type (e.g. "Workspace", "Project")
    pub entity_type: String,
    /// Entity identifier, unique within its type
    pub entity_id: String,
}

impl EntityRef {
    /// Create a new entity reference
    pub fn new(entity_type: impl Into<String>, entity_id: impl Into<String>) -> Self {
        Self {
            entity_type: entity_type.into(),
            entity_id: entity_id.into(),
        }
    }
}

/// A typed, directed relationship between two entities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Binding {
    /// Unique binding identifier
    pub id: String,
    /// Source entity
    pub from: EntityRef,
    /// Target entity
    pub to: EntityRef,
    /// Relationship type (e.g. "has_access")
    pub binding_type: String,
    /// Free-form metadata attached to the relationship
    pub metadata: ConfigMap,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Binding {
    /// Create a binding with a fresh identifier and no metadata
    pub fn new(from: EntityRef, to: EntityRef, binding_type: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            from,
            to,
            binding_type: binding_type.into(),
            metadata: ConfigMap::new(),
            created_at: Utc::now(),
        }
    }

    /// Attach a metadata entry
    pub fn with_metadata(mut self, key: impl Into<String>, value: Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }
}
