//! Schema resolution.
//!
//! Loading a compiled schema artifact is an external concern, abstracted
//! behind the [`SchemaLoader`] trait. A [`SchemaRegistry`] drives a loader
//! and holds the single currently-resolved graph for name lookups.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::error::DynamicError;
use crate::schema::{EnumDescriptor, MessageDescriptor, SchemaGraph};

/// Resolves an opaque schema identifier to a schema graph.
///
/// Implementations own artifact storage and lookup mechanics; the core
/// only sees the result.
pub trait SchemaLoader: Send {
    /// Load the schema graph named by `identifier`, or `None` if the
    /// identifier does not resolve.
    fn load(&self, identifier: &str) -> Option<Arc<SchemaGraph>>;
}

/// In-memory loader backed by a name-keyed map.
///
/// Ensures graph sharing via `Arc`; used by tests and demos, and as the
/// natural loader for schemas built programmatically.
pub struct MemorySchemaLoader {
    graphs: HashMap<String, Arc<SchemaGraph>>,
}

impl MemorySchemaLoader {
    /// Create an empty loader.
    pub fn new() -> Self {
        Self {
            graphs: HashMap::new(),
        }
    }

    /// Register a graph under its own name and return the Arc for sharing.
    pub fn register(&mut self, graph: Arc<SchemaGraph>) -> Arc<SchemaGraph> {
        self.graphs.insert(graph.name.clone(), graph.clone());
        graph
    }

    /// Check if an identifier is registered.
    pub fn contains(&self, identifier: &str) -> bool {
        self.graphs.contains_key(identifier)
    }

    /// Number of registered graphs.
    pub fn len(&self) -> usize {
        self.graphs.len()
    }

    /// Check if the loader is empty.
    pub fn is_empty(&self) -> bool {
        self.graphs.is_empty()
    }
}

impl Default for MemorySchemaLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaLoader for MemorySchemaLoader {
    fn load(&self, identifier: &str) -> Option<Arc<SchemaGraph>> {
        self.graphs.get(identifier).cloned()
    }
}

/// Resolves schema identifiers through a loader and holds the resolved
/// graph, at most one at a time.
pub struct SchemaRegistry {
    loader: Box<dyn SchemaLoader>,
    resolved: Option<Arc<SchemaGraph>>,
}

impl SchemaRegistry {
    /// Create a registry over the given loader.
    pub fn new(loader: Box<dyn SchemaLoader>) -> Self {
        Self {
            loader,
            resolved: None,
        }
    }

    /// Resolve a schema identifier.
    ///
    /// On success the resolved graph replaces any previously-resolved one.
    /// On failure the previous graph is left in place and
    /// [`DynamicError::SchemaNotFound`] names the identifier.
    #[tracing::instrument(name = "schema_resolve", skip(self))]
    pub fn resolve(&mut self, identifier: &str) -> Result<Arc<SchemaGraph>, DynamicError> {
        match self.loader.load(identifier) {
            Some(graph) => {
                debug!(
                    schema = %graph.name,
                    messages = graph.messages.len(),
                    enums = graph.enums.len(),
                    "schema resolved"
                );
                self.resolved = Some(graph.clone());
                Ok(graph)
            }
            None => Err(DynamicError::SchemaNotFound(identifier.to_string())),
        }
    }

    /// Look up a message descriptor by exact type name in the resolved
    /// graph. Absent names, and lookups before any resolve, yield
    /// `None`, never an error.
    pub fn lookup(&self, type_name: &str) -> Option<Arc<MessageDescriptor>> {
        self.resolved.as_ref()?.message(type_name).cloned()
    }

    /// Look up an enum descriptor by exact type name in the resolved graph.
    pub fn lookup_enum(&self, type_name: &str) -> Option<Arc<EnumDescriptor>> {
        self.resolved.as_ref()?.enum_def(type_name).cloned()
    }

    /// The currently-resolved graph, if any.
    pub fn graph(&self) -> Option<&Arc<SchemaGraph>> {
        self.resolved.as_ref()
    }
}
