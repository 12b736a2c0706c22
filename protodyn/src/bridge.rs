//! Facade tying schema resolution, type synthesis, and the host runtime
//! together into the two-call surface an embedding uses: initialize a
//! schema, then materialize message classes by name.

use std::sync::Arc;

use crate::error::DynamicError;
use crate::registry::{SchemaLoader, SchemaRegistry};
use crate::runtime::{DynamicObjectRuntime, DynamicType};
use crate::schema::MessageDescriptor;

/// Bridge from a compiled schema graph to a host object system.
pub struct DescriptorBridge<R: DynamicObjectRuntime> {
    registry: SchemaRegistry,
    runtime: R,
}

impl<R: DynamicObjectRuntime> DescriptorBridge<R> {
    /// Create a bridge over the given loader and host runtime.
    pub fn new(loader: Box<dyn SchemaLoader>, runtime: R) -> Self {
        Self {
            registry: SchemaRegistry::new(loader),
            runtime,
        }
    }

    /// Resolve and store a schema graph.
    pub fn initialize(&mut self, identifier: &str) -> Result<(), DynamicError> {
        self.registry.resolve(identifier)?;
        Ok(())
    }

    /// Look up a message descriptor in the initialized schema.
    pub fn lookup(&self, type_name: &str) -> Option<Arc<MessageDescriptor>> {
        self.registry.lookup(type_name)
    }

    /// Look up a message type and define a freshly synthesized dynamic
    /// type for it in the host runtime.
    ///
    /// Returns `None` when the name is absent from the schema. Every
    /// successful call synthesizes and defines anew; callers wanting to
    /// reuse a type hold on to the returned handle.
    pub fn message_class(&mut self, type_name: &str) -> Option<R::TypeHandle> {
        let descriptor = self.registry.lookup(type_name)?;
        Some(
            self.runtime
                .define_type(DynamicType::from_descriptor(&descriptor)),
        )
    }

    /// The underlying schema registry.
    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    /// The host runtime.
    pub fn runtime(&self) -> &R {
        &self.runtime
    }

    /// The host runtime, mutably.
    pub fn runtime_mut(&mut self) -> &mut R {
        &mut self.runtime
    }
}
