//! Dynamic message bridge over compiled schema descriptor graphs.
//!
//! This crate resolves a schema graph by name, looks up message
//! descriptors within it, and synthesizes runtime types whose read
//! accessors mirror the descriptor's fields, converting each stored
//! field value into a value a dynamically-typed host environment can
//! consume.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐     ┌─────────────────┐
//! │   SchemaGraph   │────▶│ MessageDescriptor│
//! │  (type table)   │     │  (field list)   │
//! └────────┬────────┘     └────────┬────────┘
//!          │ resolve               │ synthesize
//!          ▼                       ▼
//! ┌─────────────────┐     ┌─────────────────┐
//! │ SchemaRegistry  │     │   DynamicType   │
//! │ (one resolved   │     │ (accessor table)│
//! │     graph)      │     └────────┬────────┘
//! └─────────────────┘              │ instantiate
//!                                  ▼
//! ┌─────────────────┐     ┌─────────────────┐
//! │    convert      │◀────│ DynamicMessage  │
//! │ (kind × value → │     │ (field values)  │
//! │   host value)   │     └─────────────────┘
//! └─────────────────┘
//! ```
//!
//! Artifact loading and the host object system proper stay outside the
//! crate, behind the [`SchemaLoader`] and [`DynamicObjectRuntime`] traits.
//!
//! # Example
//!
//! ```rust
//! use protodyn::{
//!     DescriptorBridge, DynamicObjectRuntime, FieldKind, HostValue,
//!     MemorySchemaLoader, MessageDescriptor, SchemaGraph, ScriptRuntime,
//! };
//!
//! let person = MessageDescriptor::builder("Person")
//!     .field("name", 1, FieldKind::String)
//!     .field("id", 2, FieldKind::Int32)
//!     .field("email", 3, FieldKind::String)
//!     .build();
//!
//! let graph = SchemaGraph::builder("Addressbook")
//!     .message(person)
//!     .build()
//!     .unwrap();
//!
//! let mut loader = MemorySchemaLoader::new();
//! loader.register(graph);
//!
//! let mut bridge = DescriptorBridge::new(Box::new(loader), ScriptRuntime::new());
//! bridge.initialize("Addressbook").unwrap();
//!
//! let class = bridge.message_class("Person").unwrap();
//! let instance = bridge.runtime().instantiate(&class);
//! assert_eq!(instance.call("id").unwrap(), HostValue::Integer(0));
//! assert_eq!(instance.call("name").unwrap(), HostValue::Text(String::new()));
//! ```

pub mod bridge;
pub mod convert;
pub mod error;
pub mod message;
pub mod registry;
pub mod runtime;
pub mod schema;
pub mod value;

#[cfg(test)]
mod tests;

// Re-export main types
pub use bridge::DescriptorBridge;
pub use convert::convert;
pub use error::DynamicError;
pub use message::DynamicMessage;
pub use registry::{MemorySchemaLoader, SchemaLoader, SchemaRegistry};
pub use runtime::{Accessor, DynamicInstance, DynamicObjectRuntime, DynamicType, ScriptRuntime};
pub use schema::{
    EnumDescriptor, EnumVariant, FieldDescriptor, FieldKind, MessageDescriptor, SchemaGraph,
};
pub use value::{FieldValue, HostValue, default_for_kind};
