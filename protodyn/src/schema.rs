//! Descriptor types for compiled message schemas.
//!
//! This module provides the immutable runtime representation of a schema
//! graph: field kinds, field/message/enum descriptors, and the named
//! collection that groups them. Descriptors are shared via `Arc` and never
//! mutated after construction.

use std::sync::Arc;

use crate::error::DynamicError;

/// Declared kind of a message field.
///
/// Enum and message kinds carry the referenced descriptor directly, so a
/// field's type is fully resolved once its descriptor exists. References
/// must therefore be built bottom-up; see the graph builder.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldKind {
    Bool,
    Int32,
    Int64,
    Uint32,
    Uint64,
    Float32,
    Float64,
    String,
    Bytes,
    /// Enumeration constant
    Enum(Arc<EnumDescriptor>),
    /// Nested message
    Message(Arc<MessageDescriptor>),
}

impl FieldKind {
    /// Lowercase tag for this kind, as written in schema sources.
    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::Bool => "bool",
            FieldKind::Int32 => "int32",
            FieldKind::Int64 => "int64",
            FieldKind::Uint32 => "uint32",
            FieldKind::Uint64 => "uint64",
            FieldKind::Float32 => "float32",
            FieldKind::Float64 => "float64",
            FieldKind::String => "string",
            FieldKind::Bytes => "bytes",
            FieldKind::Enum(_) => "enum",
            FieldKind::Message(_) => "message",
        }
    }

    /// Check if this is a scalar kind (neither enum nor message).
    pub fn is_scalar(&self) -> bool {
        !matches!(self, FieldKind::Enum(_) | FieldKind::Message(_))
    }
}

/// Descriptor for a single message field.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDescriptor {
    /// Field name, unique within its message
    pub name: String,
    /// Declaration tag number
    pub number: u32,
    /// Declared kind
    pub kind: FieldKind,
}

impl FieldDescriptor {
    /// Create a new field descriptor.
    pub fn new(name: impl Into<String>, number: u32, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            number,
            kind,
        }
    }
}

/// A single named constant of an enum type.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumVariant {
    /// Constant name
    pub name: String,
    /// Constant number
    pub number: i32,
}

impl EnumVariant {
    /// Create an enum variant.
    pub fn new(name: impl Into<String>, number: i32) -> Self {
        Self {
            name: name.into(),
            number,
        }
    }
}

/// Descriptor for an enumeration type.
#[derive(Clone, Debug)]
pub struct EnumDescriptor {
    /// Type name
    pub name: String,
    /// Declared constants, in declaration order
    pub variants: Vec<EnumVariant>,
}

impl EnumDescriptor {
    /// Create an enum descriptor.
    pub fn new(name: impl Into<String>, variants: Vec<EnumVariant>) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            variants,
        })
    }

    /// Get a variant by constant name.
    pub fn variant(&self, name: &str) -> Option<&EnumVariant> {
        self.variants.iter().find(|v| v.name == name)
    }

    /// Get a variant by constant number.
    pub fn variant_by_number(&self, number: i32) -> Option<&EnumVariant> {
        self.variants.iter().find(|v| v.number == number)
    }
}

impl PartialEq for EnumDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

/// Descriptor for a message type: a name and an ordered field list.
///
/// Field order is irrelevant to semantics; it only fixes the order in
/// which accessors are registered on a synthesized type.
#[derive(Clone, Debug)]
pub struct MessageDescriptor {
    /// Type name
    pub name: String,
    /// Ordered list of fields
    pub fields: Vec<FieldDescriptor>,
}

impl MessageDescriptor {
    /// Create a builder for programmatic descriptor construction.
    pub fn builder(name: &str) -> MessageDescriptorBuilder {
        MessageDescriptorBuilder::new(name)
    }

    /// Get a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Get a field index by name.
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    /// Number of fields in this message.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Iterate over field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }
}

impl PartialEq for MessageDescriptor {
    fn eq(&self, other: &Self) -> bool {
        // Descriptors are equal if they have the same type name
        self.name == other.name
    }
}

/// Builder for message descriptors.
pub struct MessageDescriptorBuilder {
    name: String,
    fields: Vec<FieldDescriptor>,
}

impl MessageDescriptorBuilder {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            fields: Vec::new(),
        }
    }

    /// Add a field to the descriptor.
    pub fn field(mut self, name: &str, number: u32, kind: FieldKind) -> Self {
        self.fields.push(FieldDescriptor::new(name, number, kind));
        self
    }

    /// Build the message descriptor.
    pub fn build(self) -> Arc<MessageDescriptor> {
        Arc::new(MessageDescriptor {
            name: self.name,
            fields: self.fields,
        })
    }
}

/// A named, immutable collection of message and enum descriptors: the
/// unit that schema resolution produces.
#[derive(Clone, Debug)]
pub struct SchemaGraph {
    /// Schema name (the artifact identifier's target)
    pub name: String,
    /// Message types in this schema
    pub messages: Vec<Arc<MessageDescriptor>>,
    /// Enum types in this schema
    pub enums: Vec<Arc<EnumDescriptor>>,
}

impl SchemaGraph {
    /// Create a builder for the given schema name.
    pub fn builder(name: &str) -> SchemaGraphBuilder {
        SchemaGraphBuilder::new(name)
    }

    /// Get a message descriptor by exact type name.
    pub fn message(&self, name: &str) -> Option<&Arc<MessageDescriptor>> {
        self.messages.iter().find(|m| m.name == name)
    }

    /// Get an enum descriptor by exact type name.
    pub fn enum_def(&self, name: &str) -> Option<&Arc<EnumDescriptor>> {
        self.enums.iter().find(|e| e.name == name)
    }

    /// Iterate over message type names.
    pub fn message_names(&self) -> impl Iterator<Item = &str> {
        self.messages.iter().map(|m| m.name.as_str())
    }
}

/// Builder collecting a schema graph's types before validation.
pub struct SchemaGraphBuilder {
    name: String,
    messages: Vec<Arc<MessageDescriptor>>,
    enums: Vec<Arc<EnumDescriptor>>,
}

impl SchemaGraphBuilder {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            messages: Vec::new(),
            enums: Vec::new(),
        }
    }

    /// Add a message descriptor to the graph.
    pub fn message(mut self, descriptor: Arc<MessageDescriptor>) -> Self {
        self.messages.push(descriptor);
        self
    }

    /// Add an enum descriptor to the graph.
    pub fn enum_def(mut self, descriptor: Arc<EnumDescriptor>) -> Self {
        self.enums.push(descriptor);
        self
    }

    /// Validate and build the schema graph.
    ///
    /// Every enum must declare a variant numbered 0 (it is the default of
    /// every field of that kind), and type names must be unique across
    /// messages and enums.
    pub fn build(self) -> Result<Arc<SchemaGraph>, DynamicError> {
        for enum_def in &self.enums {
            if enum_def.variant_by_number(0).is_none() {
                return Err(DynamicError::MissingZeroVariant(enum_def.name.clone()));
            }
        }

        {
            let mut seen = std::collections::HashSet::new();
            let names = self
                .messages
                .iter()
                .map(|m| m.name.as_str())
                .chain(self.enums.iter().map(|e| e.name.as_str()));
            for name in names {
                if !seen.insert(name) {
                    return Err(DynamicError::DuplicateTypeName(name.to_string()));
                }
            }
        }

        Ok(Arc::new(SchemaGraph {
            name: self.name,
            messages: self.messages,
            enums: self.enums,
        }))
    }
}
