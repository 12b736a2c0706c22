//! Dynamic message instance container.
//!
//! A [`DynamicMessage`] pairs a message descriptor with one stored value
//! per field. Instances are created fully initialized (every field at its
//! kind default) and expose a read-only surface; the only population path
//! is the [`DynamicMessage::from_values`] seam that a decoding
//! collaborator would use.

use std::fmt;
use std::sync::Arc;

use crate::convert::convert;
use crate::error::DynamicError;
use crate::schema::{FieldDescriptor, FieldKind, MessageDescriptor};
use crate::value::{FieldValue, HostValue, default_for_kind};

/// A message instance with runtime-determined type.
#[derive(Clone, Debug)]
pub struct DynamicMessage {
    descriptor: Arc<MessageDescriptor>,
    values: Vec<FieldValue>,
}

impl DynamicMessage {
    /// Create a new instance with every field at its kind default.
    pub fn new(descriptor: &Arc<MessageDescriptor>) -> Self {
        let values = descriptor
            .fields
            .iter()
            .map(|f| default_for_kind(&f.kind))
            .collect();

        Self {
            descriptor: Arc::clone(descriptor),
            values,
        }
    }

    /// Create an instance from pre-computed values, in field order. This
    /// is the materialization seam for decoding collaborators; instances
    /// stay immutable after construction either way.
    pub fn from_values(descriptor: &Arc<MessageDescriptor>, values: Vec<FieldValue>) -> Self {
        Self {
            descriptor: Arc::clone(descriptor),
            values,
        }
    }

    /// Get the message descriptor.
    pub fn descriptor(&self) -> &MessageDescriptor {
        &self.descriptor
    }

    /// Get the descriptor as an Arc (for sharing).
    pub fn descriptor_arc(&self) -> Arc<MessageDescriptor> {
        Arc::clone(&self.descriptor)
    }

    /// Get the stored value for a field by name.
    pub fn raw(&self, name: &str) -> Option<&FieldValue> {
        let idx = self.descriptor.field_index(name)?;
        self.values.get(idx)
    }

    /// Get the stored value for a field by index.
    pub fn raw_by_index(&self, index: usize) -> Option<&FieldValue> {
        self.values.get(index)
    }

    /// Read a field by name, converting the stored value to its host
    /// representation.
    pub fn read(&self, name: &str) -> Result<HostValue, DynamicError> {
        let idx = self
            .descriptor
            .field_index(name)
            .ok_or_else(|| DynamicError::FieldNotFound(name.to_string()))?;
        self.read_by_index(idx)
    }

    /// Read a field by pre-computed index.
    pub fn read_by_index(&self, index: usize) -> Result<HostValue, DynamicError> {
        let field = self
            .descriptor
            .fields
            .get(index)
            .ok_or(DynamicError::IndexOutOfBounds(index))?;
        let value = self
            .values
            .get(index)
            .ok_or(DynamicError::IndexOutOfBounds(index))?;
        convert(&field.kind, value)
    }

    /// Check if every field (recursively) holds its kind default.
    ///
    /// Under a proto3-style codec this is exactly the zero-encoded-size
    /// condition.
    pub fn is_default(&self) -> bool {
        self.values.iter().all(|value| match value {
            FieldValue::Bool(v) => !*v,
            FieldValue::Int32(v) => *v == 0,
            FieldValue::Int64(v) => *v == 0,
            FieldValue::Uint32(v) => *v == 0,
            FieldValue::Uint64(v) => *v == 0,
            FieldValue::Float32(v) => *v == 0.0,
            FieldValue::Float64(v) => *v == 0.0,
            FieldValue::String(v) => v.is_empty(),
            FieldValue::Bytes(v) => v.is_empty(),
            FieldValue::Enum(v) => *v == 0,
            FieldValue::Message(nested) => nested.is_default(),
        })
    }

    /// Iterate over all fields with their names and stored values.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.descriptor
            .fields
            .iter()
            .zip(self.values.iter())
            .map(|(field, value)| (field.name.as_str(), value))
    }

    /// Number of fields.
    pub fn field_count(&self) -> usize {
        self.values.len()
    }
}

impl PartialEq for DynamicMessage {
    fn eq(&self, other: &Self) -> bool {
        // Instances are equal if descriptors match and all values are equal
        Arc::ptr_eq(&self.descriptor, &other.descriptor) && self.values == other.values
    }
}

impl fmt::Display for DynamicMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}: ", self.descriptor.name)?;
        for (i, (field, value)) in self.descriptor.fields.iter().zip(&self.values).enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: ", field.name)?;
            fmt_field(field, value, f)?;
        }
        write!(f, ">")
    }
}

fn fmt_field(
    field: &FieldDescriptor,
    value: &FieldValue,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    match (&field.kind, value) {
        (FieldKind::Enum(descriptor), FieldValue::Enum(number)) => {
            match descriptor.variant_by_number(*number) {
                Some(variant) => write!(f, ":{}", variant.name),
                None => write!(f, "{}", number),
            }
        }
        (_, FieldValue::Bool(v)) => write!(f, "{}", v),
        (_, FieldValue::Int32(v)) => write!(f, "{}", v),
        (_, FieldValue::Int64(v)) => write!(f, "{}", v),
        (_, FieldValue::Uint32(v)) => write!(f, "{}", v),
        (_, FieldValue::Uint64(v)) => write!(f, "{}", v),
        (_, FieldValue::Float32(v)) => write!(f, "{:?}", v),
        (_, FieldValue::Float64(v)) => write!(f, "{:?}", v),
        (_, FieldValue::String(v)) => write!(f, "{:?}", v),
        (_, FieldValue::Bytes(v)) => write!(f, "{:?}", v),
        (_, FieldValue::Enum(v)) => write!(f, "{}", v),
        (_, FieldValue::Message(nested)) => write!(f, "{}", nested),
    }
}
