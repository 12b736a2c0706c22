//! Error types for the descriptor bridge.

use std::fmt;

/// Errors that can occur while resolving schemas, building descriptor
/// graphs, or reading dynamic message fields.
#[derive(Debug)]
pub enum DynamicError {
    /// Schema identifier did not resolve to a loadable schema graph
    SchemaNotFound(String),

    /// Field (or accessor) not found in the message descriptor
    FieldNotFound(String),

    /// Positional field access past the end of the field list
    IndexOutOfBounds(usize),

    /// Read of a populated nested-message field; carries the nested type name
    UnsupportedNestedMessage(String),

    /// Stored value does not match the field's declared kind
    UnsupportedFieldType { kind: String, value_type: String },

    /// Enum defined without a variant numbered 0 (the default value)
    MissingZeroVariant(String),

    /// Two types in one schema graph share a name
    DuplicateTypeName(String),
}

impl fmt::Display for DynamicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DynamicError::SchemaNotFound(identifier) => {
                write!(f, "Schema '{}' does not exist", identifier)
            }
            DynamicError::FieldNotFound(name) => {
                write!(f, "Field '{}' not found in message descriptor", name)
            }
            DynamicError::IndexOutOfBounds(idx) => {
                write!(f, "Field index {} is out of bounds", idx)
            }
            DynamicError::UnsupportedNestedMessage(type_name) => {
                write!(
                    f,
                    "Reading a populated nested message of type '{}' is not supported",
                    type_name
                )
            }
            DynamicError::UnsupportedFieldType { kind, value_type } => {
                write!(
                    f,
                    "No conversion from stored value of type '{}' for field kind '{}'",
                    value_type, kind
                )
            }
            DynamicError::MissingZeroVariant(enum_name) => {
                write!(
                    f,
                    "Enum '{}' does not contain a variant numbered 0",
                    enum_name
                )
            }
            DynamicError::DuplicateTypeName(type_name) => {
                write!(f, "Type name '{}' is defined more than once", type_name)
            }
        }
    }
}

impl std::error::Error for DynamicError {}
