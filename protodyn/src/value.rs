//! Runtime value representations.
//!
//! Two value models live here. [`FieldValue`] is the internally-typed
//! representation a message instance stores per field. [`HostValue`] is
//! what the conversion layer hands to the dynamically-typed host
//! environment: integers, floats, text, byte blobs, enum symbols, or nil.

use std::fmt;

use crate::message::DynamicMessage;
use crate::schema::FieldKind;

/// Internally-typed value stored for one field of a message instance.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Bool(bool),
    Int32(i32),
    Int64(i64),
    Uint32(u32),
    Uint64(u64),
    Float32(f32),
    Float64(f64),
    String(String),
    Bytes(Vec<u8>),
    /// Enum constant, stored by number
    Enum(i32),
    /// Nested message instance
    Message(Box<DynamicMessage>),
}

/// Macro to generate extractors for the copyable primitive variants.
macro_rules! impl_field_value_accessors {
    ($($method:ident -> $variant:ident : $ty:ty),* $(,)?) => {
        impl FieldValue {
            $(
                #[doc = concat!("Try to extract as ", stringify!($ty), ".")]
                pub fn $method(&self) -> Option<$ty> {
                    match self {
                        FieldValue::$variant(v) => Some(*v),
                        _ => None,
                    }
                }
            )*
        }
    };
}

impl_field_value_accessors! {
    as_bool -> Bool: bool,
    as_i32 -> Int32: i32,
    as_i64 -> Int64: i64,
    as_u32 -> Uint32: u32,
    as_u64 -> Uint64: u64,
    as_f32 -> Float32: f32,
    as_f64 -> Float64: f64,
    as_enum_number -> Enum: i32,
}

impl FieldValue {
    /// Try to extract as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(v) => Some(v),
            _ => None,
        }
    }

    /// Try to extract as a byte slice.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            FieldValue::Bytes(v) => Some(v),
            _ => None,
        }
    }

    /// Try to extract as a nested message reference.
    pub fn as_message(&self) -> Option<&DynamicMessage> {
        match self {
            FieldValue::Message(v) => Some(v),
            _ => None,
        }
    }

    /// Variant tag of this value, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Bool(_) => "bool",
            FieldValue::Int32(_) => "int32",
            FieldValue::Int64(_) => "int64",
            FieldValue::Uint32(_) => "uint32",
            FieldValue::Uint64(_) => "uint64",
            FieldValue::Float32(_) => "float32",
            FieldValue::Float64(_) => "float64",
            FieldValue::String(_) => "string",
            FieldValue::Bytes(_) => "bytes",
            FieldValue::Enum(_) => "enum",
            FieldValue::Message(_) => "message",
        }
    }
}

/// Value representable in the dynamically-typed host environment.
#[derive(Clone, Debug, PartialEq)]
pub enum HostValue {
    /// Absent value
    Nil,
    Bool(bool),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
    /// Symbolic name of an enum constant
    Symbol(String),
}

impl HostValue {
    /// Check if this is the absent value.
    pub fn is_nil(&self) -> bool {
        matches!(self, HostValue::Nil)
    }

    /// Try to extract as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            HostValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to extract as a signed integer.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            HostValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to extract as an unsigned integer.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            HostValue::Unsigned(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to extract as a float.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            HostValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to extract as text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            HostValue::Text(v) => Some(v),
            _ => None,
        }
    }

    /// Try to extract as a byte slice.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            HostValue::Bytes(v) => Some(v),
            _ => None,
        }
    }

    /// Try to extract as an enum symbol.
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            HostValue::Symbol(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for HostValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostValue::Nil => write!(f, "nil"),
            HostValue::Bool(v) => write!(f, "{}", v),
            HostValue::Integer(v) => write!(f, "{}", v),
            HostValue::Unsigned(v) => write!(f, "{}", v),
            HostValue::Float(v) => write!(f, "{:?}", v),
            HostValue::Text(v) => write!(f, "{:?}", v),
            HostValue::Bytes(v) => write!(f, "{:?}", v),
            HostValue::Symbol(v) => write!(f, ":{}", v),
        }
    }
}

/// Create the unset value for a given field kind.
///
/// Numeric kinds default to zero, strings and bytes to empty, booleans to
/// false, enums to the zero-numbered constant, and message kinds to an
/// empty nested instance.
pub fn default_for_kind(kind: &FieldKind) -> FieldValue {
    match kind {
        FieldKind::Bool => FieldValue::Bool(false),
        FieldKind::Int32 => FieldValue::Int32(0),
        FieldKind::Int64 => FieldValue::Int64(0),
        FieldKind::Uint32 => FieldValue::Uint32(0),
        FieldKind::Uint64 => FieldValue::Uint64(0),
        FieldKind::Float32 => FieldValue::Float32(0.0),
        FieldKind::Float64 => FieldValue::Float64(0.0),
        FieldKind::String => FieldValue::String(String::new()),
        FieldKind::Bytes => FieldValue::Bytes(Vec::new()),
        FieldKind::Enum(_) => FieldValue::Enum(0),
        FieldKind::Message(descriptor) => {
            FieldValue::Message(Box::new(DynamicMessage::new(descriptor)))
        }
    }
}
