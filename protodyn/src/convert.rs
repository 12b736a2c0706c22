//! Type-directed conversion from stored field values to host values.
//!
//! This is the heart of the bridge: given a field's declared kind and the
//! raw value an instance currently stores, produce the value the host
//! environment sees. Conversion is pure, holds no state across calls, and
//! performs no I/O.

use tracing::debug;

use crate::error::DynamicError;
use crate::schema::FieldKind;
use crate::value::{FieldValue, HostValue};

/// Convert a stored field value to its host representation.
///
/// Total except for two cases: a populated nested message (read access to
/// nested messages covers only the unset case) and a stored value that
/// does not match the declared kind.
pub fn convert(kind: &FieldKind, raw: &FieldValue) -> Result<HostValue, DynamicError> {
    match (kind, raw) {
        (FieldKind::Bool, FieldValue::Bool(v)) => Ok(HostValue::Bool(*v)),
        (FieldKind::Int32, FieldValue::Int32(v)) => Ok(HostValue::Integer(i64::from(*v))),
        (FieldKind::Int64, FieldValue::Int64(v)) => Ok(HostValue::Integer(*v)),
        (FieldKind::Uint32, FieldValue::Uint32(v)) => Ok(HostValue::Unsigned(u64::from(*v))),
        (FieldKind::Uint64, FieldValue::Uint64(v)) => Ok(HostValue::Unsigned(*v)),
        (FieldKind::Float32, FieldValue::Float32(v)) => Ok(HostValue::Float(f64::from(*v))),
        (FieldKind::Float64, FieldValue::Float64(v)) => Ok(HostValue::Float(*v)),
        (FieldKind::String, FieldValue::String(v)) => Ok(HostValue::Text(v.clone())),

        // No charset interpretation on bytes
        (FieldKind::Bytes, FieldValue::Bytes(v)) => Ok(HostValue::Bytes(v.clone())),

        // A known constant converts to its symbolic name; a number outside
        // the declared constants stays a bare integer (open enum).
        (FieldKind::Enum(descriptor), FieldValue::Enum(number)) => {
            Ok(match descriptor.variant_by_number(*number) {
                Some(variant) => HostValue::Symbol(variant.name.clone()),
                None => HostValue::Integer(i64::from(*number)),
            })
        }

        // An unset nested message reads as nil; a populated one is not
        // supported through this surface.
        (FieldKind::Message(descriptor), FieldValue::Message(nested)) => {
            if nested.is_default() {
                Ok(HostValue::Nil)
            } else {
                Err(DynamicError::UnsupportedNestedMessage(
                    descriptor.name.clone(),
                ))
            }
        }

        (kind, raw) => {
            debug!(
                kind = kind.name(),
                value_type = raw.type_name(),
                "no conversion for stored value"
            );
            Err(DynamicError::UnsupportedFieldType {
                kind: kind.name().to_string(),
                value_type: raw.type_name().to_string(),
            })
        }
    }
}
