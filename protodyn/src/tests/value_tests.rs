//! Tests for the internal and host value models.

use crate::message::DynamicMessage;
use crate::schema::{EnumDescriptor, EnumVariant, FieldKind, MessageDescriptor};
use crate::value::{FieldValue, HostValue, default_for_kind};

#[test]
fn test_field_value_accessors() {
    assert_eq!(FieldValue::Bool(true).as_bool(), Some(true));
    assert_eq!(FieldValue::Int32(42).as_i32(), Some(42));
    assert_eq!(FieldValue::Int64(-7).as_i64(), Some(-7));
    assert_eq!(FieldValue::Uint32(42).as_u32(), Some(42));
    assert_eq!(FieldValue::Uint64(42).as_u64(), Some(42));
    assert_eq!(FieldValue::Float32(1.5).as_f32(), Some(1.5));
    assert_eq!(FieldValue::Float64(1.5).as_f64(), Some(1.5));
    assert_eq!(FieldValue::Enum(2).as_enum_number(), Some(2));

    assert_eq!(FieldValue::String("hello".to_string()).as_str(), Some("hello"));
    assert_eq!(
        FieldValue::Bytes(vec![1, 2, 3]).as_bytes(),
        Some(&[1u8, 2, 3][..])
    );

    // Wrong variant yields None
    assert_eq!(FieldValue::Bool(true).as_i32(), None);
    assert_eq!(FieldValue::Int32(42).as_str(), None);
    assert_eq!(FieldValue::String("x".to_string()).as_bytes(), None);
}

#[test]
fn test_field_value_type_names() {
    assert_eq!(FieldValue::Bool(false).type_name(), "bool");
    assert_eq!(FieldValue::Int32(0).type_name(), "int32");
    assert_eq!(FieldValue::Uint64(0).type_name(), "uint64");
    assert_eq!(FieldValue::String(String::new()).type_name(), "string");
    assert_eq!(FieldValue::Bytes(Vec::new()).type_name(), "bytes");
    assert_eq!(FieldValue::Enum(0).type_name(), "enum");
}

#[test]
fn test_default_for_scalar_kinds() {
    assert_eq!(default_for_kind(&FieldKind::Bool), FieldValue::Bool(false));
    assert_eq!(default_for_kind(&FieldKind::Int32), FieldValue::Int32(0));
    assert_eq!(default_for_kind(&FieldKind::Int64), FieldValue::Int64(0));
    assert_eq!(default_for_kind(&FieldKind::Uint32), FieldValue::Uint32(0));
    assert_eq!(default_for_kind(&FieldKind::Uint64), FieldValue::Uint64(0));
    assert_eq!(
        default_for_kind(&FieldKind::Float32),
        FieldValue::Float32(0.0)
    );
    assert_eq!(
        default_for_kind(&FieldKind::Float64),
        FieldValue::Float64(0.0)
    );
    assert_eq!(
        default_for_kind(&FieldKind::String),
        FieldValue::String(String::new())
    );
    assert_eq!(
        default_for_kind(&FieldKind::Bytes),
        FieldValue::Bytes(Vec::new())
    );
}

#[test]
fn test_default_for_enum_kind_is_zero() {
    let status = EnumDescriptor::new(
        "Status",
        vec![EnumVariant::new("Unknown", 0), EnumVariant::new("Active", 1)],
    );
    assert_eq!(default_for_kind(&FieldKind::Enum(status)), FieldValue::Enum(0));
}

#[test]
fn test_default_for_message_kind_is_empty_instance() {
    let point = MessageDescriptor::builder("Point")
        .field("x", 1, FieldKind::Float64)
        .field("y", 2, FieldKind::Float64)
        .build();

    match default_for_kind(&FieldKind::Message(point.clone())) {
        FieldValue::Message(nested) => {
            assert!(nested.is_default());
            assert_eq!(nested.field_count(), 2);
            assert_eq!(*nested, DynamicMessage::new(&point));
        }
        other => panic!("Expected Message default, got {:?}", other),
    }
}

#[test]
fn test_host_value_accessors() {
    assert!(HostValue::Nil.is_nil());
    assert!(!HostValue::Bool(false).is_nil());

    assert_eq!(HostValue::Bool(true).as_bool(), Some(true));
    assert_eq!(HostValue::Integer(-42).as_i64(), Some(-42));
    assert_eq!(HostValue::Unsigned(42).as_u64(), Some(42));
    assert_eq!(HostValue::Float(0.5).as_f64(), Some(0.5));
    assert_eq!(HostValue::Text("hi".to_string()).as_str(), Some("hi"));
    assert_eq!(
        HostValue::Bytes(vec![0xde, 0xad]).as_bytes(),
        Some(&[0xdeu8, 0xad][..])
    );
    assert_eq!(HostValue::Symbol("Active".to_string()).as_symbol(), Some("Active"));

    // Cross-variant extraction fails
    assert_eq!(HostValue::Integer(1).as_u64(), None);
    assert_eq!(HostValue::Text("1".to_string()).as_i64(), None);
    assert_eq!(HostValue::Symbol("A".to_string()).as_str(), None);
}

#[test]
fn test_host_value_display() {
    assert_eq!(HostValue::Nil.to_string(), "nil");
    assert_eq!(HostValue::Bool(true).to_string(), "true");
    assert_eq!(HostValue::Integer(-42).to_string(), "-42");
    assert_eq!(HostValue::Float(0.5).to_string(), "0.5");
    assert_eq!(HostValue::Text("hi".to_string()).to_string(), "\"hi\"");
    assert_eq!(HostValue::Symbol("Active".to_string()).to_string(), ":Active");
}
