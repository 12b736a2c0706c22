//! Tests for schema loading and resolution.

use std::sync::Arc;

use crate::error::DynamicError;
use crate::registry::{MemorySchemaLoader, SchemaLoader, SchemaRegistry};
use crate::schema::{EnumDescriptor, EnumVariant, FieldKind, MessageDescriptor, SchemaGraph};

fn create_addressbook_graph() -> Arc<SchemaGraph> {
    let person = MessageDescriptor::builder("Person")
        .field("name", 1, FieldKind::String)
        .field("id", 2, FieldKind::Int32)
        .field("email", 3, FieldKind::String)
        .build();

    SchemaGraph::builder("Addressbook")
        .message(person)
        .enum_def(EnumDescriptor::new(
            "Status",
            vec![EnumVariant::new("Unknown", 0)],
        ))
        .build()
        .unwrap()
}

fn create_registry() -> SchemaRegistry {
    let mut loader = MemorySchemaLoader::new();
    loader.register(create_addressbook_graph());
    SchemaRegistry::new(Box::new(loader))
}

#[test]
fn test_memory_loader_basic_operations() {
    let mut loader = MemorySchemaLoader::new();
    assert!(loader.is_empty());

    let graph = create_addressbook_graph();
    let returned = loader.register(graph.clone());
    assert!(Arc::ptr_eq(&graph, &returned));

    assert_eq!(loader.len(), 1);
    assert!(loader.contains("Addressbook"));
    assert!(!loader.contains("Other"));

    let loaded = loader.load("Addressbook");
    assert!(loaded.is_some());
    assert!(Arc::ptr_eq(&graph, &loaded.unwrap()));
    assert!(loader.load("Other").is_none());
}

#[test]
fn test_resolve_stores_graph() {
    let mut registry = create_registry();
    assert!(registry.graph().is_none());

    let graph = registry.resolve("Addressbook").unwrap();
    assert_eq!(graph.name, "Addressbook");
    assert!(registry.graph().is_some());
}

#[test]
fn test_resolve_unknown_identifier() {
    let mut registry = create_registry();

    match registry.resolve("Phonebook") {
        Err(DynamicError::SchemaNotFound(identifier)) => {
            assert_eq!(identifier, "Phonebook");
        }
        other => panic!("Expected SchemaNotFound, got {:?}", other.map(|_| ())),
    }

    // The error message names the identifier
    let err = registry.resolve("Phonebook").unwrap_err();
    assert!(err.to_string().contains("Phonebook"));
}

#[test]
fn test_failed_resolve_keeps_previous_graph() {
    let mut registry = create_registry();
    registry.resolve("Addressbook").unwrap();

    assert!(registry.resolve("Phonebook").is_err());
    assert!(registry.lookup("Person").is_some());
}

#[test]
fn test_lookup_after_resolve() {
    let mut registry = create_registry();
    registry.resolve("Addressbook").unwrap();

    let person = registry.lookup("Person").unwrap();
    assert_eq!(person.name, "Person");
    assert_eq!(person.field_count(), 3);
}

#[test]
fn test_lookup_absent_name_is_none() {
    let mut registry = create_registry();
    registry.resolve("Addressbook").unwrap();

    assert!(registry.lookup("Nonexistent").is_none());
}

#[test]
fn test_lookup_before_resolve_is_none() {
    let registry = create_registry();
    assert!(registry.lookup("Person").is_none());
    assert!(registry.lookup_enum("Status").is_none());
}

#[test]
fn test_lookup_enum() {
    let mut registry = create_registry();
    registry.resolve("Addressbook").unwrap();

    let status = registry.lookup_enum("Status").unwrap();
    assert_eq!(status.variant_by_number(0).map(|v| v.name.as_str()), Some("Unknown"));
    assert!(registry.lookup_enum("Person").is_none());
}

#[test]
fn test_resolve_replaces_previous_graph() {
    let mut loader = MemorySchemaLoader::new();
    loader.register(create_addressbook_graph());

    let other = SchemaGraph::builder("Inventory")
        .message(
            MessageDescriptor::builder("Item")
                .field("sku", 1, FieldKind::String)
                .build(),
        )
        .build()
        .unwrap();
    loader.register(other);

    let mut registry = SchemaRegistry::new(Box::new(loader));

    registry.resolve("Addressbook").unwrap();
    assert!(registry.lookup("Person").is_some());

    registry.resolve("Inventory").unwrap();
    assert!(registry.lookup("Person").is_none());
    assert!(registry.lookup("Item").is_some());
}
