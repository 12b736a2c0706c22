//! Basic example of the descriptor bridge.
//!
//! This example demonstrates:
//! - Building a schema graph programmatically
//! - Resolving it through the registry by identifier
//! - Synthesizing a dynamic type for a message and reading its accessors

use protodyn::{
    DescriptorBridge, DynamicObjectRuntime, EnumDescriptor, EnumVariant, FieldKind,
    MemorySchemaLoader, MessageDescriptor, SchemaGraph, ScriptRuntime,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Descriptor Bridge Example ===\n");

    // Build the Addressbook schema
    let status = EnumDescriptor::new(
        "Status",
        vec![
            EnumVariant::new("Unknown", 0),
            EnumVariant::new("Active", 1),
            EnumVariant::new("Retired", 2),
        ],
    );

    let address = MessageDescriptor::builder("Address")
        .field("street", 1, FieldKind::String)
        .field("zip", 2, FieldKind::Uint32)
        .build();

    let person = MessageDescriptor::builder("Person")
        .field("name", 1, FieldKind::String)
        .field("id", 2, FieldKind::Int32)
        .field("email", 3, FieldKind::String)
        .field("status", 4, FieldKind::Enum(status))
        .field("address", 5, FieldKind::Message(address.clone()))
        .build();

    let graph = SchemaGraph::builder("Addressbook")
        .message(address)
        .message(person)
        .build()?;

    let mut loader = MemorySchemaLoader::new();
    loader.register(graph);

    // Resolve the schema and look up a message type
    let mut bridge = DescriptorBridge::new(Box::new(loader), ScriptRuntime::new());
    bridge.initialize("Addressbook")?;

    let descriptor = bridge.lookup("Person").expect("Person is in the schema");
    println!("Resolved message type: {}", descriptor.name);
    println!(
        "Fields: {:?}\n",
        descriptor.field_names().collect::<Vec<_>>()
    );

    // Synthesize the dynamic type and read a fresh instance
    let class = bridge.message_class("Person").expect("lookup succeeded");
    let instance = bridge.runtime().instantiate(&class);

    println!("Fresh instance reads:");
    for name in class.accessor_names() {
        println!("  {}() -> {}", name, instance.call(name)?);
    }

    // Absent lookups return None rather than failing
    assert!(bridge.lookup("Nonexistent").is_none());
    println!("\nlookup(\"Nonexistent\") -> absent");

    Ok(())
}
