//! Dynamic type synthesis and the host object-system seam.
//!
//! [`DynamicType::from_descriptor`] turns a message descriptor into a
//! runtime type: one zero-argument read accessor per field, each bound to
//! that field's identity and routed through the conversion layer at call
//! time. Registering such a type with a host object system is abstracted
//! behind [`DynamicObjectRuntime`]; [`ScriptRuntime`] is the in-crate
//! table-backed implementation.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::convert::convert;
use crate::error::DynamicError;
use crate::message::DynamicMessage;
use crate::schema::MessageDescriptor;
use crate::value::HostValue;

/// A field read accessor: takes instance state, returns the converted
/// host value or a conversion failure.
pub type Accessor = Box<dyn Fn(&DynamicMessage) -> Result<HostValue, DynamicError> + Send + Sync>;

/// A runtime type synthesized from one message descriptor.
///
/// The accessor table contains exactly one entry per descriptor field,
/// named after the field, in field order.
pub struct DynamicType {
    name: String,
    descriptor: Arc<MessageDescriptor>,
    accessors: Vec<(String, Accessor)>,
}

impl DynamicType {
    /// Synthesize a new type from a message descriptor.
    ///
    /// Each call builds a brand-new type with fresh accessor closures,
    /// even for a descriptor that was synthesized before; there is no
    /// caching or interning. Synthesis itself cannot fail; conversion
    /// failures surface when an accessor is invoked.
    pub fn from_descriptor(descriptor: &Arc<MessageDescriptor>) -> Self {
        let accessors = descriptor
            .fields
            .iter()
            .enumerate()
            .map(|(index, field)| {
                let kind = field.kind.clone();
                let accessor: Accessor = Box::new(move |state: &DynamicMessage| {
                    let raw = state
                        .raw_by_index(index)
                        .ok_or(DynamicError::IndexOutOfBounds(index))?;
                    convert(&kind, raw)
                });
                (field.name.clone(), accessor)
            })
            .collect();

        Self {
            name: descriptor.name.clone(),
            descriptor: Arc::clone(descriptor),
            accessors,
        }
    }

    /// Type name (the descriptor's message name).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The descriptor this type was synthesized from.
    pub fn descriptor(&self) -> &Arc<MessageDescriptor> {
        &self.descriptor
    }

    /// Get an accessor by name.
    pub fn accessor(&self, name: &str) -> Option<&Accessor> {
        self.accessors
            .iter()
            .find(|(accessor_name, _)| accessor_name == name)
            .map(|(_, accessor)| accessor)
    }

    /// Iterate over accessor names in registration order.
    pub fn accessor_names(&self) -> impl Iterator<Item = &str> {
        self.accessors.iter().map(|(name, _)| name.as_str())
    }

    /// Number of accessors (== number of descriptor fields).
    pub fn accessor_count(&self) -> usize {
        self.accessors.len()
    }
}

impl std::fmt::Debug for DynamicType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DynamicType")
            .field("name", &self.name)
            .field("accessors", &self.accessors.len())
            .finish()
    }
}

/// An instance of a synthesized type: shared type, owned field state.
#[derive(Debug)]
pub struct DynamicInstance {
    ty: Arc<DynamicType>,
    state: DynamicMessage,
}

impl DynamicInstance {
    /// Create a default-initialized instance of the given type.
    pub fn new(ty: &Arc<DynamicType>) -> Self {
        Self {
            ty: Arc::clone(ty),
            state: DynamicMessage::new(ty.descriptor()),
        }
    }

    /// Create an instance over pre-materialized state (decoding seam).
    pub fn with_state(ty: &Arc<DynamicType>, state: DynamicMessage) -> Self {
        Self {
            ty: Arc::clone(ty),
            state,
        }
    }

    /// Invoke the named read accessor.
    pub fn call(&self, name: &str) -> Result<HostValue, DynamicError> {
        let accessor = self
            .ty
            .accessor(name)
            .ok_or_else(|| DynamicError::FieldNotFound(name.to_string()))?;
        accessor(&self.state)
    }

    /// The instance's type.
    pub fn type_of(&self) -> &Arc<DynamicType> {
        &self.ty
    }

    /// The instance's field state.
    pub fn state(&self) -> &DynamicMessage {
        &self.state
    }
}

/// Host object-system seam: registering a synthesized type and creating
/// instances of it.
pub trait DynamicObjectRuntime {
    /// Handle the host hands back for a defined type.
    type TypeHandle: Clone;

    /// Register a synthesized type with the host; a later definition under
    /// the same name supersedes the earlier one.
    fn define_type(&mut self, ty: DynamicType) -> Self::TypeHandle;

    /// Create a default-initialized instance of a defined type.
    fn instantiate(&self, handle: &Self::TypeHandle) -> DynamicInstance;
}

/// Table-backed runtime: types live in a name-keyed map and handles are
/// shared `Arc`s.
pub struct ScriptRuntime {
    types: HashMap<String, Arc<DynamicType>>,
}

impl ScriptRuntime {
    /// Create an empty runtime.
    pub fn new() -> Self {
        Self {
            types: HashMap::new(),
        }
    }

    /// Get the latest type defined under `name`.
    pub fn class(&self, name: &str) -> Option<Arc<DynamicType>> {
        self.types.get(name).cloned()
    }

    /// Iterate over defined type names.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(|s| s.as_str())
    }

    /// Number of defined types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Check if no types are defined.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Default for ScriptRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl DynamicObjectRuntime for ScriptRuntime {
    type TypeHandle = Arc<DynamicType>;

    fn define_type(&mut self, ty: DynamicType) -> Arc<DynamicType> {
        let ty = Arc::new(ty);
        if self
            .types
            .insert(ty.name().to_string(), ty.clone())
            .is_some()
        {
            debug!(type_name = ty.name(), "replacing previously defined type");
        }
        ty
    }

    fn instantiate(&self, handle: &Arc<DynamicType>) -> DynamicInstance {
        DynamicInstance::new(handle)
    }
}
