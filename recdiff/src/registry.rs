use crate::errors::{DiffError, DiffResult};
use crate::types::{KeyType, SchemaDescriptor};
use std::collections::HashMap;
use std::sync::{OnceLock, PoisonError, RwLock};

/// Schema metadata consumed by the comparator.
///
/// Implementations list a schema's fields in a stable order and translate field names
/// between representations. [`Registry`] is the default implementation.
pub trait SchemaMetadata {
    /// Field names of `schema` in schema order, rendered as `key_type`.
    fn field_names(&self, schema: &str, key_type: KeyType) -> DiffResult<Vec<String>>;

    fn translate_field_name(&self, schema: &str, name: &str, from: KeyType, to: KeyType) -> DiffResult<String>;

    /// Representations this service can translate between.
    fn key_types(&self) -> &[KeyType] {
        &KeyType::ALL
    }
}

impl<M: SchemaMetadata + ?Sized> SchemaMetadata for &M {
    fn field_names(&self, schema: &str, key_type: KeyType) -> DiffResult<Vec<String>> {
        (**self).field_names(schema, key_type)
    }

    fn translate_field_name(&self, schema: &str, name: &str, from: KeyType, to: KeyType) -> DiffResult<String> {
        (**self).translate_field_name(schema, name, from, to)
    }

    fn key_types(&self) -> &[KeyType] {
        (**self).key_types()
    }
}

static REGISTRY: OnceLock<RwLock<HashMap<String, SchemaDescriptor>>> = OnceLock::new();

fn registry() -> &'static RwLock<HashMap<String, SchemaDescriptor>> {
    REGISTRY.get_or_init(|| RwLock::new(HashMap::new()))
}

pub fn register_descriptor(descriptor: &SchemaDescriptor) {
    log::debug!(
        "registering schema '{}' ({} fields)",
        descriptor.name,
        descriptor.fields.len()
    );
    registry()
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(descriptor.name.clone(), descriptor.clone());
}

pub fn get_descriptor(schema: &str) -> Option<SchemaDescriptor> {
    registry()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(schema)
        .cloned()
}

/// Names of every registered schema, sorted.
pub fn registered_schemas() -> Vec<String> {
    let mut names: Vec<String> = registry()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .keys()
        .cloned()
        .collect();
    names.sort();
    names
}

/// Process-global schema registry.
///
/// Record types derived with `#[derive(Record)]` register themselves the first time
/// their descriptor is requested.
#[derive(Debug, Clone, Copy, Default)]
pub struct Registry;

impl Registry {
    fn with_descriptor<T>(schema: &str, f: impl FnOnce(&SchemaDescriptor) -> DiffResult<T>) -> DiffResult<T> {
        let guard = registry().read().unwrap_or_else(PoisonError::into_inner);
        let descriptor = guard
            .get(schema)
            .ok_or_else(|| DiffError::UnknownSchema(schema.to_string()))?;
        f(descriptor)
    }
}

impl SchemaMetadata for Registry {
    fn field_names(&self, schema: &str, key_type: KeyType) -> DiffResult<Vec<String>> {
        Self::with_descriptor(schema, |descriptor| Ok(descriptor.field_names(key_type)))
    }

    fn translate_field_name(&self, schema: &str, name: &str, from: KeyType, to: KeyType) -> DiffResult<String> {
        Self::with_descriptor(schema, |descriptor| descriptor.translate(name, from, to))
    }
}
