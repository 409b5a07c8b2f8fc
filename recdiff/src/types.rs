use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{DiffError, DiffResult};
use crate::naming::{to_property_name, to_raw_column_name, to_studly_name};
use crate::value::FieldValue;

/// Equivalent string encodings of a field's identity.
///
/// For a `first_name` column on the `person` table:
///
/// | key type        | rendered name       |
/// |-----------------|---------------------|
/// | `Column`        | `person.first_name` |
/// | `RawColumn`     | `FIRST_NAME`        |
/// | `Field`         | `first_name`        |
/// | `Property`      | `FirstName`         |
/// | `StudlyProperty`| `firstName`         |
/// | `Num`           | `0`                 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KeyType {
    #[default]
    Column,
    RawColumn,
    Field,
    Property,
    StudlyProperty,
    Num,
}

impl KeyType {
    /// Every representation, in declaration order.
    pub const ALL: [KeyType; 6] = [
        KeyType::Column,
        KeyType::RawColumn,
        KeyType::Field,
        KeyType::Property,
        KeyType::StudlyProperty,
        KeyType::Num,
    ];

    /// Representation the comparator enumerates fields in.
    pub const CANONICAL: KeyType = KeyType::Property;

    pub fn as_str(&self) -> &'static str {
        match self {
            KeyType::Column => "column",
            KeyType::RawColumn => "rawColumn",
            KeyType::Field => "field",
            KeyType::Property => "property",
            KeyType::StudlyProperty => "studlyProperty",
            KeyType::Num => "num",
        }
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KeyType {
    type Err = DiffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KeyType::ALL
            .into_iter()
            .find(|key_type| key_type.as_str() == s)
            .ok_or_else(|| DiffError::InvalidKeyType(s.to_string()))
    }
}

/// One field of a schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Zero-based position in schema order.
    pub position: usize,
    /// Canonical PascalCase property name.
    pub property: String,
    /// Column name as stored by the model layer.
    pub column: String,
}

/// Field set shared by every record of one schema.
///
/// Emitted by `#[derive(Record)]`; hand-built descriptors use the builder:
///
/// ```
/// use recdiff::types::{KeyType, SchemaDescriptor};
///
/// let schema = SchemaDescriptor::new("person", "person")
///     .field("first_name")
///     .field("age");
/// assert_eq!(schema.field_names(KeyType::Property), vec!["FirstName", "Age"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaDescriptor {
    pub name: String,
    pub table: String,
    pub fields: Vec<FieldDescriptor>,
}

impl SchemaDescriptor {
    pub fn new(name: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table: table.into(),
            fields: Vec::new(),
        }
    }

    /// Appends a field whose property name is derived from the column.
    pub fn field(self, column: impl Into<String>) -> Self {
        let column = column.into();
        let property = to_property_name(&column);
        self.field_with_property(column, property)
    }

    /// Appends a field with an explicit property name.
    pub fn field_with_property(mut self, column: impl Into<String>, property: impl Into<String>) -> Self {
        let position = self.fields.len();
        self.fields.push(FieldDescriptor {
            position,
            property: property.into(),
            column: column.into(),
        });
        self
    }

    /// Renders a field's name in the requested representation.
    pub fn render(&self, field: &FieldDescriptor, key_type: KeyType) -> String {
        match key_type {
            KeyType::Column => format!("{}.{}", self.table, field.column),
            KeyType::RawColumn => to_raw_column_name(&field.column),
            KeyType::Field => field.column.clone(),
            KeyType::Property => field.property.clone(),
            KeyType::StudlyProperty => to_studly_name(&field.property),
            KeyType::Num => field.position.to_string(),
        }
    }

    /// Lists every field name in schema order.
    pub fn field_names(&self, key_type: KeyType) -> Vec<String> {
        self.fields.iter().map(|field| self.render(field, key_type)).collect()
    }

    /// Looks up a field by its name in the given representation.
    pub fn find(&self, name: &str, key_type: KeyType) -> Option<&FieldDescriptor> {
        match key_type {
            KeyType::Num => {
                let position: usize = name.parse().ok()?;
                self.fields.get(position)
            }
            KeyType::Property => self.fields.iter().find(|field| field.property == name),
            KeyType::Field => self.fields.iter().find(|field| field.column == name),
            _ => self.fields.iter().find(|field| self.render(field, key_type) == name),
        }
    }

    /// Translates a field name between two representations.
    pub fn translate(&self, name: &str, from: KeyType, to: KeyType) -> DiffResult<String> {
        let field = self
            .find(name, from)
            .ok_or_else(|| DiffError::unknown_field(&self.name, name, from))?;
        Ok(self.render(field, to))
    }
}

/// Accessor for one field, bound when the record type is defined.
pub struct FieldAccessor<R> {
    /// Canonical property name the accessor reads.
    pub property: &'static str,
    pub get: fn(&R) -> FieldValue,
}

impl<R> FieldAccessor<R> {
    pub fn new(property: &'static str, get: fn(&R) -> FieldValue) -> Self {
        Self { property, get }
    }

    #[inline]
    pub fn read(&self, record: &R) -> FieldValue {
        (self.get)(record)
    }
}

impl<R> Clone for FieldAccessor<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for FieldAccessor<R> {}

impl<R> fmt::Debug for FieldAccessor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldAccessor").field("property", &self.property).finish()
    }
}

/// A data record exposing a fixed, enumerable set of named fields.
///
/// This trait is normally implemented by `#[derive(Record)]`.
pub trait Record: Sized {
    /// Identifier of the schema every instance of this type conforms to.
    const SCHEMA: &'static str;

    /// Schema identifier of this instance. Two records may only be compared when
    /// these are equal.
    fn schema_name(&self) -> &str {
        Self::SCHEMA
    }

    fn schema_descriptor() -> SchemaDescriptor;

    /// Accessors in schema order.
    fn accessors() -> Vec<FieldAccessor<Self>>;

    /// Makes the schema known to the global [`Registry`](crate::registry::Registry).
    fn ensure_registered() {
        crate::registry::register_descriptor(&Self::schema_descriptor());
    }
}
