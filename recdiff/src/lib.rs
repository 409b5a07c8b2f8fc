//! recdiff core library.
//!
//! Compares two records of the same schema field by field and reports the fields
//! whose values differ, keyed by the caller's choice of field-name representation.
//! Record types get their field-descriptor table from `#[derive(Record)]`.

extern crate self as recdiff;

pub mod comparator;
pub mod config;
pub mod diff;
pub mod errors;
pub mod naming;
pub mod registry;
pub mod render;
pub mod types;
pub mod value;

pub use comparator::{DEFAULT_LEFT_LABEL, DEFAULT_RIGHT_LABEL, RecordDiff};
pub use config::{DiffConfig, DiffSettings};
pub use diff::{Diff, FieldChange};
pub use errors::*;
pub use recdiff_macros::Record;
pub use registry::{Registry, SchemaMetadata};
pub use render::RenderOptions;
pub use types::{FieldAccessor, FieldDescriptor, KeyType, Record, SchemaDescriptor};
pub use value::{FieldValue, ToFieldValue};
