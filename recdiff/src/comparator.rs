//! Field-by-field comparison of two records that share a schema.
//!
//! ```
//! use recdiff::{Record, RecordDiff};
//!
//! #[derive(Record)]
//! struct Person {
//!     first_name: String,
//!     age: u32,
//! }
//!
//! let before = Person { first_name: "Ann".into(), age: 30 };
//! let after = Person { first_name: "Ann".into(), age: 31 };
//!
//! let diff = RecordDiff::with_labels(&before, &after, "before", "after")?;
//! assert_eq!(diff.count()?, 1);
//! let changes = diff.diff()?;
//! assert_eq!(changes.fields().collect::<Vec<_>>(), vec!["person.age"]);
//! # Ok::<(), recdiff::DiffError>(())
//! ```

use crate::config::DiffConfig;
use crate::diff::{Diff, FieldChange};
use crate::errors::{DiffError, DiffResult};
use crate::registry::{Registry, SchemaMetadata};
use crate::types::{FieldAccessor, KeyType, Record};
use crate::value::FieldValue;

/// Label given to the first record when none is supplied.
pub const DEFAULT_LEFT_LABEL: &str = "object1";
/// Label given to the second record when none is supplied.
pub const DEFAULT_RIGHT_LABEL: &str = "object2";

/// Compares two records of the same schema.
///
/// Immutable once constructed. Construction fails when the records belong to different
/// schemas or when both labels are equal.
pub struct RecordDiff<'a, A, B = A, M = Registry> {
    left: &'a A,
    right: &'a B,
    left_label: String,
    right_label: String,
    metadata: M,
    key_type: KeyType,
    left_accessors: Vec<FieldAccessor<A>>,
    right_accessors: Vec<FieldAccessor<B>>,
}

impl<'a, A: Record, B: Record> RecordDiff<'a, A, B, Registry> {
    /// Compares against the global registry using the `object1`/`object2` labels.
    pub fn new(left: &'a A, right: &'a B) -> DiffResult<Self> {
        Self::with_labels(left, right, DEFAULT_LEFT_LABEL, DEFAULT_RIGHT_LABEL)
    }

    pub fn with_labels(
        left: &'a A,
        right: &'a B,
        left_label: impl Into<String>,
        right_label: impl Into<String>,
    ) -> DiffResult<Self> {
        Self::with_metadata(left, right, left_label, right_label, Registry)
    }

    /// Takes labels and the default key type from `config`.
    pub fn from_config(left: &'a A, right: &'a B, config: &DiffConfig) -> DiffResult<Self> {
        let settings = &config.diff;
        Ok(Self::with_labels(left, right, settings.left_label.as_str(), settings.right_label.as_str())?
            .key_type(settings.key_type))
    }
}

impl<'a, A: Record, B: Record, M: SchemaMetadata> RecordDiff<'a, A, B, M> {
    /// Compares using a caller-supplied metadata service.
    ///
    /// Both record types are registered with the global registry first, so passing
    /// [`Registry`] here behaves like [`with_labels`](RecordDiff::with_labels).
    pub fn with_metadata(
        left: &'a A,
        right: &'a B,
        left_label: impl Into<String>,
        right_label: impl Into<String>,
        metadata: M,
    ) -> DiffResult<Self> {
        A::ensure_registered();
        B::ensure_registered();

        if left.schema_name() != right.schema_name() {
            return Err(DiffError::SchemaMismatch {
                left: left.schema_name().to_string(),
                right: right.schema_name().to_string(),
            });
        }

        let left_label = left_label.into();
        let right_label = right_label.into();
        if left_label == right_label {
            return Err(DiffError::DuplicateLabel(left_label));
        }

        Ok(Self {
            left,
            right,
            left_label,
            right_label,
            metadata,
            key_type: KeyType::default(),
            left_accessors: A::accessors(),
            right_accessors: B::accessors(),
        })
    }

    /// Sets the representation [`diff`](Self::diff) keys its result by.
    pub fn key_type(mut self, key_type: KeyType) -> Self {
        self.key_type = key_type;
        self
    }

    pub fn schema(&self) -> &str {
        self.left.schema_name()
    }

    pub fn left(&self) -> &'a A {
        self.left
    }

    pub fn right(&self) -> &'a B {
        self.right
    }

    pub fn labels(&self) -> (&str, &str) {
        (&self.left_label, &self.right_label)
    }

    /// Differing fields keyed by the default key type.
    pub fn diff(&self) -> DiffResult<Diff> {
        self.diff_as(self.key_type)
    }

    /// Differing fields keyed by `key_type`.
    ///
    /// Fields are visited in the schema's canonical order and compared with strict,
    /// type-sensitive inequality.
    pub fn diff_as(&self, key_type: KeyType) -> DiffResult<Diff> {
        self.ensure_supported(key_type)?;

        let schema = self.schema();
        let names = self.metadata.field_names(schema, KeyType::CANONICAL)?;
        let mut diff = Diff::new();

        for name in names {
            let left = read_field(&self.left_accessors, self.left, schema, &name)?;
            let right = read_field(&self.right_accessors, self.right, schema, &name)?;
            if left == right {
                continue;
            }

            let key = self.translate(&name, KeyType::CANONICAL, key_type)?;
            log::trace!("{schema}.{name} differs: {left} != {right}");
            diff.insert(
                key,
                FieldChange::new(self.left_label.as_str(), left, self.right_label.as_str(), right),
            );
        }

        log::debug!(
            "compared '{}' records keyed by {key_type}: {} field(s) differ",
            schema,
            diff.len()
        );
        Ok(diff)
    }

    /// Number of differing fields.
    pub fn count(&self) -> DiffResult<usize> {
        Ok(self.diff()?.len())
    }

    pub fn is_different(&self) -> DiffResult<bool> {
        Ok(self.count()? != 0)
    }

    fn ensure_supported(&self, key_type: KeyType) -> DiffResult<()> {
        if self.metadata.key_types().contains(&key_type) {
            Ok(())
        } else {
            Err(DiffError::UnsupportedKeyType(key_type))
        }
    }

    fn translate(&self, name: &str, from: KeyType, to: KeyType) -> DiffResult<String> {
        self.ensure_supported(from)?;
        self.ensure_supported(to)?;
        if from == to {
            return Ok(name.to_string());
        }
        self.metadata.translate_field_name(self.schema(), name, from, to)
    }
}

fn read_field<R>(accessors: &[FieldAccessor<R>], record: &R, schema: &str, property: &str) -> DiffResult<FieldValue> {
    accessors
        .iter()
        .find(|accessor| accessor.property == property)
        .map(|accessor| accessor.read(record))
        .ok_or_else(|| DiffError::unknown_field(schema, property, KeyType::CANONICAL))
}
