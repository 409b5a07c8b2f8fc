use thiserror::Error;

use crate::types::KeyType;

/// Invalid-argument failures raised by the comparator and the schema metadata layer.
///
/// Every variant is raised synchronously and never recovered internally. A call that
/// fails produces no diff output at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiffError {
    /// The two records do not share a schema.
    #[error("both records should have the same schema (got '{left}' and '{right}')")]
    SchemaMismatch { left: String, right: String },

    /// Both sides were given the same label.
    #[error("record labels should be different (both are '{0}')")]
    DuplicateLabel(String),

    /// The metadata service does not support the requested field-name representation.
    #[error("unsupported key type '{0}'")]
    UnsupportedKeyType(KeyType),

    /// A key type tag could not be parsed.
    #[error("invalid key type '{0}'")]
    InvalidKeyType(String),

    /// No schema with this name is known to the metadata service.
    #[error("unknown schema '{0}'")]
    UnknownSchema(String),

    /// The field is not part of the schema in the given representation.
    #[error("unknown field '{field}' ({key_type}) in schema '{schema}'")]
    UnknownField {
        schema: String,
        field: String,
        key_type: KeyType,
    },
}

impl DiffError {
    pub(crate) fn unknown_field(schema: impl Into<String>, field: impl Into<String>, key_type: KeyType) -> Self {
        Self::UnknownField {
            schema: schema.into(),
            field: field.into(),
            key_type,
        }
    }
}

/// Convenience alias for comparator results.
pub type DiffResult<T> = Result<T, DiffError>;
