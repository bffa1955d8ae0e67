use crate::record::FieldKind;

/// Errors raised while bridging record-model metadata into column
/// descriptors.
///
/// All of these indicate a structural mismatch between the persistence
/// configuration and the record model. None are transient: they are meant to
/// surface at schema-registration time and must not be retried or swallowed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The class could not be introspected through its metadata-only probe
    /// path, or is not a record model at all.
    #[error("cannot introspect model `{model}`: {reason}")]
    ClassIntrospection { model: &'static str, reason: String },

    /// The requested field name is absent from the class's registry.
    #[error("model `{model}` has no field named `{field}`")]
    FieldNotFound { model: &'static str, field: String },

    /// The named member exists but is not a recognized field container.
    #[error("member `{field}` of model `{model}` is not a field container")]
    FieldKind { model: &'static str, field: String },

    /// The field's variant has no native column type mapping and does not
    /// self-declare one through the extensible escape hatch.
    #[error("field `{field}` of model `{model}` has kind `{kind:?}` with no native column type")]
    UnsupportedFieldKind {
        model: &'static str,
        field: String,
        kind: FieldKind,
    },

    /// A value could not be coerced to the type a field or accessor expects.
    #[error("cannot convert {found} to {expected}")]
    TypeConversion {
        found: &'static str,
        expected: &'static str,
    },

    /// A result row was asked for a column past its end.
    #[error("result row has no column at index {index}")]
    ColumnIndex { index: usize },
}
