use crate::{
    record::FieldKind,
    schema::{column::ColumnType, registry::FieldMeta},
    Error, Result,
};

/// Maps a resolved field descriptor to its native column type and, for
/// string fields, the declared length override.
///
/// Total over the closed [`FieldKind`] set. `Custom` fields must
/// self-declare a native type; a field with no mapping fails with an error
/// naming the model and field, so the mismatch surfaces at registration
/// time rather than during query execution.
pub fn column_type(model: &'static str, meta: &FieldMeta) -> Result<(ColumnType, Option<u64>)> {
    let ty = match meta.kind {
        FieldKind::Bool => ColumnType::Boolean,
        FieldKind::Timestamp => ColumnType::Timestamp,
        FieldKind::Double => ColumnType::Double,
        FieldKind::I32 => ColumnType::Integer(4),
        FieldKind::I64 => ColumnType::Integer(8),
        FieldKind::Decimal => ColumnType::Numeric,
        // Coarse string mappings; no precision or format hints survive.
        FieldKind::TimeZone | FieldKind::String | FieldKind::Password | FieldKind::Locale => {
            ColumnType::Text
        }
        FieldKind::Bytes => ColumnType::Blob,
        FieldKind::EnumOrdinal | FieldKind::EnumName => ColumnType::Enum,
        FieldKind::Custom => match &meta.custom_ty {
            Some(ty) => ty.clone(),
            None => {
                return Err(Error::UnsupportedFieldKind {
                    model,
                    field: meta.name.to_string(),
                    kind: meta.kind,
                })
            }
        },
    };

    let length = match meta.kind {
        FieldKind::String => meta.max_length,
        _ => None,
    };

    Ok((ty, length))
}
