use std::any::Any;

use crate::{record::Record, value::Value, Error, Result};

/// Native column types, from the relational engine's point of view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnType {
    Boolean,

    /// Signed integer of `n` bytes.
    Integer(u8),

    /// Double-precision float.
    Double,

    /// Unconstrained text. String length overrides live on the descriptor,
    /// not the type.
    Text,

    /// Arbitrary-precision decimal.
    Numeric,

    /// Raw byte sequence.
    Blob,

    /// SQL timestamp.
    Timestamp,

    /// String-backed enumeration value.
    Enum,

    /// Type self-declared by an extensible field kind.
    Custom(String),
}

/// Result-row seam: hands out the raw value the driver read at `index`.
pub trait SqlRow {
    fn column(&self, index: usize) -> Result<Value>;
}

impl SqlRow for [Value] {
    fn column(&self, index: usize) -> Result<Value> {
        self.get(index).cloned().ok_or(Error::ColumnIndex { index })
    }
}

impl SqlRow for Vec<Value> {
    fn column(&self, index: usize) -> Result<Value> {
        self.as_slice().column(index)
    }
}

/// Host-supplied accessor pair for one property of a plain (non-record)
/// class. The default metadata path builds descriptors around these.
#[derive(Debug, Clone, Copy)]
pub struct PropertyHandles {
    pub get: fn(&dyn Any) -> Result<Value>,
    pub set: fn(&mut dyn Any, Value) -> Result<()>,
}

#[derive(Debug)]
enum Accessor {
    /// Delegates both directions to the record field's own value box.
    RecordField {
        model: &'static str,
        field: &'static str,
        downcast_ref: fn(&dyn Any) -> Option<&dyn Record>,
        downcast_mut: fn(&mut dyn Any) -> Option<&mut dyn Record>,
    },
    Property(PropertyHandles),
}

/// The relational engine's metadata unit for one persisted column.
///
/// Built once per (class, field) pair, immutable afterwards, and shared
/// read-only across concurrent query executions.
#[derive(Debug)]
pub struct ColumnDescriptor {
    name: String,
    ty: ColumnType,
    nullable: bool,
    length: Option<u64>,
    accessor: Accessor,
}

impl ColumnDescriptor {
    pub(crate) fn for_record_field(
        model: &'static str,
        field: &'static str,
        ty: ColumnType,
        nullable: bool,
        length: Option<u64>,
        downcast_ref: fn(&dyn Any) -> Option<&dyn Record>,
        downcast_mut: fn(&mut dyn Any) -> Option<&mut dyn Record>,
    ) -> Self {
        Self {
            name: field.to_string(),
            ty,
            nullable,
            length,
            accessor: Accessor::RecordField {
                model,
                field,
                downcast_ref,
                downcast_mut,
            },
        }
    }

    /// Descriptor for a plain-class property, read and written through
    /// host-supplied handles. This is the constructor default metadata
    /// factories use.
    pub fn for_property(
        name: impl Into<String>,
        ty: ColumnType,
        nullable: bool,
        length: Option<u64>,
        property: PropertyHandles,
    ) -> Self {
        Self {
            name: name.into(),
            ty,
            nullable,
            length,
            accessor: Accessor::Property(property),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared column value type.
    pub fn ty(&self) -> &ColumnType {
        &self.ty
    }

    /// The wrapped value type. Identical to [`ty`](Self::ty): the bridge
    /// adds no box/unbox layer beyond what the record field provides.
    pub fn wrapped_ty(&self) -> &ColumnType {
        &self.ty
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }

    /// Declared length override. `None` defers to the engine's default
    /// length computation.
    pub fn length(&self) -> Option<u64> {
        self.length
    }

    /// Hydrates this column into `instance` from a result row.
    ///
    /// The raw value read at `index` goes through the record field's own
    /// validating `set`, never a raw assignment, so the container's
    /// coercion rules run on every hydration. Null is passed through as
    /// well: it clears an optional field and fails a required one.
    pub fn read_row(&self, instance: &mut dyn Any, row: &dyn SqlRow, index: usize) -> Result<()> {
        let raw = row.column(index)?;

        match &self.accessor {
            Accessor::RecordField {
                model,
                field,
                downcast_mut,
                ..
            } => downcast_mut(instance)
                .ok_or(Error::TypeConversion {
                    found: "instance of another class",
                    expected: "owning record model",
                })?
                .field_mut(field)
                .ok_or_else(|| Error::FieldNotFound {
                    model: *model,
                    field: field.to_string(),
                })?
                .set(raw),
            Accessor::Property(handles) => (handles.set)(instance, raw),
        }
    }

    /// Reads the current value of this column for writing.
    ///
    /// Calendar values are normalized to a SQL timestamp, any other present
    /// value passes through unchanged, and an empty field yields
    /// [`Value::Null`].
    pub fn write_value(&self, instance: &dyn Any) -> Result<Value> {
        match &self.accessor {
            Accessor::RecordField {
                model,
                field,
                downcast_ref,
                ..
            } => {
                let container = downcast_ref(instance)
                    .ok_or(Error::TypeConversion {
                        found: "instance of another class",
                        expected: "owning record model",
                    })?
                    .field(field)
                    .ok_or_else(|| Error::FieldNotFound {
                        model: *model,
                        field: field.to_string(),
                    })?;

                Ok(match container.get() {
                    Some(value) => value.into_sql_timestamp(),
                    None => Value::Null,
                })
            }
            Accessor::Property(handles) => (handles.get)(instance),
        }
    }
}
