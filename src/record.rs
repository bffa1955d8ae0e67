use std::any::Any;

use crate::{schema::ColumnType, value::Value, Result};

/// Variant tag of a self-describing record field container.
///
/// This is a closed set; the one escape hatch is `Custom`, which lets a
/// third-party container self-declare its native column type through
/// [`FieldValue::custom_column_type`] instead of widening the dispatch
/// table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Bool,
    Timestamp,
    Double,
    I32,
    I64,
    Decimal,
    TimeZone,
    String,
    Password,
    Bytes,
    Locale,
    EnumOrdinal,
    EnumName,
    Custom,
}

/// A boxed, self-describing field container owned by a record instance.
///
/// The container, not the bridge, owns validation and coercion: every value
/// hydrated from a result row goes through [`set`](FieldValue::set), and the
/// write path reads back whatever [`get`](FieldValue::get) reports.
pub trait FieldValue: Any {
    fn kind(&self) -> FieldKind;

    /// True if the field may be empty.
    fn optional(&self) -> bool;

    /// Declared maximum length. Only string fields report one.
    fn max_length(&self) -> Option<u64> {
        None
    }

    /// Current boxed value, `None` when the field is empty.
    fn get(&self) -> Option<Value>;

    /// Validating coercion from an arbitrary external value.
    ///
    /// `Value::Null` clears an optional field and must fail for a required
    /// one.
    fn set(&mut self, value: Value) -> Result<()>;

    /// Native column type self-declared by a [`FieldKind::Custom`] field.
    fn custom_column_type(&self) -> Option<ColumnType> {
        None
    }

    /// True if this container holds a reference back to the record that
    /// owns it rather than a leaf value.
    fn is_back_reference(&self) -> bool {
        false
    }
}

/// A named member of a record model.
///
/// `field` is `None` when the member exists but is not a field container;
/// resolving such a member by name is a [`FieldKind`
/// error](crate::Error::FieldKind) rather than a not-found.
pub struct Member<'a> {
    pub name: &'static str,
    pub field: Option<&'a dyn FieldValue>,
}

/// A class whose persistable state is expressed as self-describing field
/// containers.
///
/// Satisfying this trait is the capability check the bridge runs before
/// taking over metadata construction; anything else falls through to the
/// host engine's default path.
pub trait Record: Any {
    /// All named members in declaration order, field containers or not.
    fn members(&self) -> Vec<Member<'_>>;

    fn field(&self, name: &str) -> Option<&dyn FieldValue>;

    fn field_mut(&mut self, name: &str) -> Option<&mut dyn FieldValue>;
}
