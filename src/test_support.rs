//! Shared fixtures: a small record-model framework implementing the
//! contracts the bridge consumes.

use chrono::NaiveDate;

use crate::{
    model::ModelType,
    record::{FieldKind, FieldValue, Member, Record},
    value::Value,
    Error, Result,
};

pub(crate) struct StringField {
    value: Option<String>,
    optional: bool,
    max_length: Option<u64>,
}

impl StringField {
    pub(crate) fn required(max_length: u64) -> Self {
        Self {
            value: None,
            optional: false,
            max_length: Some(max_length),
        }
    }

    pub(crate) fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl FieldValue for StringField {
    fn kind(&self) -> FieldKind {
        FieldKind::String
    }

    fn optional(&self) -> bool {
        self.optional
    }

    fn max_length(&self) -> Option<u64> {
        self.max_length
    }

    fn get(&self) -> Option<Value> {
        self.value.clone().map(Value::String)
    }

    fn set(&mut self, value: Value) -> Result<()> {
        match value {
            Value::String(text) => {
                if let Some(max) = self.max_length {
                    if text.len() as u64 > max {
                        return Err(Error::TypeConversion {
                            found: "string past its declared length",
                            expected: "string within length",
                        });
                    }
                }
                self.value = Some(text);
                Ok(())
            }
            Value::Null if self.optional => {
                self.value = None;
                Ok(())
            }
            other => Err(Error::TypeConversion {
                found: other.type_name(),
                expected: "string",
            }),
        }
    }
}

pub(crate) struct I32Field {
    value: Option<i32>,
    optional: bool,
}

impl I32Field {
    pub(crate) fn nullable() -> Self {
        Self {
            value: None,
            optional: true,
        }
    }
}

impl FieldValue for I32Field {
    fn kind(&self) -> FieldKind {
        FieldKind::I32
    }

    fn optional(&self) -> bool {
        self.optional
    }

    fn get(&self) -> Option<Value> {
        self.value.map(Value::I32)
    }

    fn set(&mut self, value: Value) -> Result<()> {
        match value {
            Value::I32(n) => {
                self.value = Some(n);
                Ok(())
            }
            Value::Null if self.optional => {
                self.value = None;
                Ok(())
            }
            other => Err(Error::TypeConversion {
                found: other.type_name(),
                expected: "i32",
            }),
        }
    }
}

/// Stores a civil date but declares itself a timestamp field, so the write
/// path has a calendar value to normalize.
pub(crate) struct DateField {
    value: Option<NaiveDate>,
    optional: bool,
}

impl DateField {
    pub(crate) fn nullable() -> Self {
        Self {
            value: None,
            optional: true,
        }
    }

    pub(crate) fn assign(&mut self, value: Value) -> Result<()> {
        FieldValue::set(self, value)
    }
}

impl FieldValue for DateField {
    fn kind(&self) -> FieldKind {
        FieldKind::Timestamp
    }

    fn optional(&self) -> bool {
        self.optional
    }

    fn get(&self) -> Option<Value> {
        self.value.map(Value::Date)
    }

    fn set(&mut self, value: Value) -> Result<()> {
        match value {
            Value::Date(date) => {
                self.value = Some(date);
                Ok(())
            }
            Value::Timestamp(at) => {
                self.value = Some(at.date());
                Ok(())
            }
            Value::Null if self.optional => {
                self.value = None;
                Ok(())
            }
            other => Err(Error::TypeConversion {
                found: other.type_name(),
                expected: "date",
            }),
        }
    }
}

/// Extensible-kind container with no self-declared native type.
pub(crate) struct CustomField {
    value: Option<Value>,
}

impl CustomField {
    pub(crate) fn undeclared() -> Self {
        Self { value: None }
    }
}

impl FieldValue for CustomField {
    fn kind(&self) -> FieldKind {
        FieldKind::Custom
    }

    fn optional(&self) -> bool {
        true
    }

    fn get(&self) -> Option<Value> {
        self.value.clone()
    }

    fn set(&mut self, value: Value) -> Result<()> {
        self.value = Some(value);
        Ok(())
    }
}

/// Container holding a reference back to the record that owns it.
pub(crate) struct ParentRef;

impl FieldValue for ParentRef {
    fn kind(&self) -> FieldKind {
        FieldKind::Custom
    }

    fn optional(&self) -> bool {
        true
    }

    fn get(&self) -> Option<Value> {
        None
    }

    fn set(&mut self, value: Value) -> Result<()> {
        Err(Error::TypeConversion {
            found: value.type_name(),
            expected: "owning record back-reference",
        })
    }

    fn is_back_reference(&self) -> bool {
        true
    }
}

pub(crate) struct Person {
    pub(crate) name: StringField,
    pub(crate) age: I32Field,
    pub(crate) born: DateField,
    pub(crate) owner: ParentRef,
    #[allow(dead_code)]
    pub(crate) audit_note: String,
}

impl Default for Person {
    fn default() -> Self {
        Self {
            name: StringField::required(40),
            age: I32Field::nullable(),
            born: DateField::nullable(),
            owner: ParentRef,
            audit_note: String::new(),
        }
    }
}

impl Record for Person {
    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member {
                name: "name",
                field: Some(&self.name),
            },
            Member {
                name: "age",
                field: Some(&self.age),
            },
            Member {
                name: "born",
                field: Some(&self.born),
            },
            Member {
                name: "owner",
                field: Some(&self.owner),
            },
            // Declared on the model but not a field container.
            Member {
                name: "audit_note",
                field: None,
            },
        ]
    }

    fn field(&self, name: &str) -> Option<&dyn FieldValue> {
        match name {
            "name" => Some(&self.name),
            "age" => Some(&self.age),
            "born" => Some(&self.born),
            "owner" => Some(&self.owner),
            _ => None,
        }
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut dyn FieldValue> {
        match name {
            "name" => Some(&mut self.name),
            "age" => Some(&mut self.age),
            "born" => Some(&mut self.born),
            "owner" => Some(&mut self.owner),
            _ => None,
        }
    }
}

pub(crate) fn person_model() -> ModelType {
    ModelType::record("person", Person::default)
}
