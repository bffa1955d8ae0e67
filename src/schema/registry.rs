use indexmap::IndexMap;

use crate::{
    record::{FieldKind, Record},
    schema::column::ColumnType,
    Error, Result,
};

/// Metadata for one record field, extracted once from a probe instance.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldMeta {
    pub name: &'static str,

    pub kind: FieldKind,

    /// Mirrors the field container's optionality flag.
    pub nullable: bool,

    /// Declared maximum length; string fields only.
    pub max_length: Option<u64>,

    /// Native type self-declared by a `Custom` field.
    pub custom_ty: Option<ColumnType>,
}

#[derive(Debug)]
enum Entry {
    Field(FieldMeta),
    /// Named member that is not a field container.
    Opaque,
}

/// Per-class map from field name to extracted metadata.
///
/// Built from a single probe instance on first resolution and never
/// refreshed; class shape is immutable for the process lifetime.
#[derive(Debug)]
pub struct FieldRegistry {
    model: &'static str,
    entries: IndexMap<&'static str, Entry>,
}

impl FieldRegistry {
    pub(crate) fn from_probe(model: &'static str, probe: &dyn Record) -> Self {
        let mut entries = IndexMap::new();

        for member in probe.members() {
            let entry = match member.field {
                Some(field) => Entry::Field(FieldMeta {
                    name: member.name,
                    kind: field.kind(),
                    nullable: field.optional(),
                    max_length: field.max_length(),
                    custom_ty: field.custom_column_type(),
                }),
                None => Entry::Opaque,
            };
            entries.insert(member.name, entry);
        }

        Self { model, entries }
    }

    pub fn model(&self) -> &'static str {
        self.model
    }

    /// Number of named members, field containers or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Field names in declaration order, opaque members excluded.
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().filter_map(|(name, entry)| match entry {
            Entry::Field(_) => Some(*name),
            Entry::Opaque => None,
        })
    }

    pub fn resolve(&self, field: &str) -> Result<&FieldMeta> {
        match self.entries.get(field) {
            Some(Entry::Field(meta)) => Ok(meta),
            Some(Entry::Opaque) => Err(Error::FieldKind {
                model: self.model,
                field: field.to_string(),
            }),
            None => Err(Error::FieldNotFound {
                model: self.model,
                field: field.to_string(),
            }),
        }
    }
}
