use std::{any::Any, sync::Arc};

use crate::{
    model::ModelType,
    record::FieldValue,
    schema::{
        cache::MetadataCache,
        column::{ColumnDescriptor, PropertyHandles},
        mapping,
    },
    value::Value,
    Result,
};

/// A zero-argument factory producing blank instances for row hydration.
pub type InstanceFactory = Arc<dyn Fn() -> Box<dyn Any> + Send + Sync>;

/// The host engine's metadata seam.
///
/// The engine calls this once per (class, field) at schema registration to
/// obtain column descriptors, once per class for its instance factory, and
/// during projection planning to decide which instantiated fields a narrow
/// query must still fetch.
pub trait ColumnFactory: Send + Sync {
    /// Builds the column descriptor for `field` of `model`.
    ///
    /// `property`, `sample`, and `optimistic_counter` feed the default
    /// path's own deduction rules; the record path ignores them because
    /// type and optionality come from the field descriptor itself.
    fn build(
        &self,
        model: &ModelType,
        field: &str,
        property: Option<PropertyHandles>,
        sample: Option<&Value>,
        optimistic_counter: bool,
    ) -> Result<ColumnDescriptor>;

    /// Factory for blank instances of `model`.
    fn instance_factory(&self, model: &ModelType) -> Result<InstanceFactory>;

    /// True if `field` must be skipped when the engine scans `instance` to
    /// decide which columns a narrow projection still has to fetch.
    fn exclude_from_reference_scan(&self, instance: &dyn Any, field: &dyn FieldValue) -> bool;
}

/// The bridge implementation of [`ColumnFactory`].
///
/// Record models are resolved through the injected [`MetadataCache`] and
/// classified by the type mapper; any other class is delegated verbatim to
/// the host's default factory, so junction tables and other plain classes
/// keep their normal behavior.
pub struct RecordColumnFactory {
    cache: Arc<MetadataCache>,
    fallback: Box<dyn ColumnFactory>,
}

impl RecordColumnFactory {
    pub fn new(cache: Arc<MetadataCache>, fallback: Box<dyn ColumnFactory>) -> Self {
        Self { cache, fallback }
    }

    pub fn cache(&self) -> &MetadataCache {
        &self.cache
    }
}

impl ColumnFactory for RecordColumnFactory {
    fn build(
        &self,
        model: &ModelType,
        field: &str,
        property: Option<PropertyHandles>,
        sample: Option<&Value>,
        optimistic_counter: bool,
    ) -> Result<ColumnDescriptor> {
        let Some(hooks) = model.record_model() else {
            return self
                .fallback
                .build(model, field, property, sample, optimistic_counter);
        };

        let meta = self.cache.resolve(model, field)?;
        let (ty, length) = mapping::column_type(model.name(), &meta)?;

        Ok(ColumnDescriptor::for_record_field(
            model.name(),
            meta.name,
            ty,
            meta.nullable,
            length,
            hooks.downcast_ref,
            hooks.downcast_mut,
        ))
    }

    fn instance_factory(&self, model: &ModelType) -> Result<InstanceFactory> {
        match model.record_model() {
            // Blank records come from the model's registered factory, never
            // a bare constructor: field containers must be wired to their
            // owning instance at construction time.
            Some(hooks) => Ok(hooks.construct.clone()),
            None => self.fallback.instance_factory(model),
        }
    }

    fn exclude_from_reference_scan(&self, _instance: &dyn Any, field: &dyn FieldValue) -> bool {
        // A container holding a reference back to its owning record would
        // make every narrow projection look like it needs the whole record.
        field.is_back_reference()
    }
}
