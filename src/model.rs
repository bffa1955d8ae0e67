use std::{
    any::{Any, TypeId},
    fmt,
    sync::Arc,
};

use crate::{record::Record, Result};

type ProbeFn = Arc<dyn Fn() -> Result<Box<dyn Record>> + Send + Sync>;
type ConstructFn = Arc<dyn Fn() -> Box<dyn Any> + Send + Sync>;

/// Construction and downcast hooks a record model registers at definition
/// time.
///
/// This replaces companion-singleton discovery by naming convention: each
/// model class hands the bridge its probe path and constructing factory
/// explicitly when its [`ModelType`] handle is created.
#[derive(Clone)]
pub struct RecordModel {
    /// Metadata-only construction. The instance is discarded as soon as its
    /// field registry has been extracted.
    pub(crate) probe: ProbeFn,

    /// Constructs a blank instance wired for real use. Field containers are
    /// bound to their owning instance here, which is why the engine must
    /// never reach for a bare constructor instead.
    pub(crate) construct: ConstructFn,

    pub(crate) downcast_ref: fn(&dyn Any) -> Option<&dyn Record>,
    pub(crate) downcast_mut: fn(&mut dyn Any) -> Option<&mut dyn Record>,
}

/// Runtime handle for a persistable class.
///
/// Record models carry their [`RecordModel`] hooks; plain classes carry
/// none and take the host engine's default metadata path.
#[derive(Clone)]
pub struct ModelType {
    name: &'static str,
    id: TypeId,
    record: Option<RecordModel>,
}

impl ModelType {
    /// Handle for a record model class.
    ///
    /// `factory` is the model's registered constructing factory; probe
    /// instances come from `Default`, the metadata-only construction path.
    pub fn record<T, F>(name: &'static str, factory: F) -> Self
    where
        T: Record + Default,
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self::record_with_probe(name, || Ok(T::default()), factory)
    }

    /// Handle for a record model whose probe path can fail.
    pub fn record_with_probe<T, P, F>(name: &'static str, probe: P, factory: F) -> Self
    where
        T: Record,
        P: Fn() -> Result<T> + Send + Sync + 'static,
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self {
            name,
            id: TypeId::of::<T>(),
            record: Some(RecordModel {
                probe: Arc::new(move || probe().map(|instance| Box::new(instance) as Box<dyn Record>)),
                construct: Arc::new(move || Box::new(factory()) as Box<dyn Any>),
                downcast_ref: downcast_ref_impl::<T>,
                downcast_mut: downcast_mut_impl::<T>,
            }),
        }
    }

    /// Handle for a plain class with no record capability.
    pub fn plain<T: Any>(name: &'static str) -> Self {
        Self {
            name,
            id: TypeId::of::<T>(),
            record: None,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn is_record(&self) -> bool {
        self.record.is_some()
    }

    pub(crate) fn record_model(&self) -> Option<&RecordModel> {
        self.record.as_ref()
    }
}

fn downcast_ref_impl<T: Record>(instance: &dyn Any) -> Option<&dyn Record> {
    instance.downcast_ref::<T>().map(|record| record as &dyn Record)
}

fn downcast_mut_impl<T: Record>(instance: &mut dyn Any) -> Option<&mut dyn Record> {
    instance
        .downcast_mut::<T>()
        .map(|record| record as &mut dyn Record)
}

impl PartialEq for ModelType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ModelType {}

impl fmt::Debug for ModelType {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("ModelType")
            .field("name", &self.name)
            .field("record", &self.record.is_some())
            .finish()
    }
}
