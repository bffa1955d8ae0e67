use std::{
    any::TypeId,
    collections::HashMap,
    sync::{Arc, RwLock},
};

use crate::{
    model::ModelType,
    schema::registry::{FieldMeta, FieldRegistry},
    Error, Result,
};

/// Process-lifetime cache of resolved field registries, keyed by class.
///
/// Injected into the factory at engine startup rather than held as module
/// state, so tests can construct isolated instances. Entries are never
/// invalidated; class shape is static.
#[derive(Default)]
pub struct MetadataCache {
    registries: RwLock<HashMap<TypeId, Arc<FieldRegistry>>>,
}

impl MetadataCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of classes with a populated registry.
    pub fn len(&self) -> usize {
        self.registries.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, model: &ModelType) -> bool {
        self.registries.read().unwrap().contains_key(&model.id())
    }

    /// Returns the class's field registry, populating it on first use.
    ///
    /// The miss path instantiates one throwaway probe instance, extracts
    /// its registry, and installs it. Racing threads may each build a
    /// registry for the same class; the first insert wins and the losers
    /// return the winning entry, discarding their probe work. Hits take
    /// only a read lock.
    pub fn registry(&self, model: &ModelType) -> Result<Arc<FieldRegistry>> {
        if let Some(registry) = self.registries.read().unwrap().get(&model.id()) {
            return Ok(registry.clone());
        }

        let hooks = model.record_model().ok_or_else(|| Error::ClassIntrospection {
            model: model.name(),
            reason: "not a record model".to_string(),
        })?;

        let probe = (hooks.probe)().map_err(|err| Error::ClassIntrospection {
            model: model.name(),
            reason: err.to_string(),
        })?;
        let registry = Arc::new(FieldRegistry::from_probe(model.name(), probe.as_ref()));

        let mut registries = self.registries.write().unwrap();
        Ok(registries.entry(model.id()).or_insert(registry).clone())
    }

    /// Resolves a field name against the class's registry.
    pub fn resolve(&self, model: &ModelType, field: &str) -> Result<FieldMeta> {
        Ok(self.registry(model)?.resolve(field)?.clone())
    }
}
