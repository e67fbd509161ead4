//! Registry of resources and data sources served by the provider.

use std::collections::HashMap;
use std::sync::Arc;

use crate::lifecycle::{DataSource, ErasedResource};

/// Registry mapping host-visible type names to their adapters.
#[derive(Default)]
pub struct ResourceRegistry {
    resources: HashMap<String, Arc<dyn ErasedResource>>,
    data_sources: HashMap<String, Arc<dyn DataSource>>,
}

impl ResourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<R: ErasedResource + 'static>(&mut self, resource: R) {
        self.register_arc(Arc::new(resource));
    }

    pub fn register_arc(&mut self, resource: Arc<dyn ErasedResource>) {
        let name = resource.type_name().to_string();
        self.resources.insert(name, resource);
    }

    pub fn register_data_source<D: DataSource + 'static>(&mut self, source: D) {
        let name = source.type_name().to_string();
        self.data_sources.insert(name, Arc::new(source));
    }

    pub fn resource(&self, type_name: &str) -> Option<Arc<dyn ErasedResource>> {
        self.resources.get(type_name).cloned()
    }

    pub fn data_source(&self, type_name: &str) -> Option<Arc<dyn DataSource>> {
        self.data_sources.get(type_name).cloned()
    }

    pub fn has(&self, type_name: &str) -> bool {
        self.resources.contains_key(type_name) || self.data_sources.contains_key(type_name)
    }

    pub fn resource_names(&self) -> Vec<&str> {
        self.resources.keys().map(|name| name.as_str()).collect()
    }

    pub fn data_source_names(&self) -> Vec<&str> {
        self.data_sources.keys().map(|name| name.as_str()).collect()
    }
}
