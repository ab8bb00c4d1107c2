//! Shared fakes for application tests
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use edgebinder_domain::{
    AdapterConfiguration, AdapterFactory, Binding, ConfigMap, ContainerService, EntityRef, Error,
    FactoryOutput, PersistenceAdapter, Result, ServiceContainer,
};
use serde_json::Value;

/// Container backed by a plain map
#[derive(Default)]
pub struct TestContainer {
    services: HashMap<String, ContainerService>,
}

impl TestContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Container whose `config` service returns `tree`
    pub fn with_config(tree: Value) -> Self {
        Self::new().with_service("config", ContainerService::Config(tree))
    }

    pub fn with_service(mut self, key: &str, service: ContainerService) -> Self {
        self.services.insert(key.to_string(), service);
        self
    }

    pub fn with_factory<F: AdapterFactory + 'static>(self, key: &str, factory: F) -> Self {
        self.with_service(key, ContainerService::AdapterFactory(Arc::new(factory)))
    }

    pub fn into_arc(self) -> Arc<dyn ServiceContainer> {
        Arc::new(self)
    }
}

impl ServiceContainer for TestContainer {
    fn has(&self, key: &str) -> bool {
        self.services.contains_key(key)
    }

    fn get(&self, key: &str) -> Result<ContainerService> {
        self.services
            .get(key)
            .cloned()
            .ok_or_else(|| Error::missing_service(key))
    }
}

/// Adapter that records bindings in a vector and reports a fixed label
pub struct StubAdapter {
    label: String,
    bindings: Mutex<Vec<Binding>>,
}

impl StubAdapter {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            bindings: Mutex::new(Vec::new()),
        }
    }

    pub fn arc(label: &str) -> Arc<dyn PersistenceAdapter> {
        Arc::new(Self::new(label))
    }
}

#[async_trait]
impl PersistenceAdapter for StubAdapter {
    fn adapter_name(&self) -> &str {
        &self.label
    }

    async fn store(&self, binding: Binding) -> Result<()> {
        let mut bindings = self.bindings.lock().unwrap();
        bindings.retain(|b| b.id != binding.id);
        bindings.push(binding);
        Ok(())
    }

    async fn find(&self, id: &str) -> Result<Option<Binding>> {
        Ok(self.bindings.lock().unwrap().iter().find(|b| b.id == id).cloned())
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let mut bindings = self.bindings.lock().unwrap();
        let before = bindings.len();
        bindings.retain(|b| b.id != id);
        Ok(bindings.len() != before)
    }

    async fn find_from(&self, entity: &EntityRef) -> Result<Vec<Binding>> {
        Ok(self
            .bindings
            .lock()
            .unwrap()
            .iter()
            .filter(|b| &b.from == entity)
            .cloned()
            .collect())
    }

    async fn find_to(&self, entity: &EntityRef) -> Result<Vec<Binding>> {
        Ok(self
            .bindings
            .lock()
            .unwrap()
            .iter()
            .filter(|b| &b.to == entity)
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.bindings.lock().unwrap().len())
    }
}

/// Factory object exposing only `create_adapter`
pub struct CreateMethodFactory {
    pub label: &'static str,
}

impl AdapterFactory for CreateMethodFactory {
    fn create_adapter(&self, _config: &AdapterConfiguration) -> Option<Result<FactoryOutput>> {
        Some(Ok(Some(StubAdapter::arc(self.label))))
    }
}

/// Factory object that is only invocable
pub struct InvocableFactory {
    pub label: &'static str,
}

impl AdapterFactory for InvocableFactory {
    fn invoke(&self, _config: &AdapterConfiguration) -> Option<Result<FactoryOutput>> {
        Some(Ok(Some(StubAdapter::arc(self.label))))
    }
}

/// Factory whose every convention yields nothing usable, counting attempts
#[derive(Default)]
pub struct UselessFactory {
    pub attempts: Arc<AtomicUsize>,
}

impl AdapterFactory for UselessFactory {
    fn call(&self, _config: &AdapterConfiguration) -> Option<Result<FactoryOutput>> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Some(Ok(None))
    }

    fn create_adapter(&self, _config: &AdapterConfiguration) -> Option<Result<FactoryOutput>> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Some(Ok(None))
    }

    fn invoke(&self, _config: &AdapterConfiguration) -> Option<Result<FactoryOutput>> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Some(Ok(None))
    }
}

/// Convert a JSON object literal into a configuration map
pub fn config_map(value: Value) -> ConfigMap {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}
