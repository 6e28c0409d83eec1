//! In-memory cache storage.

use crate::behavior::Behavior;
use crate::error::{FrescoError, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tera::{Context, Tera};

/// Shared cache of compiled templates and registered behaviors.
///
/// Cloning produces another handle to the same store; engines that should
/// share cached templates are constructed with clones of one handle. There
/// is no eviction — the working set is a small, known template inventory.
#[derive(Clone, Default)]
pub struct EngineCache {
    inner: Arc<Mutex<CacheInner>>,
}

#[derive(Default)]
struct CacheInner {
    /// One compiled template set per namespace.
    templates: HashMap<String, Tera>,
    /// Registered behaviors, keyed by (namespace, name).
    scripts: HashMap<(String, String), Arc<dyn Behavior>>,
}

impl EngineCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a compiled template exists for `(namespace, name)`.
    pub fn has_template(&self, namespace: &str, name: &str) -> bool {
        let inner = self.inner.lock().unwrap();
        inner
            .templates
            .get(namespace)
            .is_some_and(|tera| tera.get_template_names().any(|n| n == name))
    }

    /// Compile `source` and store it under `(namespace, name)`.
    ///
    /// Compilation happens at insertion; a syntax error leaves the cache
    /// untouched for that name. Inserting an existing name recompiles and
    /// replaces it (last writer wins during overlapping loads).
    pub fn insert_template(&self, namespace: &str, name: &str, source: &str) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        inner
            .templates
            .entry(namespace.to_string())
            .or_default()
            .add_raw_template(name, source)
            .map_err(|source| FrescoError::TemplateCompile {
                name: name.to_string(),
                source,
            })
    }

    /// Apply the compiled template for `(namespace, name)` to `data`.
    pub fn render_template(&self, namespace: &str, name: &str, data: &Value) -> Result<String> {
        let context = Context::from_serialize(data).map_err(|source| FrescoError::RenderFailed {
            name: name.to_string(),
            source,
        })?;

        let inner = self.inner.lock().unwrap();
        let tera = inner
            .templates
            .get(namespace)
            .ok_or_else(|| FrescoError::RenderFailed {
                name: name.to_string(),
                source: tera::Error::msg(format!("namespace {namespace} has no templates")),
            })?;

        tera.render(name, &context)
            .map_err(|source| FrescoError::RenderFailed {
                name: name.to_string(),
                source,
            })
    }

    /// Register a behavior for `(namespace, name)`.
    ///
    /// Idempotent: returns `false` and keeps the existing behavior if the
    /// name is already registered.
    pub fn register_behavior(
        &self,
        namespace: &str,
        name: &str,
        behavior: Arc<dyn Behavior>,
    ) -> bool {
        let mut inner = self.inner.lock().unwrap();
        let key = (namespace.to_string(), name.to_string());
        if inner.scripts.contains_key(&key) {
            return false;
        }
        inner.scripts.insert(key, behavior);
        true
    }

    /// Look up the registered behavior for `(namespace, name)`.
    pub fn behavior(&self, namespace: &str, name: &str) -> Option<Arc<dyn Behavior>> {
        let inner = self.inner.lock().unwrap();
        inner
            .scripts
            .get(&(namespace.to_string(), name.to_string()))
            .cloned()
    }

    /// Drop every template and behavior across all namespaces.
    ///
    /// Every engine holding a clone of this handle sees the clear.
    pub fn clear(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.templates.clear();
        inner.scripts.clear();
    }
}
