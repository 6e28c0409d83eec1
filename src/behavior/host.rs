//! Script hosts: the plugin seam for fetched behavior resources.

use super::{Behavior, BehaviorRegistry};
use crate::error::Result;
use std::collections::HashMap;
use std::sync::Arc;

/// Turns a fetched behavior resource into a registered behavior.
///
/// The loader fetches `{script_dir}/{name}.{extension}` for every template
/// it loads and hands the body to `install`. Implementations are expected to
/// call [`BehaviorRegistry::register`] exactly once per name; registration
/// is idempotent, so re-installation during concurrent loads is harmless.
pub trait ScriptHost: Send + Sync {
    /// File extension of the behavior resources this host consumes.
    fn extension(&self) -> &str;

    /// Register the behavior for `name`, given the fetched `source`.
    fn install(&self, name: &str, source: &str, registry: &BehaviorRegistry<'_>) -> Result<()>;
}

/// Host whose behaviors are supplied up front, keyed by template name.
///
/// The fetched source is ignored; the fetch itself still happens so the
/// load pipeline keeps its shape. A template without a matching behavior is
/// not an install error — the gap surfaces at render time as an
/// unregistered-behavior error.
pub struct StaticScriptHost {
    behaviors: HashMap<String, Arc<dyn Behavior>>,
    extension: String,
}

impl StaticScriptHost {
    /// Create an empty host with the default `txt` resource extension.
    pub fn new() -> Self {
        Self {
            behaviors: HashMap::new(),
            extension: "txt".to_string(),
        }
    }

    /// Override the behavior resource extension.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Supply the behavior for a template name.
    pub fn behavior(mut self, name: impl Into<String>, behavior: impl Behavior + 'static) -> Self {
        self.behaviors.insert(name.into(), Arc::new(behavior));
        self
    }
}

impl Default for StaticScriptHost {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptHost for StaticScriptHost {
    fn extension(&self) -> &str {
        &self.extension
    }

    fn install(&self, name: &str, _source: &str, registry: &BehaviorRegistry<'_>) -> Result<()> {
        match self.behaviors.get(name) {
            Some(behavior) => {
                registry.register(name, Arc::clone(behavior));
            }
            None => {
                tracing::warn!("No behavior supplied for template \"{}\"", name);
            }
        }
        Ok(())
    }
}
