//! Behavior functions and their registration protocol.
//!
//! A behavior is the per-template logic that transforms caller data before
//! the compiled template is applied. In the pipeline, behaviors arrive one of
//! two ways: the caller registers them directly on the engine, or a
//! [`ScriptHost`] installs them when the loader fetches a template's
//! companion behavior resource. Fetched source is never executed as code;
//! hosts decide what (if anything) to do with it.

mod host;

pub use host::{ScriptHost, StaticScriptHost};

use crate::cache::EngineCache;
use crate::error::Result;
use serde_json::Value;
use std::sync::Arc;

/// Per-template render logic.
///
/// `transform` runs before template application and produces the data the
/// template actually sees. `rendered` is an optional hook invoked with the
/// final HTML after publication.
pub trait Behavior: Send + Sync {
    /// Transform the caller-supplied data before template application.
    fn transform(&self, data: Value) -> Result<Value>;

    /// Hook invoked with the final HTML once rendering completed.
    fn rendered(&self, _html: &str) {}
}

impl<F> Behavior for F
where
    F: Fn(Value) -> Result<Value> + Send + Sync,
{
    fn transform(&self, data: Value) -> Result<Value> {
        self(data)
    }
}

/// Behavior that passes data through unchanged.
///
/// Useful for templates whose data needs no preparation.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughBehavior;

impl Behavior for PassthroughBehavior {
    fn transform(&self, data: Value) -> Result<Value> {
        Ok(data)
    }
}

/// Registration entry point handed to script hosts.
///
/// Bound to one script namespace; registration is idempotent — once a name
/// holds a behavior, later registrations for it are ignored.
pub struct BehaviorRegistry<'a> {
    cache: &'a EngineCache,
    namespace: &'a str,
}

impl<'a> BehaviorRegistry<'a> {
    pub(crate) fn new(cache: &'a EngineCache, namespace: &'a str) -> Self {
        Self { cache, namespace }
    }

    /// Register a behavior for `name`.
    ///
    /// Returns `true` if the behavior was stored, `false` if the name was
    /// already registered (the existing behavior stays in effect).
    pub fn register(&self, name: &str, behavior: Arc<dyn Behavior>) -> bool {
        self.cache.register_behavior(self.namespace, name, behavior)
    }
}
