//! The template engine and its public render API.

mod config;
mod loader;
mod preprocess;
mod redirect;

pub use config::EngineConfig;
pub use redirect::RedirectTable;

use crate::behavior::{Behavior, BehaviorRegistry, ScriptHost};
use crate::cache::EngineCache;
use crate::error::{FrescoError, Result};
use crate::fetch::HttpFetcher;
use crate::sink::RenderSink;
use loader::Loader;
use serde_json::Value;
use std::sync::Arc;

/// A caching template engine bound to one template/script directory pair.
///
/// `render` is the primary entry point: it resolves redirects, loads and
/// compiles the template on first use (fetching its behavior resource along
/// the way), runs the registered behavior over the caller's data, applies
/// the compiled template, publishes the HTML to the configured sink, and
/// returns the HTML.
pub struct Engine {
    config: EngineConfig,
    cache: EngineCache,
    fetcher: HttpFetcher,
    host: Box<dyn ScriptHost>,
    sink: Option<Box<dyn RenderSink>>,
    redirects: RedirectTable,
}

impl Engine {
    /// Create an engine with its own private cache.
    pub fn new(config: EngineConfig, host: impl ScriptHost + 'static) -> Self {
        Self::with_cache(config, host, EngineCache::new())
    }

    /// Create an engine sharing an existing cache handle.
    ///
    /// Sharing is explicit: engines only see each other's cached templates
    /// when constructed from clones of the same handle.
    pub fn with_cache(
        config: EngineConfig,
        host: impl ScriptHost + 'static,
        cache: EngineCache,
    ) -> Self {
        Self {
            config,
            cache,
            fetcher: HttpFetcher::new(),
            host: Box::new(host),
            sink: None,
            redirects: RedirectTable::new(),
        }
    }

    /// Publish every rendered result to `sink` in addition to returning it.
    pub fn with_sink(mut self, sink: impl RenderSink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Replace the default HTTP fetcher (e.g. to change the timeout).
    pub fn with_fetcher(mut self, fetcher: HttpFetcher) -> Self {
        self.fetcher = fetcher;
        self
    }

    /// The engine's configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// A handle to the engine's cache, for sharing or explicit clearing.
    pub fn cache(&self) -> &EngineCache {
        &self.cache
    }

    /// Record or overwrite a template alias, applied once per render.
    pub fn set_redirect(&mut self, source: impl Into<String>, target: impl Into<String>) {
        self.redirects.set(source, target);
    }

    /// Register a behavior directly, bypassing the script host.
    ///
    /// Idempotent: returns `false` if the name already has a behavior.
    pub fn register(&self, name: &str, behavior: impl Behavior + 'static) -> bool {
        BehaviorRegistry::new(&self.cache, &self.config.script_dir)
            .register(name, Arc::new(behavior))
    }

    /// Drop every cached template and behavior, across all namespaces.
    ///
    /// Affects every engine sharing this cache handle. Previously rendered
    /// names fetch again on their next render.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Render a template with the given data.
    ///
    /// Returns the rendered HTML; the configured sink (if any) receives the
    /// same HTML before this returns. The first render of a name performs
    /// one template fetch and one behavior fetch (plus one pair per
    /// newly-discovered include); later renders perform none.
    pub fn render(&self, name: &str, data: Value) -> Result<String> {
        let name = self.redirects.resolve(name);

        Loader::new(&self.fetcher, &self.cache, &self.config, self.host.as_ref())
            .ensure_loaded(name)?;

        let behavior = self
            .cache
            .behavior(&self.config.script_dir, name)
            .ok_or_else(|| FrescoError::UnregisteredBehavior {
                name: name.to_string(),
            })?;

        // Every pipeline failure names its template; behaviors returning
        // foreign errors get wrapped so the convention holds.
        let data = behavior.transform(data).map_err(|err| match err {
            wrapped @ FrescoError::BehaviorFailed { .. } => wrapped,
            other => FrescoError::BehaviorFailed {
                name: name.to_string(),
                detail: other.to_string(),
            },
        })?;
        let html = self
            .cache
            .render_template(&self.config.template_dir, name, &data)?;

        if let Some(sink) = &self.sink {
            sink.publish(&html)?;
        }
        behavior.rendered(&html);

        Ok(html)
    }
}
