//! The template load pipeline.
//!
//! Loading a name fetches its template text, recursively loads every
//! included template, compiles the result into the cache, then fetches the
//! companion behavior resource and hands it to the script host. A cached
//! name skips the whole pipeline, behavior fetch included — template and
//! behavior are only ever cached together, so the shortcut is sound.

use super::preprocess;
use super::EngineConfig;
use crate::behavior::{BehaviorRegistry, ScriptHost};
use crate::cache::EngineCache;
use crate::error::{FrescoError, Result};
use crate::fetch::HttpFetcher;

/// Extension for template resources.
const TEMPLATE_EXT: &str = "tera";

pub(crate) struct Loader<'a> {
    fetcher: &'a HttpFetcher,
    cache: &'a EngineCache,
    config: &'a EngineConfig,
    host: &'a dyn ScriptHost,
}

impl<'a> Loader<'a> {
    pub fn new(
        fetcher: &'a HttpFetcher,
        cache: &'a EngineCache,
        config: &'a EngineConfig,
        host: &'a dyn ScriptHost,
    ) -> Self {
        Self {
            fetcher,
            cache,
            config,
            host,
        }
    }

    /// Make sure `name` (and everything it includes) is compiled and its
    /// behavior installed. No retry: a failed name stays uncached and the
    /// next render runs the pipeline again from the start.
    pub fn ensure_loaded(&self, name: &str) -> Result<()> {
        let mut chain = Vec::new();
        self.load(name, &mut chain)
    }

    fn load(&self, name: &str, chain: &mut Vec<String>) -> Result<()> {
        if self.cache.has_template(&self.config.template_dir, name) {
            tracing::debug!("Template \"{}\" already cached", name);
            return Ok(());
        }

        if chain.iter().any(|loading| loading == name) {
            let mut cycle = chain.clone();
            cycle.push(name.to_string());
            return Err(FrescoError::CircularInclude {
                chain: cycle.join(" -> "),
            });
        }
        chain.push(name.to_string());

        let url = format!("{}/{}.{}", self.config.template_dir, name, TEMPLATE_EXT);
        let raw = self
            .fetcher
            .fetch(&url)
            .map_err(|e| FrescoError::TemplateFetch {
                name: name.to_string(),
                detail: e.to_string(),
            })?;

        // Every include target passes through the full pipeline before the
        // parent compiles, so the rewritten include tags always resolve.
        for include in preprocess::include_names(&raw) {
            self.load(&include, chain)?;
        }

        let expanded = preprocess::rewrite_includes(&raw);
        self.cache
            .insert_template(&self.config.template_dir, name, &expanded)?;

        let script_url = format!(
            "{}/{}.{}",
            self.config.script_dir,
            name,
            self.host.extension()
        );
        let source = self
            .fetcher
            .fetch(&script_url)
            .map_err(|e| FrescoError::ScriptFetch {
                name: name.to_string(),
                detail: e.to_string(),
            })?;

        let registry = BehaviorRegistry::new(self.cache, &self.config.script_dir);
        self.host.install(name, &source, &registry)?;

        chain.pop();
        Ok(())
    }
}
