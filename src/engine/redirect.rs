//! Template name aliasing.

use std::collections::HashMap;

/// Instance-scoped alias table consulted once at the start of every render.
///
/// Resolution is single-hop: a redirect's target is never itself resolved
/// again, so chains and cycles cannot form.
#[derive(Debug, Default)]
pub struct RedirectTable {
    aliases: HashMap<String, String>,
}

impl RedirectTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record or overwrite an alias.
    pub fn set(&mut self, source: impl Into<String>, target: impl Into<String>) {
        self.aliases.insert(source.into(), target.into());
    }

    /// Resolve `name` through at most one alias hop.
    pub fn resolve<'a>(&'a self, name: &'a str) -> &'a str {
        self.aliases.get(name).map_or(name, String::as_str)
    }
}
