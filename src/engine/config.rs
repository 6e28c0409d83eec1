//! Engine configuration.

use serde::{Deserialize, Serialize};

/// Per-instance engine configuration.
///
/// Both directories are URL prefixes; resources are fetched from
/// `{template_dir}/{name}.tera` and `{script_dir}/{name}.{ext}` where the
/// extension comes from the configured script host. The configuration is
/// fixed at construction and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// URL prefix for template resources.
    pub template_dir: String,
    /// URL prefix for behavior resources.
    pub script_dir: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            template_dir: "/templates".to_string(),
            script_dir: "/templates".to_string(),
        }
    }
}

impl EngineConfig {
    /// Configuration with both directories at the default `/templates`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the template directory prefix.
    pub fn template_dir(mut self, dir: impl Into<String>) -> Self {
        self.template_dir = dir.into();
        self
    }

    /// Set the script directory prefix.
    pub fn script_dir(mut self, dir: impl Into<String>) -> Self {
        self.script_dir = dir.into();
        self
    }
}
