//! Render output sinks.
//!
//! An engine can optionally publish each rendered result somewhere besides
//! the return value. The sink replaces the target's full previous content on
//! every publication; without a configured sink the engine is usable purely
//! as a string-producing template function.

use crate::error::Result;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Destination for rendered HTML.
pub trait RenderSink: Send + Sync {
    /// Replace the sink's entire content with `html`.
    fn publish(&self, html: &str) -> Result<()>;
}

/// Sink that writes rendered output to a file, truncating previous content.
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    /// Create a sink writing to the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RenderSink for FileSink {
    fn publish(&self, html: &str) -> Result<()> {
        fs::write(&self.path, html)?;
        Ok(())
    }
}

/// In-memory sink holding the most recent rendered output.
///
/// Cloning shares the underlying buffer, so a test or embedder can keep a
/// handle while the engine owns another.
#[derive(Clone, Default)]
pub struct MemorySink {
    contents: Arc<Mutex<String>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently published output, or an empty string.
    pub fn contents(&self) -> String {
        self.contents.lock().unwrap().clone()
    }
}

impl RenderSink for MemorySink {
    fn publish(&self, html: &str) -> Result<()> {
        let mut contents = self.contents.lock().unwrap();
        contents.clear();
        contents.push_str(html);
        Ok(())
    }
}
